//! Stream type hints for the external player

use serde::{Deserialize, Serialize};
use url::Url;

/// What kind of media a generic URL most likely points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamHint {
    /// HLS playlist (.m3u8)
    Hls,
    /// DASH manifest (.mpd)
    Dash,
    /// Single progressive file (.mp4, .webm, ...)
    Progressive,
    Unknown,
}

/// Detect stream type from the URL path extension
pub fn detect_stream_hint(url: &str) -> StreamHint {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return StreamHint::Unknown;
    };

    let path = parsed.path().to_lowercase();
    let ext = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();

    match ext {
        "m3u8" | "m3u" => StreamHint::Hls,
        "mpd" => StreamHint::Dash,
        "mp4" | "m4v" | "webm" | "ogg" | "ogv" | "mov" => StreamHint::Progressive,
        _ => StreamHint::Unknown,
    }
}
