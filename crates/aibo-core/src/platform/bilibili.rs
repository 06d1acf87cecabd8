//! Bilibili embed URL transformation

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::warn;

/// Host of Bilibili's embeddable player
pub const PLAYER_HOST: &str = "player.bilibili.com";

/// Path marker of a Bilibili watch page
const VIDEO_PATH: &str = "bilibili.com/video/";

/// Fixed player parameters appended after the video id
const PLAYER_PARAMS: &str =
    "page=1&high_quality=1&danmaku=0&autoplay=0&as_wide=1&allowfullscreen=true&quality=112";

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/video/([A-Za-z0-9]+)").expect("valid regex"));

/// Extract the alphanumeric video id following `/video/`
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite a Bilibili URL into something the embedded player accepts.
///
/// Watch pages become protocol-relative `player.html?bvid=...` URLs. URLs
/// already on the player host lose their scheme and gain `autoplay=0` when
/// no autoplay parameter is present. Anything else, including watch pages
/// whose id cannot be extracted, is returned unchanged. The transform is
/// idempotent.
pub fn embed_url(url: &str) -> Cow<'_, str> {
    if url.contains(VIDEO_PATH) {
        match video_id(url) {
            Some(bvid) => Cow::Owned(format!(
                "//{PLAYER_HOST}/player.html?bvid={bvid}&{PLAYER_PARAMS}"
            )),
            None => {
                warn!(url, "No Bilibili video id found, embedding URL unchanged");
                Cow::Borrowed(url)
            }
        }
    } else if url.contains(PLAYER_HOST) {
        let mut embed = url.replacen("https:", "", 1).replacen("http:", "", 1);
        if !embed.contains("autoplay=") {
            embed.push(if embed.contains('?') { '&' } else { '?' });
            embed.push_str("autoplay=0");
        }
        Cow::Owned(embed)
    } else {
        Cow::Borrowed(url)
    }
}
