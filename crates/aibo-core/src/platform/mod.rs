//! Platform adapters - classify a video URL and describe how to render it
//!
//! Each URL maps to exactly one [`Platform`]. Bilibili pages are shown in a
//! sandboxed embed frame after their URL is rewritten to the embeddable
//! player; YouTube and everything else go to the external player component.

mod bilibili;
mod stream;

pub use bilibili::{embed_url as bilibili_embed_url, video_id as bilibili_video_id};
pub use stream::{detect_stream_hint, StreamHint};

use crate::style::CssStyle;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

static BILIBILI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(bilibili\.com/video/([A-Za-z0-9]+)|player\.bilibili\.com)").expect("valid regex")
});

static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(youtube\.com|youtu\.be)").expect("valid regex"));

/// Permissions granted to the embedded frame
pub const FRAME_ALLOW: &str =
    "autoplay; fullscreen; microphone; camera; display-capture; picture-in-picture; web-share; encrypted-media";

/// Sandbox capabilities of the embedded frame
pub const FRAME_SANDBOX: &str =
    "allow-same-origin allow-scripts allow-popups allow-presentation allow-forms";

/// Supported video sources, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Bilibili watch pages and player URLs, embedded as a frame
    Bilibili,
    /// YouTube pages, handed to the external player
    YouTube,
    /// Anything else, handed to the external player
    Generic,
}

impl Platform {
    /// All platforms in priority order
    pub const ALL: [Platform; 3] = [Platform::Bilibili, Platform::YouTube, Platform::Generic];

    /// Stable adapter name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Bilibili => "bilibili",
            Platform::YouTube => "youtube",
            Platform::Generic => "default",
        }
    }

    /// Whether this adapter can handle `url`. The generic adapter accepts anything.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Platform::Bilibili => BILIBILI_RE.is_match(url),
            Platform::YouTube => YOUTUBE_RE.is_match(url),
            Platform::Generic => true,
        }
    }

    /// URL handed to the renderer after platform-specific rewriting
    pub fn embed_url<'a>(&self, url: &'a str) -> Cow<'a, str> {
        match self {
            Platform::Bilibili => bilibili::embed_url(url),
            Platform::YouTube | Platform::Generic => Cow::Borrowed(url),
        }
    }

    /// Describe the content for `url`.
    ///
    /// Never fails: malformed URLs either degrade to an unchanged embed or
    /// reach the external player, which reports failures through its error
    /// callback.
    pub fn render(&self, url: &str, style: &CssStyle) -> Rendered {
        match self {
            Platform::Bilibili => Rendered::Frame(EmbedFrame {
                src: self.embed_url(url).into_owned(),
                width: "100%",
                height: "100%",
                frame_border: "0",
                allow_fullscreen: true,
                allow: FRAME_ALLOW,
                sandbox: FRAME_SANDBOX,
                style: style.clone(),
            }),
            Platform::YouTube | Platform::Generic => Rendered::Player(ExternalPlayer {
                url: url.to_string(),
                width: "100%",
                height: "100%",
                controls: true,
                stream: detect_stream_hint(url),
                style: style.clone(),
            }),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the adapter for `url`; the generic adapter is the fallback.
pub fn select_adapter(url: &str) -> Platform {
    let platform = if Platform::Bilibili.matches(url) {
        Platform::Bilibili
    } else if Platform::YouTube.matches(url) {
        Platform::YouTube
    } else {
        Platform::Generic
    };
    debug!(url, platform = %platform, "Adapter selected");
    platform
}

/// Sandboxed embed frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedFrame {
    pub src: String,
    pub width: &'static str,
    pub height: &'static str,
    pub frame_border: &'static str,
    pub allow_fullscreen: bool,
    pub allow: &'static str,
    pub sandbox: &'static str,
    pub style: CssStyle,
}

/// Props for the external player component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPlayer {
    pub url: String,
    pub width: &'static str,
    pub height: &'static str,
    pub controls: bool,
    pub stream: StreamHint,
    pub style: CssStyle,
}

/// Renderable output of an adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Rendered {
    Frame(EmbedFrame),
    Player(ExternalPlayer),
}

impl Rendered {
    /// URL the content will load
    pub fn source(&self) -> &str {
        match self {
            Rendered::Frame(frame) => &frame.src,
            Rendered::Player(player) => &player.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_bilibili() {
        assert_eq!(
            select_adapter("https://www.bilibili.com/video/BV1234567"),
            Platform::Bilibili
        );
        assert_eq!(
            select_adapter("https://player.bilibili.com/player.html?bvid=BV1"),
            Platform::Bilibili
        );
    }

    #[test]
    fn test_select_youtube() {
        assert_eq!(select_adapter("https://www.youtube.com/watch?v=12345"), Platform::YouTube);
        assert_eq!(select_adapter("https://youtu.be/12345"), Platform::YouTube);
    }

    #[test]
    fn test_select_generic_fallback() {
        assert_eq!(select_adapter("invalid-url"), Platform::Generic);
        assert_eq!(select_adapter(""), Platform::Generic);
        // Watch path without an id is not a Bilibili match
        assert_eq!(select_adapter("https://bilibili.com/video/"), Platform::Generic);
    }

    #[test]
    fn test_bilibili_wins_over_youtube() {
        let url = "https://www.bilibili.com/video/BV1abc?from=youtube.com";
        assert_eq!(select_adapter(url), Platform::Bilibili);
    }

    #[test]
    fn test_exactly_one_first_match() {
        for url in ["https://youtu.be/x", "https://bilibili.com/video/BV1", "https://a.b/c.mp4"] {
            let first = Platform::ALL.into_iter().find(|p| p.matches(url));
            assert_eq!(first, Some(select_adapter(url)));
        }
    }

    #[test]
    fn test_bilibili_renders_frame() {
        let rendered = Platform::Bilibili.render(
            "https://www.bilibili.com/video/BV1234567",
            &CssStyle::fill_parent(),
        );
        let Rendered::Frame(frame) = rendered else {
            panic!("expected an embed frame");
        };
        assert!(frame.src.contains("player.bilibili.com/player.html"));
        assert!(frame.src.contains("bvid=BV1234567"));
        assert!(frame.allow_fullscreen);
        assert!(frame.allow.contains("picture-in-picture"));
        assert!(frame.sandbox.contains("allow-scripts"));
        assert_eq!(frame.style.get("position"), Some("absolute"));
    }

    #[test]
    fn test_youtube_renders_player_unchanged() {
        let url = "https://www.youtube.com/watch?v=12345";
        let rendered = Platform::YouTube.render(url, &CssStyle::new());
        let Rendered::Player(player) = rendered else {
            panic!("expected the external player");
        };
        assert_eq!(player.url, url);
        assert!(player.controls);
        assert_eq!(player.stream, StreamHint::Unknown);
    }

    #[test]
    fn test_generic_renders_with_stream_hint() {
        let rendered = Platform::Generic.render("https://cdn.example.com/a.m3u8", &CssStyle::new());
        assert!(matches!(
            rendered,
            Rendered::Player(ExternalPlayer { stream: StreamHint::Hls, .. })
        ));
    }

    #[test]
    fn test_rendered_json_shape() {
        let rendered = Platform::Generic.render("https://cdn.example.com/a.mp4", &CssStyle::new());
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["kind"], "player");
        assert_eq!(json["stream"], "progressive");
        assert_eq!(json["controls"], true);
    }
}
