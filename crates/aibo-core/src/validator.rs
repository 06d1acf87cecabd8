//! URL validation for user submissions

use regex::Regex;
use std::sync::LazyLock;

/// Known video page shapes, matched case-insensitively from the start of the input.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/|bilibili\.com/video/[A-Za-z0-9]+|player\.bilibili\.com)",
    )
    .expect("valid regex")
});

/// Returns true if `url` looks like a supported YouTube or Bilibili video URL.
///
/// Blank input is rejected; callers treat it as a no-op rather than an error.
pub fn validate(url: &str) -> bool {
    VIDEO_URL_RE.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=abc",
            "youtu.be/abc123",
            "https://youtu.be/abc123",
            "https://www.bilibili.com/video/BV1234567",
            "bilibili.com/video/av170001",
            "https://player.bilibili.com/player.html?bvid=BV1",
            "www.player.bilibili.com/player.html",
        ] {
            assert!(validate(url), "{url} should be accepted");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(validate("HTTPS://WWW.YOUTUBE.COM/WATCH?V=X"));
        assert!(validate("https://Bilibili.com/Video/BV1xx"));
    }

    #[test]
    fn test_rejects_everything_else() {
        for url in [
            "",
            "   ",
            "not a url",
            "https://vimeo.com/123",
            "https://www.youtube.com/channel/abc",
            "https://www.bilibili.com/video/",
            "ftp://youtube.com/watch?v=x",
            " https://youtu.be/abc",
            "https://example.com/?u=https://youtu.be/x",
        ] {
            assert!(!validate(url), "{url:?} should be rejected");
        }
    }

    #[test]
    fn test_deterministic() {
        let url = "https://www.bilibili.com/video/BV1PoF3eeEtF";
        assert_eq!(validate(url), validate(url));
    }
}
