//! Integration tests for Aibo Core

use aibo_core::{
    platform::bilibili_embed_url, validate, Error, FullscreenHost, FullscreenIcon,
    FullscreenRequest, Platform, Rendered, Result, SubmitOutcome, WidgetConfig, WidgetSession,
};

/// Fullscreen host that records requests and lets the test play the browser
#[derive(Default)]
struct FakeBrowser {
    fullscreen: bool,
    requests: Vec<FullscreenRequest>,
    deny: bool,
}

impl FullscreenHost for FakeBrowser {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.requests.push(FullscreenRequest::Enter);
        if self.deny {
            return Err(Error::fullscreen("permission denied"));
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.requests.push(FullscreenRequest::Exit);
        Ok(())
    }
}

fn session() -> WidgetSession {
    WidgetSession::new(WidgetConfig::default()).expect("default config is valid")
}

// =============================================================================
// Submission Scenarios
// =============================================================================

#[test]
fn test_submit_bilibili_video() {
    let mut session = session();
    let url = "https://www.bilibili.com/video/BV1234567";

    assert_eq!(session.submit(url), SubmitOutcome::Loaded);
    assert_eq!(session.current_video().id.as_str(), "custom");
    assert_eq!(session.current_video().url, url);
    assert!(session.form().url_error().is_none());

    let Rendered::Frame(frame) = session.render() else {
        panic!("bilibili videos render as an embed frame");
    };
    assert!(frame.src.contains("bvid=BV1234567"));
    assert!(frame.src.contains("player.html"));
}

#[test]
fn test_submit_invalid_url() {
    let mut session = session();
    let before = session.current_video().clone();

    assert_eq!(session.submit("not a url"), SubmitOutcome::Rejected);
    assert_eq!(session.current_video(), &before);

    let view = session.view();
    assert_eq!(
        view.url_error.as_deref(),
        Some("请输入有效的视频URL（支持YouTube和Bilibili）")
    );
    assert!(view.viewport.banner.is_none());
}

#[test]
fn test_submit_blank_keeps_video() {
    let mut session = session();
    session.set_input("  \t ");
    assert_eq!(session.submit_input(), SubmitOutcome::Ignored);
    assert_eq!(session.current_video().id.as_str(), "default");
    assert!(session.view().url_error.is_none());
}

#[test]
fn test_submit_youtube_uses_external_player() -> anyhow::Result<()> {
    let mut session = session();
    session.set_input("https://www.youtube.com/watch?v=12345");
    session.submit_input();

    assert_eq!(session.platform(), Platform::YouTube);
    let json = serde_json::to_value(session.render())?;
    assert_eq!(json["kind"], "player");
    assert_eq!(json["url"], "https://www.youtube.com/watch?v=12345");
    Ok(())
}

// =============================================================================
// Error Channels
// =============================================================================

#[test]
fn test_playback_failure_shows_banner_only() {
    let mut session = session();
    session.submit("https://youtu.be/abc");
    session.report_playback_failure("player error 150");

    let view = session.view();
    assert_eq!(
        view.viewport.banner.as_deref(),
        Some("视频加载失败，请检查URL是否正确或视频是否可用")
    );
    assert!(view.url_error.is_none());
    assert_eq!(view.video.url, "https://youtu.be/abc");
}

#[test]
fn test_channels_are_independent() {
    let mut session = session();
    session.report_playback_failure("decode error");
    session.submit("bogus");

    let view = session.view();
    assert!(view.viewport.banner.is_some());
    assert!(view.url_error.is_some());
}

#[test]
fn test_repeated_player_errors() {
    let mut session = session();
    session.report_playback_failure("first");
    session.report_playback_failure("second");
    assert!(session.viewport().error().is_some());
}

// =============================================================================
// Viewport
// =============================================================================

#[test]
fn test_zoom_view() {
    let mut session = session();
    session.zoom_in();
    assert_eq!(
        session.view().viewport.video_box_style.get("transform"),
        Some("scale(1.1)")
    );
    session.zoom_out();
    assert_eq!(
        session.view().viewport.video_box_style.get("transform"),
        Some("scale(1)")
    );
}

#[test]
fn test_zoom_buttons_disable_at_bounds() {
    let mut session = session();
    while session.zoom_out() {}
    let controls = session.view().viewport.controls;
    assert!(!controls.zoom_out_enabled);
    assert!(controls.zoom_in_enabled);
    assert_eq!(session.viewport().scale(), 0.5);
}

#[test]
fn test_fullscreen_round_trip() {
    let mut session = session();
    let mut browser = FakeBrowser::default();

    assert_eq!(session.toggle_fullscreen(&mut browser), FullscreenRequest::Enter);
    assert_eq!(browser.requests, vec![FullscreenRequest::Enter]);
    assert!(!session.viewport().is_fullscreen());

    browser.fullscreen = true;
    session.on_fullscreen_change(true);
    let view = session.view();
    assert!(view.viewport.is_fullscreen);
    assert_eq!(view.viewport.controls.fullscreen_icon, FullscreenIcon::FullscreenExit);
    assert_eq!(view.viewport.container_style.get("width"), Some("100vw"));

    assert_eq!(session.toggle_fullscreen(&mut browser), FullscreenRequest::Exit);
    browser.fullscreen = false;
    session.on_fullscreen_change(false);
    assert!(!session.viewport().is_fullscreen());
    assert_eq!(browser.requests.len(), 2);
}

#[test]
fn test_denied_fullscreen_is_only_logged() {
    let mut session = session();
    let mut browser = FakeBrowser {
        deny: true,
        ..Default::default()
    };

    session.toggle_fullscreen(&mut browser);
    assert!(session.viewport().error().is_none());
    assert!(!session.viewport().is_fullscreen());
}

#[test]
fn test_fullscreen_host_as_trait_object() {
    let session = session();
    let mut browser = FakeBrowser::default();
    let host: &mut dyn FullscreenHost = &mut browser;
    assert_eq!(session.toggle_fullscreen(host), FullscreenRequest::Enter);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_validated_urls_pick_a_named_platform() {
    for url in [
        "https://www.youtube.com/watch?v=x",
        "youtu.be/x",
        "https://bilibili.com/video/BV1",
        "https://player.bilibili.com/player.html",
    ] {
        assert!(validate(url));
        assert_ne!(aibo_core::select_adapter(url), Platform::Generic, "{url}");
    }
}

#[test]
fn test_embed_transform_is_idempotent() {
    let once = bilibili_embed_url("https://player.bilibili.com/player.html?cid=1").into_owned();
    assert_eq!(once.matches("autoplay=0").count(), 1);
    assert_eq!(bilibili_embed_url(&once), once);
}

#[test]
fn test_custom_config() {
    let config = WidgetConfig::from_json(
        r#"{"zoom": {"min_tenths": 8, "max_tenths": 12, "initial_tenths": 10},
            "messages": {"playback_failed": "Playback failed"}}"#,
    )
    .unwrap();
    let mut session = WidgetSession::new(config).unwrap();

    session.zoom_in();
    session.zoom_in();
    assert!(!session.zoom_in());
    assert_eq!(session.viewport().scale(), 1.2);

    session.report_playback_failure("x");
    assert_eq!(session.viewport().error(), Some("Playback failed"));
    assert_eq!(session.view().viewport.title, "爱播播放器");
}

#[test]
fn test_config_cannot_widen_zoom_range() {
    let err = WidgetConfig::from_json(
        r#"{"zoom": {"min_tenths": 1, "max_tenths": 40, "initial_tenths": 10}}"#,
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIG");

    let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
    while session.zoom_out() {}
    assert_eq!(session.viewport().state().scale, 0.5);
    while session.zoom_in() {}
    assert_eq!(session.viewport().state().scale, 2.0);
}

#[test]
fn test_retrying_failed_video_reloads_player() {
    let mut session = session();
    let url = "https://www.bilibili.com/video/BV1234567";
    session.submit(url);
    session.report_playback_failure("MEDIA_ERR_NETWORK");
    let before = session.load_count();

    assert_eq!(session.submit(url), SubmitOutcome::Loaded);
    assert!(session.view().viewport.banner.is_none());
    assert!(session.load_count() > before);
}
