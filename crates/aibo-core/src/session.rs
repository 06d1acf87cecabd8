//! Widget Session - orchestrates the form and the viewport
//!
//! Coordinates:
//! - URL submission and validation
//! - Adapter selection for the current video
//! - Zoom and fullscreen transitions
//! - The two error channels (field error and playback banner)

use crate::{
    form::{SubmitOutcome, VideoForm},
    platform::{select_adapter, Platform, Rendered},
    style::CssStyle,
    types::{SessionId, VideoDescriptor, WidgetConfig},
    view::WidgetView,
    viewport::{FullscreenHost, FullscreenRequest, Viewport},
    Error, Result,
};
use tracing::{error, info, instrument};

/// A single mounted widget
#[derive(Debug, Clone)]
pub struct WidgetSession {
    /// Unique session ID
    id: SessionId,
    /// Session configuration
    config: WidgetConfig,
    form: VideoForm,
    viewport: Viewport,
    /// Number of accepted submissions; each one asks for a fresh player
    loads: u64,
}

impl WidgetSession {
    /// Create a session showing the configured default video
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;

        let session = Self {
            id: SessionId::new(),
            form: VideoForm::new(config.default_video.clone(), &config.messages),
            viewport: Viewport::new(config.zoom),
            loads: 0,
            config,
        };

        info!(
            session_id = %session.id,
            url = %session.form.current().url,
            platform = %session.platform(),
            "Widget session created"
        );

        Ok(session)
    }

    /// Get session ID
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn form(&self) -> &VideoForm {
        &self.form
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The video currently displayed
    pub fn current_video(&self) -> &VideoDescriptor {
        self.form.current()
    }

    /// Accepted submissions so far. Renderers remount the player whenever
    /// this changes, even if the content is identical.
    pub fn load_count(&self) -> u64 {
        self.loads
    }

    /// Adapter for the current video
    pub fn platform(&self) -> Platform {
        select_adapter(&self.form.current().url)
    }

    /// Content for the current video
    pub fn render(&self) -> Rendered {
        let url = &self.form.current().url;
        select_adapter(url).render(url, &CssStyle::fill_parent())
    }

    /// Update the URL field
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.form.set_input(value);
    }

    /// Submit the URL field
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit_input();
        self.after_submit(outcome);
        outcome
    }

    /// Submit `candidate` as the next video
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit(&mut self, candidate: &str) -> SubmitOutcome {
        let outcome = self.form.submit(candidate);
        self.after_submit(outcome);
        outcome
    }

    fn after_submit(&mut self, outcome: SubmitOutcome) {
        if outcome == SubmitOutcome::Loaded {
            // The player is reloaded, so the previous playback error no longer applies
            self.loads += 1;
            self.viewport.clear_error();
            info!(
                session_id = %self.id,
                url = %self.form.current().url,
                platform = %self.platform(),
                "Loading video"
            );
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    /// Request a fullscreen change on the viewport container behind `host`
    pub fn toggle_fullscreen<H: FullscreenHost + ?Sized>(&self, host: &mut H) -> FullscreenRequest {
        self.viewport.toggle_fullscreen(host)
    }

    /// Browser fullscreen change notification
    pub fn on_fullscreen_change(&mut self, active: bool) {
        self.viewport.on_fullscreen_change(active);
    }

    /// Put `message` in the viewport banner
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.viewport.report_error(message);
    }

    /// Player error callback: logs `detail` and shows the fixed failure banner
    pub fn report_playback_failure(&mut self, detail: &str) {
        let err = Error::Playback(detail.to_string());
        error!(
            session_id = %self.id,
            url = %self.form.current().url,
            code = err.error_code(),
            error = %err,
            "Video failed to load"
        );
        let message = self.config.messages.playback_failed.clone();
        self.viewport.report_error(message);
    }

    /// Build the complete view model
    pub fn view(&self) -> WidgetView {
        WidgetView::build(&self.form, &self.viewport, &self.config.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = WidgetSession::new(WidgetConfig::default()).unwrap();
        assert_eq!(session.current_video().id.as_str(), "default");
        assert_eq!(session.platform(), Platform::Bilibili);
        assert_eq!(session.viewport().scale(), 1.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = WidgetConfig::default();
        config.zoom.initial_tenths = 30;
        assert!(WidgetSession::new(config).is_err());
    }

    #[test]
    fn test_playback_failure_banner() {
        let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
        session.report_playback_failure("MEDIA_ERR_NETWORK");

        assert_eq!(
            session.viewport().error(),
            Some("视频加载失败，请检查URL是否正确或视频是否可用")
        );
        assert!(session.form().url_error().is_none());
    }

    #[test]
    fn test_new_video_clears_banner() {
        let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
        session.report_playback_failure("boom");

        session.submit("not a url");
        assert!(session.viewport().error().is_some());

        session.submit("https://youtu.be/abc");
        assert!(session.viewport().error().is_none());
        assert_eq!(session.platform(), Platform::YouTube);
    }

    #[test]
    fn test_resubmitting_failed_video_requests_reload() {
        let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
        let url = "https://www.bilibili.com/video/BV1234567";

        session.submit(url);
        let loads = session.load_count();
        let content = session.render();
        session.report_playback_failure("MEDIA_ERR_NETWORK");

        assert_eq!(session.submit(url), SubmitOutcome::Loaded);
        assert!(session.viewport().error().is_none());
        assert_eq!(session.render(), content);
        assert_eq!(session.load_count(), loads + 1);
    }

    #[test]
    fn test_rejected_and_blank_submissions_do_not_reload() {
        let mut session = WidgetSession::new(WidgetConfig::default()).unwrap();
        assert_eq!(session.load_count(), 0);

        session.submit("not a url");
        session.submit("   ");
        assert_eq!(session.load_count(), 0);
    }
}
