//! URL form - owns the input field and the currently displayed video

use crate::{
    types::{Messages, VideoDescriptor, VideoId},
    validator, Error,
};
use serde::Serialize;
use tracing::{info, warn};

/// Result of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Input was blank; nothing changed
    Ignored,
    /// A new video replaced the current one
    Loaded,
    /// Input failed validation; the field error is set
    Rejected,
}

/// Top-level URL form
#[derive(Debug, Clone)]
pub struct VideoForm {
    input: String,
    current: VideoDescriptor,
    url_error: Option<String>,
    invalid_url_message: String,
    custom_title: String,
}

impl VideoForm {
    /// Create a form showing `initial`
    pub fn new(initial: VideoDescriptor, messages: &Messages) -> Self {
        Self {
            input: String::new(),
            current: initial,
            url_error: None,
            invalid_url_message: messages.invalid_url.clone(),
            custom_title: messages.custom_video_title.clone(),
        }
    }

    /// Update the text field contents
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the current field contents
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let candidate = self.input.clone();
        self.submit(&candidate)
    }

    /// Submit `candidate` as the next video.
    ///
    /// Blank input keeps the current video. Valid input replaces it with a
    /// custom descriptor carrying the URL exactly as typed.
    pub fn submit(&mut self, candidate: &str) -> SubmitOutcome {
        self.url_error = None;

        if candidate.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        if validator::validate(candidate) {
            self.current = VideoDescriptor::new(VideoId::custom(), candidate, self.custom_title.clone());
            info!(url = candidate, "Video submitted");
            SubmitOutcome::Loaded
        } else {
            let err = Error::InvalidUrl(candidate.to_string());
            warn!(code = err.error_code(), error = %err, "Rejected video URL");
            self.url_error = Some(self.invalid_url_message.clone());
            SubmitOutcome::Rejected
        }
    }

    /// The video currently displayed
    pub fn current(&self) -> &VideoDescriptor {
        &self.current
    }

    /// Field-level validation message
    pub fn url_error(&self) -> Option<&str> {
        self.url_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> VideoForm {
        VideoForm::new(VideoDescriptor::default(), &Messages::default())
    }

    #[test]
    fn test_valid_submission_replaces_video() {
        let mut form = form();
        let url = "https://www.bilibili.com/video/BV1234567";

        assert_eq!(form.submit(url), SubmitOutcome::Loaded);
        assert_eq!(form.current().id.as_str(), "custom");
        assert_eq!(form.current().url, url);
        assert_eq!(form.current().title, "自定义视频");
        assert!(form.url_error().is_none());
    }

    #[test]
    fn test_invalid_submission_keeps_video() {
        let mut form = form();
        let before = form.current().clone();

        assert_eq!(form.submit("not a url"), SubmitOutcome::Rejected);
        assert_eq!(form.current(), &before);
        assert_eq!(
            form.url_error(),
            Some("请输入有效的视频URL（支持YouTube和Bilibili）")
        );
    }

    #[test]
    fn test_blank_is_noop_and_clears_error() {
        let mut form = form();
        form.submit("not a url");
        assert!(form.url_error().is_some());

        assert_eq!(form.submit("   "), SubmitOutcome::Ignored);
        assert!(form.url_error().is_none());
        assert_eq!(form.current().id.as_str(), "default");
    }

    #[test]
    fn test_submit_input_uses_field() {
        let mut form = form();
        form.set_input("https://youtu.be/abc");
        assert_eq!(form.input(), "https://youtu.be/abc");
        assert_eq!(form.submit_input(), SubmitOutcome::Loaded);
        assert_eq!(form.current().url, "https://youtu.be/abc");
    }

    #[test]
    fn test_untrimmed_input_is_validated_as_typed() {
        let mut form = form();
        assert_eq!(form.submit(" https://youtu.be/abc"), SubmitOutcome::Rejected);
    }
}
