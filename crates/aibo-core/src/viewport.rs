//! Viewport Controller - zoom, fullscreen mirror, and playback error banner
//!
//! The fullscreen flag is owned by the browser. [`Viewport::toggle_fullscreen`]
//! only asks the host to change it; the flag moves when the host reports a
//! fullscreen change through [`Viewport::on_fullscreen_change`].

use crate::{types::ZoomConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Access to the browser fullscreen API for the viewport container
pub trait FullscreenHost {
    /// Whether the browser currently shows an element fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Ask the browser to show the viewport container fullscreen.
    ///
    /// Completion is reported later through the fullscreen change
    /// notification; an `Err` here means the request could not be issued.
    fn request_fullscreen(&mut self) -> Result<()>;

    /// Ask the browser to leave fullscreen
    fn exit_fullscreen(&mut self) -> Result<()>;
}

/// Which way a fullscreen toggle went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Snapshot of the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub scale: f64,
    pub is_fullscreen: bool,
    pub error_message: Option<String>,
}

/// Interactive viewport state
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: ZoomConfig,
    /// Scale in tenths, always within the configured bounds
    scale_tenths: u8,
    is_fullscreen: bool,
    error: Option<String>,
}

impl Viewport {
    /// Create a viewport at the configured initial zoom.
    ///
    /// Bounds are narrowed to 0.5..=2.0 whatever the configuration says.
    pub fn new(zoom: ZoomConfig) -> Self {
        let min_tenths = zoom
            .min_tenths
            .clamp(ZoomConfig::FLOOR_TENTHS, ZoomConfig::CEILING_TENTHS);
        let max_tenths = zoom
            .max_tenths
            .clamp(min_tenths, ZoomConfig::CEILING_TENTHS);
        let zoom = ZoomConfig {
            min_tenths,
            max_tenths,
            initial_tenths: zoom.initial_tenths.clamp(min_tenths, max_tenths),
        };
        Self {
            scale_tenths: zoom.initial_tenths,
            zoom,
            is_fullscreen: false,
            error: None,
        }
    }

    /// Current scale factor (1.0 = natural size)
    pub fn scale(&self) -> f64 {
        f64::from(self.scale_tenths) / 10.0
    }

    /// Current scale in tenths
    pub fn scale_tenths(&self) -> u8 {
        self.scale_tenths
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale_tenths < self.zoom.max_tenths
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale_tenths > self.zoom.min_tenths
    }

    /// Grow by one step. Returns false at the upper bound.
    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.scale_tenths = (self.scale_tenths + 1).min(self.zoom.max_tenths);
        debug!(scale = self.scale(), "Zoom in");
        true
    }

    /// Shrink by one step. Returns false at the lower bound.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.scale_tenths = (self.scale_tenths - 1).max(self.zoom.min_tenths);
        debug!(scale = self.scale(), "Zoom out");
        true
    }

    /// Ask `host` to enter or leave fullscreen, based on the browser's own state.
    ///
    /// Failures are logged and never reach the error banner.
    pub fn toggle_fullscreen<H: FullscreenHost + ?Sized>(&self, host: &mut H) -> FullscreenRequest {
        let (request, result) = if host.is_fullscreen() {
            (FullscreenRequest::Exit, host.exit_fullscreen())
        } else {
            (FullscreenRequest::Enter, host.request_fullscreen())
        };

        match result {
            Ok(()) => debug!(?request, "Fullscreen change requested"),
            Err(e) => warn!(?request, error = %e, code = e.error_code(), "Fullscreen request failed"),
        }

        request
    }

    /// Mirror the browser's fullscreen state
    pub fn on_fullscreen_change(&mut self, active: bool) {
        if self.is_fullscreen != active {
            debug!(active, "Fullscreen changed");
        }
        self.is_fullscreen = active;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Show `message` in the viewport banner
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Current banner message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Take a snapshot of the viewport
    pub fn state(&self) -> ViewportState {
        ViewportState {
            scale: self.scale(),
            is_fullscreen: self.is_fullscreen,
            error_message: self.error.clone(),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
