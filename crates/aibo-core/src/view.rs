//! View model - everything the presentation layer needs to draw the widget

use crate::{
    form::VideoForm,
    platform::{select_adapter, Platform, Rendered},
    style::CssStyle,
    types::{Messages, VideoDescriptor},
    viewport::Viewport,
};
use serde::Serialize;

/// Icon of the fullscreen button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenIcon {
    Fullscreen,
    FullscreenExit,
}

impl FullscreenIcon {
    /// Text glyph used when no icon font is available
    pub fn glyph(&self) -> &'static str {
        match self {
            FullscreenIcon::Fullscreen => "⛶",
            FullscreenIcon::FullscreenExit => "🗗",
        }
    }
}

/// Control bar state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsView {
    pub zoom_in_enabled: bool,
    pub zoom_out_enabled: bool,
    pub fullscreen_icon: FullscreenIcon,
    /// Foreground color of the title and buttons
    pub foreground: &'static str,
    /// Button background
    pub button_background: &'static str,
}

/// Viewport card with the player and its controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportView {
    pub platform: Platform,
    pub title: String,
    /// Playback failure banner
    pub banner: Option<String>,
    pub content: Rendered,
    pub is_fullscreen: bool,
    pub container_style: CssStyle,
    pub video_box_style: CssStyle,
    pub controls_style: CssStyle,
    pub controls: ControlsView,
}

impl ViewportView {
    pub fn build(viewport: &Viewport, video: &VideoDescriptor, messages: &Messages) -> Self {
        let platform = select_adapter(&video.url);
        let fullscreen = viewport.is_fullscreen();

        Self {
            platform,
            title: messages.player_title.clone(),
            banner: viewport.error().map(str::to_string),
            content: platform.render(&video.url, &CssStyle::fill_parent()),
            is_fullscreen: fullscreen,
            container_style: container_style(fullscreen),
            video_box_style: video_box_style(viewport.scale()),
            controls_style: controls_style(fullscreen),
            controls: ControlsView {
                zoom_in_enabled: viewport.can_zoom_in(),
                zoom_out_enabled: viewport.can_zoom_out(),
                fullscreen_icon: if fullscreen {
                    FullscreenIcon::FullscreenExit
                } else {
                    FullscreenIcon::Fullscreen
                },
                foreground: if fullscreen { "white" } else { "inherit" },
                button_background: if fullscreen {
                    "rgba(255, 255, 255, 0.1)"
                } else {
                    "rgba(0, 0, 0, 0.05)"
                },
            },
        }
    }
}

/// Whole widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub heading: String,
    pub input_label: String,
    pub input_placeholder: String,
    pub submit_label: String,
    pub input: String,
    /// Field-level validation message
    pub url_error: Option<String>,
    pub video: VideoDescriptor,
    pub viewport: ViewportView,
}

impl WidgetView {
    pub fn build(form: &VideoForm, viewport: &Viewport, messages: &Messages) -> Self {
        Self {
            heading: messages.heading.clone(),
            input_label: messages.input_label.clone(),
            input_placeholder: messages.input_placeholder.clone(),
            submit_label: messages.submit_label.clone(),
            input: form.input().to_string(),
            url_error: form.url_error().map(str::to_string),
            video: form.current().clone(),
            viewport: ViewportView::build(viewport, form.current(), messages),
        }
    }
}

/// CSS transform for a scale factor, formatted like `scale(1)` or `scale(1.1)`
pub fn scale_transform(scale: f64) -> String {
    format!("scale({scale})")
}

/// Style of the viewport card; fills the screen while fullscreen
pub fn container_style(fullscreen: bool) -> CssStyle {
    let style = CssStyle::new().with("position", "relative");
    if fullscreen {
        style
            .with("margin", "0")
            .with("padding", "0")
            .with("height", "100vh")
            .with("width", "100vw")
            .with("border-radius", "0")
    } else {
        style.with("margin", "16px 0").with("padding", "16px")
    }
}

/// Style of the 16:9 box holding the player
pub fn video_box_style(scale: f64) -> CssStyle {
    CssStyle::new()
        .with("position", "relative")
        .with("padding-top", "56.25%")
        .with("overflow", "hidden")
        .with("transform", scale_transform(scale))
}

/// Style of the control bar; overlays the video while fullscreen
pub fn controls_style(fullscreen: bool) -> CssStyle {
    let style = CssStyle::new()
        .with("display", "flex")
        .with("align-items", "center")
        .with("gap", "16px")
        .with("margin-top", "16px")
        .with("border-radius", "4px");
    if fullscreen {
        style
            .with("position", "absolute")
            .with("bottom", "16px")
            .with("left", "16px")
            .with("right", "16px")
            .with("background-color", "rgba(0, 0, 0, 0.5)")
            .with("padding", "8px")
    } else {
        style
            .with("position", "relative")
            .with("bottom", "auto")
            .with("left", "auto")
            .with("right", "auto")
            .with("background-color", "transparent")
            .with("padding", "0")
    }
}
