//! Core types for Aibo Core

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a widget session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a displayed video
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Id given to every user-submitted video
    pub const CUSTOM: &'static str = "custom";
    /// Id of the video shown before anything is submitted
    pub const DEFAULT: &'static str = "default";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn custom() -> Self {
        Self::new(Self::CUSTOM)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The video currently shown by the widget.
///
/// Never mutated in place: a successful submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub id: VideoId,
    pub url: String,
    pub title: String,
}

impl VideoDescriptor {
    pub fn new(id: VideoId, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
        }
    }
}

impl Default for VideoDescriptor {
    fn default() -> Self {
        Self::new(
            VideoId::new(VideoId::DEFAULT),
            "https://www.bilibili.com/video/BV1PoF3eeEtF",
            "默认视频",
        )
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Zoom bounds, in tenths of the natural size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest scale (5 = 0.5x)
    pub min_tenths: u8,
    /// Largest scale (20 = 2.0x)
    pub max_tenths: u8,
    /// Scale when the widget is created
    pub initial_tenths: u8,
}

impl ZoomConfig {
    /// Lowest scale any configuration may allow (0.5x)
    pub const FLOOR_TENTHS: u8 = 5;
    /// Highest scale any configuration may allow (2.0x)
    pub const CEILING_TENTHS: u8 = 20;
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_tenths: 5,
            max_tenths: 20,
            initial_tenths: 10,
        }
    }
}

/// User-facing strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Page heading above the URL field
    pub heading: String,
    /// Title shown in the control bar
    pub player_title: String,
    pub input_label: String,
    pub input_placeholder: String,
    pub submit_label: String,
    /// Field error for a rejected URL
    pub invalid_url: String,
    /// Banner shown when the player reports a failure
    pub playback_failed: String,
    /// Title given to user-submitted videos
    pub custom_video_title: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            heading: "你的爱播网站".to_string(),
            player_title: "爱播播放器".to_string(),
            input_label: "输入视频URL".to_string(),
            input_placeholder: "请输入视频URL（支持YouTube、Bilibili等平台）".to_string(),
            submit_label: "播放".to_string(),
            invalid_url: "请输入有效的视频URL（支持YouTube和Bilibili）".to_string(),
            playback_failed: "视频加载失败，请检查URL是否正确或视频是否可用".to_string(),
            custom_video_title: "自定义视频".to_string(),
        }
    }
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub zoom: ZoomConfig,
    /// Video shown before the first submission
    pub default_video: VideoDescriptor,
    pub messages: Messages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            default_video: VideoDescriptor::default(),
            messages: Messages::default(),
        }
    }
}

impl WidgetConfig {
    /// Create config for small embeds where large zoom factors overflow the page
    pub fn compact() -> Self {
        Self {
            zoom: ZoomConfig {
                min_tenths: 8,
                max_tenths: 15,
                initial_tenths: 10,
            },
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Export as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check invariants the viewport and form rely on
    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if zoom.min_tenths < ZoomConfig::FLOOR_TENTHS || zoom.max_tenths > ZoomConfig::CEILING_TENTHS {
            return Err(Error::InvalidConfig(format!(
                "zoom bounds {}..{} exceed {}..{}",
                zoom.min_tenths,
                zoom.max_tenths,
                ZoomConfig::FLOOR_TENTHS,
                ZoomConfig::CEILING_TENTHS
            )));
        }
        if !(zoom.min_tenths <= zoom.initial_tenths && zoom.initial_tenths <= zoom.max_tenths) {
            return Err(Error::InvalidConfig(format!(
                "zoom bounds out of order: min {} initial {} max {}",
                zoom.min_tenths, zoom.initial_tenths, zoom.max_tenths
            )));
        }
        if self.default_video.url.trim().is_empty() {
            return Err(Error::InvalidConfig("default video URL is blank".into()));
        }
        Ok(())
    }
}
