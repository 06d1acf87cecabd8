//! Aibo Core - Video Widget Library for Aibo
//!
//! This crate provides the platform-independent logic of the Aibo video widget:
//! - URL validation for user submissions
//! - Platform adapter selection (Bilibili, YouTube, generic)
//! - Bilibili embed URL transformation
//! - Viewport state (zoom, fullscreen mirror, playback error banner)
//! - View model and styling for the presentation layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Aibo Core                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │     URL      │  │   Platform   │  │    Embed     │           │
//! │  │  Validator   │  │   Adapters   │  │  Transform   │           │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘           │
//! │         │                 │                 │                   │
//! │  ┌──────┴───────┐         └────────┬────────┘                   │
//! │  │  Video Form  │                  │                            │
//! │  └──────┬───────┘           ┌──────┴──────┐                     │
//! │         └──────────────────►│   Widget    │                     │
//! │                             │   Session   │                     │
//! │                             └──────┬──────┘                     │
//! │                                    │                            │
//! │  ┌──────────────┐           ┌──────┴──────┐  ┌──────────────┐   │
//! │  │  Fullscreen  │◄──────────┤  Viewport   │  │  View Model  │   │
//! │  │     Host     │           │ Controller  │  │   + Styles   │   │
//! │  └──────────────┘           └─────────────┘  └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod types;
pub mod validator;
pub mod platform;
pub mod viewport;
pub mod form;
pub mod session;
pub mod style;
pub mod view;

pub use error::{Error, Result};
pub use types::*;
pub use validator::validate;
pub use platform::{select_adapter, EmbedFrame, ExternalPlayer, Platform, Rendered, StreamHint};
pub use viewport::{FullscreenHost, FullscreenRequest, Viewport, ViewportState};
pub use form::{SubmitOutcome, VideoForm};
pub use session::WidgetSession;
pub use style::{CssStyle, ThemeColors, WidgetTheme};
pub use view::{ControlsView, FullscreenIcon, ViewportView, WidgetView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the widget library
pub fn init() {
    tracing::info!(version = VERSION, "Aibo Core initialized");
}
