//! Error types for Aibo Core

use thiserror::Error;

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Widget error types
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    // Playback errors
    #[error("Playback failed: {0}")]
    Playback(String),

    // Fullscreen errors
    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a fullscreen error
    pub fn fullscreen(msg: impl Into<String>) -> Self {
        Error::Fullscreen(msg.into())
    }

    /// Returns true if this error is shown to the user.
    ///
    /// Validation failures go to the field under the URL input and playback
    /// failures go to the viewport banner. Everything else is only logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Error::InvalidUrl(_) | Error::Playback(_))
    }

    /// Returns the error code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::Playback(_) => "PLAYBACK",
            Error::Fullscreen(_) => "FULLSCREEN",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Serialization(_) => "SERIALIZATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_channels() {
        assert!(Error::InvalidUrl("x".into()).is_user_visible());
        assert!(Error::Playback("x".into()).is_user_visible());
        assert!(!Error::fullscreen("denied").is_user_visible());
        assert!(!Error::InvalidConfig("x".into()).is_user_visible());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::fullscreen("denied").error_code(), "FULLSCREEN");
        assert_eq!(
            Error::fullscreen("denied").to_string(),
            "Fullscreen request failed: denied"
        );
    }
}
