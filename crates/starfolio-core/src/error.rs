//! Error types for Starfolio

use thiserror::Error;

/// Main error type for Starfolio operations
///
/// The page itself has no recoverable failure states; errors only occur
/// while parsing launch options.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Theme name was not recognized
    #[error("Unknown theme: {0} (expected \"dark\" or \"light\")")]
    UnknownTheme(String),

    /// Motion preference was not recognized
    #[error("Unknown motion preference: {0} (expected \"full\" or \"reduced\")")]
    UnknownMotionPref(String),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownTheme("solarized".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown theme: solarized (expected \"dark\" or \"light\")"
        );
    }

    #[test]
    fn test_motion_pref_error_display() {
        let err = CoreError::UnknownMotionPref("half".to_string());
        assert!(format!("{}", err).contains("half"));
    }
}
