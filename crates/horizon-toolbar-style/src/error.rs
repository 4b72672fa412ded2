//! Error types for the toolbar styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing colors or loading configuration.
///
/// Rendering itself never fails; these only surface from the explicit
/// parsing and loading entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color literal could not be parsed.
    #[error("Invalid color '{token}': {message}")]
    InvalidColor { token: String, message: String },

    /// A configuration document was malformed.
    #[error("Invalid toolbar configuration: {message}")]
    Config { message: String },

    /// File I/O error.
    #[error("Failed to read toolbar configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::invalid_color("#12", "expected 3, 6 or 8 hex digits");
        assert_eq!(
            err.to_string(),
            "Invalid color '#12': expected 3, 6 or 8 hex digits"
        );

        let err = Error::config("unknown theme `sepia`");
        assert!(err.to_string().contains("sepia"));
    }
}
