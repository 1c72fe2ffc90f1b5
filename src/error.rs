//! Error types for the color_census library

use thiserror::Error;

/// Result type alias for color_census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Error types for color census operations
#[derive(Error, Debug)]
pub enum CensusError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A numeric color code fell outside the valid bucket range
    #[error("Invalid color code: {code}")]
    InvalidColorCode { code: usize },

    /// Wrong number of command-line inputs
    #[error("Incorrect input: expected exactly one image path")]
    Usage,
}

impl CensusError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the plain-text message printed at the CLI boundary
    ///
    /// Matches the historical output strings: wrong arity reports
    /// "Incorrect input" and an out-of-range color code reports
    /// "Error ColorCode". Load failures report their full message.
    pub fn user_message(&self) -> String {
        match self {
            CensusError::Usage => "Incorrect input".to_string(),
            CensusError::InvalidColorCode { .. } => "Error ColorCode".to_string(),
            CensusError::ImageLoad { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_user_message() {
        assert_eq!(CensusError::Usage.user_message(), "Incorrect input");
    }

    #[test]
    fn test_invalid_color_code_user_message() {
        let err = CensusError::InvalidColorCode { code: 42 };
        assert_eq!(err.user_message(), "Error ColorCode");
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_image_load_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CensusError::image_load("Failed to open image file: x.png", io);
        assert!(err.to_string().contains("x.png"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
