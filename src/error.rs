//! Error types for the wireframe extraction library.
//!
//! This module defines all error types that can occur while loading images,
//! running detection, and writing the output triad (PNG/JSON/CSS).

/// Result type alias for wireframe library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during wireframe extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode error
    #[error("Image error: {0}")]
    Image(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_message() {
        let err = Error::Image("bad PNG header".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Image error"));
        assert!(msg.contains("bad PNG header"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
