//! Error types for rotnot-vision

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vision_error_display() {
        let err = VisionError::Decode("bad bytes".to_string());
        assert!(err.to_string().contains("Decode error"));
        assert!(err.to_string().contains("bad bytes"));
    }

    #[test]
    fn test_vision_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing model");
        let err: VisionError = io_err.into();
        match err {
            VisionError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }
}
