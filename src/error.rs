use std::path::PathBuf;

use recolor::{ParseColorError, RecolorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Invalid color '{input}': {reason}")]
    ColorParse {
        input: String,
        reason: ParseColorError,
    },

    #[error("Invalid tolerance {0}: must be between 0 and 255")]
    InvalidTolerance(i64),

    #[error("Unsupported image format: {} (expected .png, .jpg, .jpeg or .gif)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read image {}: {reason}", .path.display())]
    ImageDecode {
        path: PathBuf,
        reason: image::ImageError,
    },

    #[error("Failed to write image {}: {reason}", .path.display())]
    ImageEncode {
        path: PathBuf,
        reason: image::ImageError,
    },

    #[error("Image has no frames: {}", .0.display())]
    NoFrames(PathBuf),

    #[error("Pixel buffer error: {0}")]
    Pixels(#[from] RecolorError),
}

impl ProcessError {
    pub(crate) fn decode(path: &std::path::Path, reason: impl Into<image::ImageError>) -> Self {
        ProcessError::ImageDecode {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn encode(path: &std::path::Path, reason: impl Into<image::ImageError>) -> Self {
        ProcessError::ImageEncode {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_reports_input() {
        let error = ProcessError::ColorParse {
            input: "255,0".to_string(),
            reason: ParseColorError::ComponentCount(2),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color '255,0': expected 3 comma-separated components, found 2"
        );
    }

    #[test]
    fn test_reason_is_reported_once_through_anyhow() {
        let error = ProcessError::ColorParse {
            input: "#12345".to_string(),
            reason: ParseColorError::InvalidHexLength(5),
        };
        let report = format!("{:?}", anyhow::Error::from(error));
        assert_eq!(report.matches("hex").count(), 1, "{report}");
        assert!(!report.contains("Caused by"));
    }

    #[test]
    fn test_invalid_tolerance() {
        let error = ProcessError::InvalidTolerance(300);
        assert_eq!(
            error.to_string(),
            "Invalid tolerance 300: must be between 0 and 255"
        );
    }

    #[test]
    fn test_unsupported_format() {
        let error = ProcessError::UnsupportedFormat(PathBuf::from("photo.bmp"));
        assert_eq!(
            error.to_string(),
            "Unsupported image format: photo.bmp (expected .png, .jpg, .jpeg or .gif)"
        );
    }

    #[test]
    fn test_image_decode_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = ProcessError::decode(std::path::Path::new("in.png"), io);
        assert!(error.to_string().starts_with("Failed to read image in.png: "));
        assert!(error.to_string().contains("missing"));
    }

    #[test]
    fn test_image_encode_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ProcessError::encode(std::path::Path::new("out.png"), io);
        assert!(error
            .to_string()
            .starts_with("Failed to write image out.png: "));
    }

    #[test]
    fn test_pixels_from_recolor_error() {
        let error: ProcessError = RecolorError::DimensionMismatch {
            width: 1,
            height: 1,
            len: 0,
        }
        .into();
        match error {
            ProcessError::Pixels(_) => {}
            _ => panic!("Expected Pixels variant"),
        }
    }
}
