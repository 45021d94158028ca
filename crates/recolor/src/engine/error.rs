//! Unified error type for the recolor public API.

use thiserror::Error;

use crate::color::ParseColorError;

/// Unified error type for the recolor public API.
///
/// # Example
///
/// ```
/// use recolor::{Color, RecolorError};
///
/// fn target(s: &str) -> Result<Color, RecolorError> {
///     Ok(s.parse::<Color>()?)
/// }
///
/// assert!(target("#00ff00").is_ok());
/// assert!(matches!(target("#00ff"), Err(RecolorError::ParseColor(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecolorError {
    /// Color string could not be parsed
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Tolerance outside `0..=255`
    #[error("tolerance {value} is outside 0..=255")]
    InvalidTolerance {
        /// The rejected value
        value: i64,
    },

    /// Pixel buffer length does not match the stated dimensions
    #[error("pixel buffer holds {len} pixels, expected {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        /// Number of pixels actually supplied
        len: usize,
    },
}
