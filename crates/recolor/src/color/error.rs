//! Error type for color-string parsing.

use thiserror::Error;

/// Error returned when a color string is neither `#RRGGBB` nor `R,G,B`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex form did not have exactly six digits after the `#`
    #[error("hex color must be #RRGGBB (found {0} digits)")]
    InvalidHexLength(usize),

    /// Hex form contained a character that is not a hexadecimal digit
    #[error("invalid hex digit '{0}'")]
    InvalidHexDigit(char),

    /// Decimal form did not have exactly three comma-separated components
    #[error("expected 3 comma-separated components, found {0}")]
    ComponentCount(usize),

    /// Decimal component is not an integer
    #[error("component '{0}' is not an integer")]
    InvalidComponent(String),

    /// Decimal component is an integer outside `0..=255`
    #[error("component {0} is outside 0..=255")]
    ComponentOutOfRange(i64),
}
