//! RGB color type
//!
//! [`Color`] is the 8-bit RGB triple used for match targets and
//! replacements. It parses from the `#RRGGBB` and `R,G,B` string forms.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit RGB color.
///
/// # Example
///
/// ```
/// use recolor::Color;
///
/// let red = Color::new(255, 0, 0);
/// assert_eq!(red.distance(Color::new(225, 10, 0)), 30);
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure white, `(255, 255, 255)`.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Pure black, `(0, 0, 0)`.
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Chebyshev distance: the largest absolute per-channel difference.
    ///
    /// The result is always in `0..=255`.
    #[inline]
    pub fn distance(self, other: Color) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl Default for Color {
    /// White, the default replacement color.
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from `#RRGGBB` or `R,G,B`.
    ///
    /// Surrounding whitespace is trimmed. A leading `#` selects the hex form;
    /// everything else is read as a decimal triple, so `ff0000` without the
    /// hash is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use recolor::Color;
    ///
    /// let teal: Color = "#008080".parse().unwrap();
    /// assert_eq!(teal, Color::new(0, 128, 128));
    ///
    /// let teal: Color = " 0, 128 ,128 ".parse().unwrap();
    /// assert_eq!(teal, Color::new(0, 128, 128));
    ///
    /// assert!("255,0".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => parse_decimal(s),
        }
    }
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    let len = hex.chars().count();
    if len != 6 {
        return Err(ParseColorError::InvalidHexLength(len));
    }

    let mut nibbles = [0u8; 6];
    for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
        // to_digit(16) only yields values below 16
        *slot = c.to_digit(16).ok_or(ParseColorError::InvalidHexDigit(c))? as u8;
    }

    Ok(Color::new(
        (nibbles[0] << 4) | nibbles[1],
        (nibbles[2] << 4) | nibbles[3],
        (nibbles[4] << 4) | nibbles[5],
    ))
}

fn parse_decimal(s: &str) -> Result<Color, ParseColorError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::ComponentCount(parts.len()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: i64 = part
            .parse()
            .map_err(|_| ParseColorError::InvalidComponent(part.to_string()))?;
        *slot = u8::try_from(value).map_err(|_| ParseColorError::ComponentOutOfRange(value))?;
    }

    Ok(Color::from_bytes(channels))
}
