//! Recolor mode and tolerance.

use super::error::RecolorError;
use crate::color::Color;

/// Which pixels the engine replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecolorMode {
    /// Replace every pixel that is neither (near-)white nor (near-)black.
    #[default]
    RemoveAllExceptBw,

    /// Replace every pixel that is within tolerance of the target color.
    RemoveSpecificColor(Color),
}

/// Inclusive upper bound on the Chebyshev distance that still counts as a
/// match.
///
/// Backed by a `u8`, so every constructed value is in `0..=255`. Wider
/// integers go through [`TryFrom<i64>`], which rejects out-of-range values
/// rather than clamping them.
///
/// # Example
///
/// ```
/// use recolor::Tolerance;
///
/// assert_eq!(Tolerance::default().value(), 30);
/// assert!(Tolerance::new(30).accepts(30));
/// assert!(!Tolerance::new(30).accepts(31));
/// assert!(Tolerance::try_from(256_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tolerance(u8);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(30);

    /// Exact matches only.
    pub const EXACT: Tolerance = Tolerance(0);

    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether a distance falls within this tolerance (inclusive).
    #[inline]
    pub const fn accepts(self, distance: u8) -> bool {
        distance <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Tolerance {
    type Error = RecolorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| RecolorError::InvalidTolerance { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_bw() {
        assert_eq!(RecolorMode::default(), RecolorMode::RemoveAllExceptBw);
    }

    #[test]
    fn test_tolerance_try_from_bounds() {
        assert_eq!(Tolerance::try_from(0_i64), Ok(Tolerance::EXACT));
        assert_eq!(Tolerance::try_from(255_i64), Ok(Tolerance::new(255)));
        assert_eq!(
            Tolerance::try_from(-1_i64),
            Err(RecolorError::InvalidTolerance { value: -1 })
        );
        assert_eq!(
            Tolerance::try_from(256_i64),
            Err(RecolorError::InvalidTolerance { value: 256 })
        );
    }

    #[test]
    fn test_tolerance_accepts_is_inclusive() {
        let tolerance = Tolerance::new(10);
        assert!(tolerance.accepts(0));
        assert!(tolerance.accepts(10));
        assert!(!tolerance.accepts(11));
        assert!(Tolerance::new(255).accepts(255));
    }
}
