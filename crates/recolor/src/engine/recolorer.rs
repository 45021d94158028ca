//! Recolorer builder -- the primary entry point for the crate.
//!
//! [`Recolorer`] holds a validated configuration (mode, replacement color,
//! tolerance) and applies it pixel by pixel.

use std::ops::AddAssign;

use super::mode::{RecolorMode, Tolerance};
use crate::color::{Color, Pixel};
use crate::grid::PixelGrid;

/// Per-pixel color replacement with a fixed configuration.
///
/// # Design
///
/// - Constructor requires a [`RecolorMode`]; a specific-color mode carries
///   its target, so there is no "target missing" state
/// - Configuration methods consume and return `self`
/// - [`recolor()`](Self::recolor) takes `&self`, so one recolorer can be
///   applied to every frame of an animation
///
/// Defaults: replacement white, tolerance 30.
///
/// # Example
///
/// ```
/// use recolor::{Pixel, PixelGrid, RecolorMode, Recolorer, Tolerance};
///
/// let recolorer = Recolorer::new(RecolorMode::RemoveAllExceptBw)
///     .tolerance(Tolerance::new(10));
///
/// let pixels = vec![
///     Pixel::new(250, 250, 250, 255), // near white, kept
///     Pixel::new(128, 128, 128, 64),  // grey, replaced
/// ];
/// let input = PixelGrid::new(2, 1, pixels).unwrap();
/// let output = recolorer.recolor(&input);
///
/// assert_eq!(output.get(0, 0), Some(Pixel::new(250, 250, 250, 255)));
/// assert_eq!(output.get(1, 0), Some(Pixel::new(255, 255, 255, 64)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recolorer {
    mode: RecolorMode,
    replacement: Color,
    tolerance: Tolerance,
}

impl Recolorer {
    pub fn new(mode: RecolorMode) -> Self {
        Self {
            mode,
            replacement: Color::WHITE,
            tolerance: Tolerance::DEFAULT,
        }
    }

    /// Set the color written into matched pixels.
    #[inline]
    pub fn replacement(mut self, color: Color) -> Self {
        self.replacement = color;
        self
    }

    /// Set the match tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn mode(&self) -> RecolorMode {
        self.mode
    }

    #[inline]
    pub fn replacement_color(&self) -> Color {
        self.replacement
    }

    #[inline]
    pub fn tolerance_value(&self) -> Tolerance {
        self.tolerance
    }

    /// Whether `pixel` is classified for replacement.
    pub fn is_match(&self, pixel: Pixel) -> bool {
        match self.mode {
            RecolorMode::RemoveAllExceptBw => {
                let near_white = self.tolerance.accepts(pixel.distance_to(Color::WHITE));
                let near_black = self.tolerance.accepts(pixel.distance_to(Color::BLACK));
                !(near_white || near_black)
            }
            RecolorMode::RemoveSpecificColor(target) => {
                self.tolerance.accepts(pixel.distance_to(target))
            }
        }
    }

    /// Recolor a single pixel. Alpha is always the input's alpha.
    #[inline]
    pub fn recolor_pixel(&self, pixel: Pixel) -> Pixel {
        if self.is_match(pixel) {
            pixel.with_rgb(self.replacement)
        } else {
            pixel
        }
    }

    /// Recolor a grid into a new grid of the same dimensions.
    pub fn recolor(&self, input: &PixelGrid) -> PixelGrid {
        let mut output = input.clone();
        self.recolor_in_place(&mut output);
        output
    }

    /// Recolor a grid in place and report how many pixels were replaced.
    ///
    /// A pixel that already has the replacement color still counts as
    /// replaced when it matches.
    pub fn recolor_in_place(&self, grid: &mut PixelGrid) -> RecolorStats {
        let mut stats = RecolorStats::default();
        for pixel in grid.pixels_mut() {
            stats.total += 1;
            if self.is_match(*pixel) {
                *pixel = pixel.with_rgb(self.replacement);
                stats.replaced += 1;
            }
        }
        stats
    }
}

/// Pixel counts from one or more recolor passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecolorStats {
    /// Pixels examined
    pub total: usize,
    /// Pixels whose RGB was set to the replacement
    pub replaced: usize,
}

impl RecolorStats {
    /// Pixels left unchanged.
    #[inline]
    pub fn kept(&self) -> usize {
        self.total - self.replaced
    }
}

impl AddAssign for RecolorStats {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.replaced += other.replaced;
    }
}
