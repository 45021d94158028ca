//! PixelGrid struct with RGBA byte conversions.

use crate::color::Pixel;
use crate::engine::RecolorError;

/// A row-major grid of RGBA pixels.
///
/// The buffer length always equals `width * height`; constructors reject
/// anything else with [`RecolorError::DimensionMismatch`].
///
/// # Example
///
/// ```
/// use recolor::{Pixel, PixelGrid};
///
/// let bytes = vec![
///     255, 0, 0, 255,   0, 255, 0, 255,
///     0, 0, 255, 128,   0, 0, 0, 0,
/// ];
/// let grid = PixelGrid::from_rgba_bytes(2, 2, &bytes).unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(0, 1), Some(Pixel::new(0, 0, 255, 128)));
/// assert_eq!(grid.into_rgba_bytes(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixels in row-major order.
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Create a grid from pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`RecolorError::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, RecolorError> {
        if Some(pixels.len()) != width.checked_mul(height) {
            return Err(RecolorError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a grid from a flat `[R, G, B, A, R, G, B, A, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RecolorError::DimensionMismatch`] if `bytes.len()` is not
    /// `width * height * 4`. The reported `len` is the pixel count the buffer
    /// would hold, rounded down.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, RecolorError> {
        if bytes.len() % 4 != 0 {
            return Err(RecolorError::DimensionMismatch {
                width,
                height,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Flatten into an `[R, G, B, A, ...]` buffer of length `width * height * 4`.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to the pixels. The length cannot change, so the
    /// dimension invariant holds.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact(0) panics; an empty grid has no rows either way
        self.pixels.chunks_exact(self.width.max(1))
    }
}
