//! RGBA pixel type

use super::rgb::Color;

/// One RGBA pixel as stored in an image buffer.
///
/// Only the R, G and B channels take part in matching. Alpha is carried
/// through every operation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color part of this pixel, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }

    /// This pixel with its RGB replaced by `color` and its alpha kept.
    #[inline]
    pub const fn with_rgb(self, color: Color) -> Self {
        Self::new(color.r, color.g, color.b, self.a)
    }

    /// Chebyshev distance between this pixel's RGB and `color`.
    #[inline]
    pub fn distance_to(self, color: Color) -> u8 {
        self.rgb().distance(color)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_bytes()
    }
}
