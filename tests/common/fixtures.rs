//! Test fixtures: scratch directories and generated input images.

use std::fs::File;
use std::path::PathBuf;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use tempfile::TempDir;

/// Pixel values used by the generated images
pub mod colors {
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const HALF_RED: [u8; 4] = [255, 0, 0, 128];
    pub const NEAR_RED: [u8; 4] = [230, 10, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const CLEAR_BLUE: [u8; 4] = [0, 0, 255, 0];
    pub const GREY: [u8; 4] = [128, 128, 128, 200];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
}

/// A temporary directory that is removed when dropped
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of a file inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a 4x2 PNG:
    ///
    /// ```text
    /// RED      HALF_RED  NEAR_RED  BLUE
    /// GREY     WHITE     BLACK     CLEAR_BLUE
    /// ```
    pub fn sample_png(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        sample_image()
            .save(&path)
            .expect("Failed to write sample PNG");
        path
    }

    /// Write the sample image as a JPEG (alpha dropped, lossy)
    pub fn sample_jpeg(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        image::DynamicImage::ImageRgba8(sample_image())
            .to_rgb8()
            .save(&path)
            .expect("Failed to write sample JPEG");
        path
    }

    /// Write an endlessly looping GIF with `frames` solid-color 3x3 frames
    pub fn animated_gif(&self, name: &str, frames: usize) -> PathBuf {
        self.animated_gif_with_repeat(name, frames, Repeat::Infinite)
    }

    /// Write an animated GIF with the given repeat setting
    pub fn animated_gif_with_repeat(&self, name: &str, frames: usize, repeat: Repeat) -> PathBuf {
        let path = self.path(name);
        let file = File::create(&path).expect("Failed to create GIF");
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(repeat).expect("Failed to set GIF repeat");

        let palette = [colors::RED, colors::BLUE, colors::BLACK];
        for i in 0..frames {
            let buffer = RgbaImage::from_pixel(3, 3, Rgba(palette[i % palette.len()]));
            let frame = Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(50, 1));
            encoder.encode_frame(frame).expect("Failed to encode GIF frame");
        }
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The 4x2 image behind [`Workspace::sample_png`]
pub fn sample_image() -> RgbaImage {
    let rows = [
        [colors::RED, colors::HALF_RED, colors::NEAR_RED, colors::BLUE],
        [colors::GREY, colors::WHITE, colors::BLACK, colors::CLEAR_BLUE],
    ];
    let mut image = RgbaImage::new(4, 2);
    for (y, row) in rows.iter().enumerate() {
        for (x, px) in row.iter().enumerate() {
            image.put_pixel(x as u32, y as u32, Rgba(*px));
        }
    }
    image
}
