//! Assertion helpers for tests.

use std::path::Path;

use image::metadata::LoopCount;
use image::{AnimationDecoder, RgbaImage};
use pretty_assertions::assert_eq;

/// Load an output image as RGBA
pub fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()))
        .into_rgba8()
}

/// Assert a pixel has the expected RGBA value
pub fn assert_pixel(image: &RgbaImage, x: u32, y: u32, expected: [u8; 4]) {
    assert_eq!(
        image.get_pixel(x, y).0,
        expected,
        "Unexpected pixel at ({x}, {y})"
    );
}

fn open_gif(path: &Path) -> image::codecs::gif::GifDecoder<std::io::BufReader<std::fs::File>> {
    let file = std::fs::File::open(path).expect("Failed to open GIF");
    image::codecs::gif::GifDecoder::new(std::io::BufReader::new(file))
        .expect("Failed to read GIF header")
}

/// Count the frames of a GIF file
pub fn gif_frame_count(path: &Path) -> usize {
    open_gif(path)
        .into_frames()
        .collect_frames()
        .expect("Failed to decode GIF frames")
        .len()
}

/// Loop count stored in a GIF file, `None` when it loops forever
pub fn gif_loop_count(path: &Path) -> Option<u32> {
    match open_gif(path).loop_count() {
        LoopCount::Infinite => None,
        LoopCount::Finite(n) => Some(n.get()),
    }
}

/// Assert no file exists at `path`
pub fn assert_not_written(path: &Path) {
    assert!(
        !path.exists(),
        "Expected no output at {}, but a file was written",
        path.display()
    );
}
