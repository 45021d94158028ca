//! Pixel grid container.
//!
//! [`PixelGrid`] is both the input and the output of the recolor engine: a
//! row-major `width x height` buffer of [`Pixel`](crate::color::Pixel)s with
//! its origin at the top-left corner.

mod pixel_grid;

pub use pixel_grid::PixelGrid;
