//! recolor: tolerance-based color replacement for RGBA pixel grids
//!
//! This library classifies every pixel of an image against a target color
//! (or against black and white) and replaces the matching pixels with a
//! replacement color, leaving the alpha channel of every pixel untouched.
//!
//! # Quick Start
//!
//! The [`Recolorer`] builder is the primary entry point:
//!
//! ```
//! use recolor::{Color, Pixel, PixelGrid, RecolorMode, Recolorer, Tolerance};
//!
//! let red: Color = "#ff0000".parse().unwrap();
//! let recolorer = Recolorer::new(RecolorMode::RemoveSpecificColor(red))
//!     .replacement(Color::new(0, 255, 0))
//!     .tolerance(Tolerance::new(10));
//!
//! let input = PixelGrid::new(2, 2, vec![Pixel::new(250, 5, 0, 128); 4]).unwrap();
//! let output = recolorer.recolor(&input);
//!
//! assert_eq!(output.get(0, 0), Some(Pixel::new(0, 255, 0, 128)));
//! ```
//!
//! # Matching
//!
//! Two colors are compared with the Chebyshev distance over the R, G and B
//! channels, i.e. the largest absolute per-channel difference:
//!
//! ```text
//! d(p, q) = max(|p.r - q.r|, |p.g - q.g|, |p.b - q.b|)
//! ```
//!
//! A pixel matches when `d <= tolerance`; the boundary is inclusive. The
//! alpha channel never takes part in matching.
//!
//! | Mode | A pixel is replaced when |
//! |------|--------------------------|
//! | [`RecolorMode::RemoveAllExceptBw`] | it is neither within tolerance of white nor of black |
//! | [`RecolorMode::RemoveSpecificColor`] | it is within tolerance of the target |
//!
//! Matched pixels take the replacement's RGB and keep their own alpha.
//! Unmatched pixels are copied through unchanged.
//!
//! # Color Strings
//!
//! [`Color`] implements [`FromStr`](std::str::FromStr) for the two forms the
//! command line accepts:
//!
//! - `#RRGGBB` (case-insensitive hex)
//! - `R,G,B` (three decimal integers in `0..=255`)
//!
//! ```
//! use recolor::Color;
//!
//! let a: Color = "255,0,0".parse().unwrap();
//! let b: Color = "#FF0000".parse().unwrap();
//! assert_eq!(a, b);
//! ```

pub mod color;
pub mod engine;
pub mod grid;


pub use color::{Color, ParseColorError, Pixel};
pub use engine::{RecolorError, RecolorMode, RecolorStats, Recolorer, Tolerance};
pub use grid::PixelGrid;
