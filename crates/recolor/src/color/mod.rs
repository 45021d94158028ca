//! Color types and color-string parsing
//!
//! - [`Color`]: an RGB triple, used for targets and replacements
//! - [`Pixel`]: an RGBA value read from or written to an image
//!
//! Distance and matching are defined on RGB only; a pixel's alpha is carried
//! alongside and never compared.

mod error;
mod pixel;
mod rgb;

pub use error::ParseColorError;
pub use pixel::Pixel;
pub use rgb::Color;
