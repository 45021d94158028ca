pub mod codec;
pub mod format;

pub use codec::{decode, encode, DecodedImage, ImageFrame};
pub use format::ImageKind;
