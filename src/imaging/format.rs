use std::path::Path;

use image::ImageFormat;

use crate::error::ProcessError;

/// Image container formats the tool reads and writes, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
}

impl ImageKind {
    /// Infer the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ProcessError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(ImageKind::Png),
            Some("jpg" | "jpeg") => Ok(ImageKind::Jpeg),
            Some("gif") => Ok(ImageKind::Gif),
            _ => Err(ProcessError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn format(self) -> ImageFormat {
        match self {
            ImageKind::Png => ImageFormat::Png,
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Gif => ImageFormat::Gif,
        }
    }

    /// JPEG has no alpha channel
    pub fn supports_alpha(self) -> bool {
        !matches!(self, ImageKind::Jpeg)
    }

    /// Only GIF output keeps more than one frame
    pub fn supports_animation(self) -> bool {
        matches!(self, ImageKind::Gif)
    }
}
