use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::metadata::LoopCount;
use image::{AnimationDecoder, Delay, DynamicImage, Frame, RgbaImage};
use recolor::{PixelGrid, RecolorError};

use super::format::ImageKind;
use crate::error::ProcessError;

/// Delay given to still images when they are written as a GIF frame
const STILL_FRAME_DELAY_MS: u32 = 100;

/// One decoded frame with its display delay.
///
/// GIF frames come out of the decoder already composited onto the full
/// canvas, so every frame covers the whole image.
#[derive(Debug, Clone)]
pub struct ImageFrame {
    pub pixels: PixelGrid,
    pub delay: Delay,
}

impl ImageFrame {
    /// Wrap a single still image
    pub fn still(buffer: RgbaImage) -> Result<Self, ProcessError> {
        Self::from_parts(buffer, Delay::from_numer_denom_ms(STILL_FRAME_DELAY_MS, 1))
    }

    fn from_frame(frame: Frame) -> Result<Self, ProcessError> {
        let delay = frame.delay();
        Self::from_parts(frame.into_buffer(), delay)
    }

    fn from_parts(buffer: RgbaImage, delay: Delay) -> Result<Self, ProcessError> {
        let (width, height) = buffer.dimensions();
        let pixels = PixelGrid::from_rgba_bytes(width as usize, height as usize, buffer.as_raw())?;
        Ok(Self { pixels, delay })
    }

    fn into_rgba_image(self) -> Result<RgbaImage, ProcessError> {
        let (width, height) = (self.pixels.width(), self.pixels.height());
        let bytes = self.pixels.into_rgba_bytes();
        let len = bytes.len() / 4;
        RgbaImage::from_raw(width as u32, height as u32, bytes).ok_or(ProcessError::Pixels(
            RecolorError::DimensionMismatch { width, height, len },
        ))
    }

    fn into_frame(self) -> Result<Frame, ProcessError> {
        let delay = self.delay;
        Ok(Frame::from_parts(self.into_rgba_image()?, 0, 0, delay))
    }
}

/// Decoded frames plus the animation's repeat setting
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub frames: Vec<ImageFrame>,
    /// How often a GIF output plays. Still inputs loop forever.
    pub repeat: Repeat,
}

fn repeat_from_loop_count(count: LoopCount) -> Repeat {
    match count {
        LoopCount::Infinite => Repeat::Infinite,
        // GIF stores the count as u16, so a decoded value always fits
        LoopCount::Finite(n) => Repeat::Finite(u16::try_from(n.get()).unwrap_or(u16::MAX)),
    }
}

/// Decode an image file into RGBA frames.
///
/// PNG and JPEG yield one frame. GIF yields every animation frame in order.
/// The format comes from the extension, not from sniffing the content, so a
/// mislabelled file fails to decode.
pub fn decode(path: &Path) -> Result<DecodedImage, ProcessError> {
    let kind = ImageKind::from_path(path)?;
    let file = File::open(path).map_err(|e| ProcessError::decode(path, e))?;
    let reader = BufReader::new(file);

    let (frames, repeat) = match kind {
        ImageKind::Gif => {
            let decoder = GifDecoder::new(reader).map_err(|e| ProcessError::decode(path, e))?;
            let repeat = repeat_from_loop_count(decoder.loop_count());
            let frames = decoder
                .into_frames()
                .collect_frames()
                .map_err(|e| ProcessError::decode(path, e))?
                .into_iter()
                .map(ImageFrame::from_frame)
                .collect::<Result<Vec<_>, _>>()?;
            (frames, repeat)
        }
        ImageKind::Png | ImageKind::Jpeg => {
            let image =
                image::load(reader, kind.format()).map_err(|e| ProcessError::decode(path, e))?;
            tracing::debug!(color = ?image.color(), "Converting to RGBA");
            (vec![ImageFrame::still(image.into_rgba8())?], Repeat::Infinite)
        }
    };

    if frames.is_empty() {
        return Err(ProcessError::NoFrames(path.to_path_buf()));
    }

    tracing::debug!(
        path = %path.display(),
        format = ?kind,
        frames = frames.len(),
        width = frames[0].pixels.width(),
        height = frames[0].pixels.height(),
        repeat = ?repeat,
        "Decoded image"
    );
    Ok(DecodedImage { frames, repeat })
}

/// Encode frames and write them to `path`.
///
/// The whole file is encoded in memory first, so an encoder error never
/// leaves a truncated file behind. GIF output writes every frame with the
/// decoded repeat setting; other formats write the first frame only. JPEG
/// output drops the alpha channel.
pub fn encode(path: &Path, kind: ImageKind, decoded: DecodedImage) -> Result<(), ProcessError> {
    let DecodedImage { frames, repeat } = decoded;
    let mut buffer = Cursor::new(Vec::new());

    match kind {
        ImageKind::Gif => {
            let mut encoder = GifEncoder::new(&mut buffer);
            encoder
                .set_repeat(repeat)
                .map_err(|e| ProcessError::encode(path, e))?;
            for frame in frames {
                encoder
                    .encode_frame(frame.into_frame()?)
                    .map_err(|e| ProcessError::encode(path, e))?;
            }
        }
        ImageKind::Png | ImageKind::Jpeg => {
            let first = frames
                .into_iter()
                .next()
                .ok_or_else(|| ProcessError::NoFrames(path.to_path_buf()))?;
            let mut image = DynamicImage::ImageRgba8(first.into_rgba_image()?);
            if !kind.supports_alpha() {
                tracing::debug!(format = ?kind, "Dropping alpha channel");
                image = DynamicImage::ImageRgb8(image.to_rgb8());
            }
            image
                .write_to(&mut buffer, kind.format())
                .map_err(|e| ProcessError::encode(path, e))?;
        }
    }

    let bytes = buffer.into_inner();
    std::fs::write(path, &bytes).map_err(|e| ProcessError::encode(path, e))?;

    tracing::debug!(
        path = %path.display(),
        format = ?kind,
        bytes = bytes.len(),
        "Wrote image"
    );
    Ok(())
}
