use std::path::Path;

use recolor::RecolorStats;

use crate::error::ProcessError;
use crate::imaging::{self, ImageKind};
use crate::models::RecolorConfig;

/// Summary of one processed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    /// Frames written to the output
    pub frames: usize,
    pub width: usize,
    pub height: usize,
    /// Pixel counts summed over all written frames
    pub stats: RecolorStats,
}

/// Decode `input`, recolor every frame, and write the result to `output`.
///
/// Both extensions are checked before anything is read, and the input is
/// fully decoded before the output is created, so no failure leaves a
/// partial output file.
pub fn process_image(
    input: &Path,
    output: &Path,
    config: &RecolorConfig,
) -> Result<ProcessReport, ProcessError> {
    ImageKind::from_path(input)?;
    let output_kind = ImageKind::from_path(output)?;

    let mut decoded = imaging::decode(input)?;

    if decoded.frames.len() > 1 && !output_kind.supports_animation() {
        tracing::warn!(
            frames = decoded.frames.len(),
            format = ?output_kind,
            "Output format cannot hold animation, writing first frame only"
        );
        decoded.frames.truncate(1);
    }

    let recolorer = config.recolorer();
    let mut stats = RecolorStats::default();
    for (index, frame) in decoded.frames.iter_mut().enumerate() {
        let frame_stats = recolorer.recolor_in_place(&mut frame.pixels);
        tracing::debug!(
            frame = index,
            replaced = frame_stats.replaced,
            total = frame_stats.total,
            "Recolored frame"
        );
        stats += frame_stats;
    }

    let report = ProcessReport {
        frames: decoded.frames.len(),
        width: decoded.frames[0].pixels.width(),
        height: decoded.frames[0].pixels.height(),
        stats,
    };

    imaging::encode(output, output_kind, decoded)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        frames = report.frames,
        replaced = report.stats.replaced,
        total = report.stats.total,
        "Processed image"
    );
    Ok(report)
}
