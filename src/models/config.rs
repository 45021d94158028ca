use recolor::{Color, RecolorMode, Recolorer, Tolerance};

use crate::error::ProcessError;

/// Validated recolor settings built once from command-line input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecolorConfig {
    /// Which pixels get replaced
    pub mode: RecolorMode,

    /// Color written into replaced pixels (default white)
    pub replacement: Color,

    /// Inclusive match tolerance (default 30)
    pub tolerance: Tolerance,
}

impl RecolorConfig {
    /// Build a config from raw option values.
    ///
    /// - `target`: `-s/--target-color`; selects specific-color mode
    /// - `replacement`: `-r/--replacement-color`; white when absent
    /// - `bw_only`: `-b/--bw-only`; forces black/white mode even with a target
    /// - `tolerance`: `-t/--tolerance`; rejected outside `0..=255`
    ///
    /// Both color strings are validated even when the target ends up unused.
    pub fn from_args(
        target: Option<&str>,
        replacement: Option<&str>,
        bw_only: bool,
        tolerance: i64,
    ) -> Result<Self, ProcessError> {
        let replacement = replacement
            .map(parse_color)
            .transpose()?
            .unwrap_or(Color::WHITE);
        let target = target.map(parse_color).transpose()?;

        let tolerance =
            Tolerance::try_from(tolerance).map_err(|_| ProcessError::InvalidTolerance(tolerance))?;

        let mode = match target {
            Some(target) if bw_only => {
                tracing::warn!(%target, "--bw-only given, ignoring --target-color");
                RecolorMode::RemoveAllExceptBw
            }
            Some(target) => RecolorMode::RemoveSpecificColor(target),
            None => RecolorMode::RemoveAllExceptBw,
        };

        let config = Self {
            mode,
            replacement,
            tolerance,
        };
        tracing::debug!(
            mode = ?config.mode,
            replacement = %config.replacement,
            tolerance = config.tolerance.value(),
            "Resolved recolor configuration"
        );
        Ok(config)
    }

    /// The engine configured from these settings
    pub fn recolorer(&self) -> Recolorer {
        Recolorer::new(self.mode)
            .replacement(self.replacement)
            .tolerance(self.tolerance)
    }
}

/// Parse a `-s`/`-r` value, keeping the offending string for the report
pub fn parse_color(input: &str) -> Result<Color, ProcessError> {
    input.parse().map_err(|reason| ProcessError::ColorParse {
        input: input.to_string(),
        reason,
    })
}
