//! A complete ruled sheet: both generators plus their stroke styles.
//!
//! The generators only produce coordinates. This is where color, width and
//! dash get attached, one [`Stroke`] per layer.

use serde::Serialize;
use tracing::debug;

use crate::config::PatternConfig;
use crate::error::PatternError;
use crate::geometry::{DrawingArea, Line};
use crate::guides::guide_lines;
use crate::rules::horizontal_rules;

/// Guide dash, in drawing units: short dash, longer gap.
pub const GUIDE_DASH: Dash = Dash { on: 2.0, off: 5.0 };

/// Stroke width for both layers, in drawing units.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Dash pattern: `on` units drawn, `off` units skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
}

/// Rendering attributes attached to a whole layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

impl Stroke {
    pub fn solid(color: impl Into<String>) -> Self {
        Self { color: color.into(), width: DEFAULT_STROKE_WIDTH, dash: None }
    }

    pub fn dashed(color: impl Into<String>, dash: Dash) -> Self {
        Self { color: color.into(), width: DEFAULT_STROKE_WIDTH, dash: Some(dash) }
    }
}

/// One generator's output with its stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub lines: Vec<Line>,
    pub stroke: Stroke,
}

/// Both layers of a sheet, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RuledSheet {
    /// Sheet size and margin in drawing units
    pub area: DrawingArea,
    /// Paired horizontal rules, top to bottom
    pub horizontal: Layer,
    /// Dashed slanted guides, left to right
    pub vertical: Layer,
}

impl RuledSheet {
    /// Run both generators for `config`.
    ///
    /// Same lenient policy as the individual generators: bad spacings or a
    /// degenerate area give empty layers, non-finite input and oversized
    /// guide scans are errors.
    pub fn generate(config: &PatternConfig) -> Result<Self, PatternError> {
        let layout = config.layout()?;

        let (horizontal, vertical) = if layout.area.is_degenerate() {
            (Vec::new(), Vec::new())
        } else {
            (horizontal_rules(&layout).collect(), guide_lines(&layout)?)
        };

        debug!(
            horizontal = horizontal.len(),
            vertical = vertical.len(),
            "generated sheet"
        );

        Ok(Self {
            area: layout.area,
            horizontal: Layer {
                name: "horizontal",
                lines: horizontal,
                stroke: Stroke::solid(config.horizontal_color.as_str()),
            },
            vertical: Layer {
                name: "vertical",
                lines: vertical,
                stroke: Stroke::dashed(config.vertical_color.as_str(), GUIDE_DASH),
            },
        })
    }

    /// Layers in paint order (rules first, guides on top).
    pub fn layers(&self) -> [&Layer; 2] {
        [&self.horizontal, &self.vertical]
    }

    pub fn line_count(&self) -> usize {
        self.horizontal.lines.len() + self.vertical.lines.len()
    }
}
