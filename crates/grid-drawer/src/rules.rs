//! Horizontal rule generation.
//!
//! Rules come in pairs: two lines `primary` apart, then a `secondary` gap
//! before the next pair. The rhythm lives in an explicit two-phase state
//! machine instead of a loop counter, so "which line of the pair is next" is
//! always a named state.

use tracing::{debug, warn};

use crate::config::{Layout, PatternConfig};
use crate::error::PatternError;
use crate::geometry::{ClipRect, Line};

/// Where the generator is in the pair rhythm.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Next line opens a pair at `y`.
    EmitFirst { y: f64 },
    /// Next line closes the pair at `y`.
    EmitSecond { y: f64 },
    Done,
}

/// Lazy, top-to-bottom iterator over paired horizontal rules.
///
/// A line exactly on the bottom edge is emitted; anything past it is not.
/// The comparison is exact, no tolerance.
#[derive(Debug, Clone)]
pub struct HorizontalRules {
    rect: ClipRect,
    spacing_primary: f64,
    spacing_secondary: f64,
    phase: Phase,
}

impl HorizontalRules {
    /// Rules spanning `rect`, starting at its top edge.
    ///
    /// Non-positive or non-finite spacings would never reach the bottom, so
    /// they produce an empty iterator. So does a spacing too small to move
    /// `y` at the rectangle's magnitude, and an unbounded or inverted
    /// rectangle.
    pub fn new(rect: ClipRect, spacing_primary: f64, spacing_secondary: f64) -> Self {
        let advances = |spacing: f64| {
            spacing > 0.0
                && spacing.is_finite()
                && rect.top + spacing > rect.top
                && rect.bottom + spacing > rect.bottom
        };

        let bounded = rect.top.is_finite() && rect.bottom.is_finite();

        let phase = if bounded
            && advances(spacing_primary)
            && advances(spacing_secondary)
            && rect.left <= rect.right
        {
            Phase::EmitFirst { y: rect.top }
        } else {
            Phase::Done
        };

        Self { rect, spacing_primary, spacing_secondary, phase }
    }

    #[inline]
    fn rule_at(&self, y: f64) -> Line {
        Line::new(self.rect.left, y, self.rect.right, y)
    }
}

impl Iterator for HorizontalRules {
    type Item = Line;

    // ## Rust Lesson #25: State Machines with Enums
    //
    // Each call consumes the current phase and decides the next one. The
    // compiler checks every phase is handled; there is no flag to forget.
    fn next(&mut self) -> Option<Line> {
        match self.phase {
            Phase::EmitFirst { y } | Phase::EmitSecond { y } if y > self.rect.bottom => {
                self.phase = Phase::Done;
                None
            }
            Phase::EmitFirst { y } => {
                let next = y + self.spacing_primary;
                self.phase = if next > y { Phase::EmitSecond { y: next } } else { Phase::Done };
                Some(self.rule_at(y))
            }
            Phase::EmitSecond { y } => {
                let next = y + self.spacing_secondary;
                self.phase = if next > y { Phase::EmitFirst { y: next } } else { Phase::Done };
                Some(self.rule_at(y))
            }
            Phase::Done => None,
        }
    }
}

impl std::iter::FusedIterator for HorizontalRules {}

/// Horizontal rules for a layout already in drawing units.
pub fn horizontal_rules(layout: &Layout) -> HorizontalRules {
    HorizontalRules::new(
        layout.area.clip_rect(),
        layout.spacing_primary,
        layout.spacing_secondary,
    )
}

/// Generate all horizontal rules for a config, top to bottom.
///
/// Returns an empty list for non-positive spacings, spacings too small to
/// advance, or a degenerate area; only non-finite input is an error.
pub fn generate_horizontal_lines(config: &PatternConfig) -> Result<Vec<Line>, PatternError> {
    let layout = config.layout()?;

    if layout.area.is_degenerate() {
        warn!(margin = config.margin, "margin leaves no drawing area, no horizontal rules");
        return Ok(Vec::new());
    }
    if layout.spacing_primary <= 0.0 || layout.spacing_secondary <= 0.0 {
        warn!(
            primary = config.horizontal_primary,
            secondary = config.horizontal_secondary,
            "non-positive horizontal spacing, no horizontal rules"
        );
        return Ok(Vec::new());
    }

    let lines: Vec<Line> = horizontal_rules(&layout).collect();
    if lines.is_empty() {
        warn!(
            primary = config.horizontal_primary,
            secondary = config.horizontal_secondary,
            "horizontal spacing too small to advance, no horizontal rules"
        );
    }
    debug!(count = lines.len(), "generated horizontal rules");
    Ok(lines)
}
