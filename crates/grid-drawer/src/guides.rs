//! Slanted vertical guide lines.
//!
//! Each guide is built as a full-height construction line across the content
//! area, sheared by the guide angle, then clipped to the drawing rectangle.
//! Offsets step by `spacing` from `base = -H * |tan(angle)|`, the left end of
//! the widest possible sweep, so guide `k` sits at `base + k * spacing`.
//! Each offset is computed from `k` directly rather than accumulated.
//!
//! ## Which offsets can be visible?
//!
//! With `W`/`H` the content size and `shift = H * tan(angle)`, the guide at
//! offset `x` spans `[x, x + shift]` horizontally (relative to the left
//! margin). It touches the content area exactly when that span meets
//! `[0, W]`:
//!
//! ```text
//! shift >= 0:  -shift <= x <= W
//! shift <  0:       0 <= x <= W - shift
//! ```
//!
//! Only the `k` whose offset falls in that range are visited. No visible
//! guide is missed, and only corner-grazing offsets come back from the
//! clipper empty.

use tracing::{debug, warn};

use crate::clip::clip_line_to_rect;
use crate::config::{Layout, PatternConfig};
use crate::error::PatternError;
use crate::geometry::{ClipRect, Line};

/// Most lines a single layer can hold: the largest `Vec<Line>` the address
/// space allows. Only a tangent that is effectively infinite gets near it.
pub const MAX_LINES: u64 = isize::MAX as u64 / std::mem::size_of::<Line>() as u64;

/// Widens the scan by a hair (in steps) so an offset landing exactly on a
/// range end is not lost to rounding in the step division. Extra offsets
/// are harmless: the clipper rejects them.
const SCAN_SLACK: f64 = 1e-9;

/// The analytic scan for one layout: which offsets to visit and how each
/// construction line is shaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideScan {
    rect: ClipRect,
    spacing: f64,
    /// Horizontal displacement of a guide from top to bottom
    shift: f64,
    /// Offset of step `k = 0`
    base: f64,
    first: i64,
    last: i64,
}

impl GuideScan {
    /// Plan the scan. `None` when no offset can produce a visible guide,
    /// including non-positive spacing and degenerate areas.
    pub fn new(layout: &Layout) -> Result<Option<Self>, PatternError> {
        let area = layout.area;
        let spacing = layout.guide_spacing;
        if area.is_degenerate() || !(spacing > 0.0) {
            return Ok(None);
        }

        let width = area.content_width();
        let height = area.content_height();
        let shift = height * layout.angle_degrees.to_radians().tan();
        let base = -shift.abs();

        let (lo, hi) = if shift >= 0.0 { (-shift, width) } else { (0.0, width - shift) };
        let first = ((lo - base) / spacing - SCAN_SLACK).ceil();
        let last = ((hi - base) / spacing + SCAN_SLACK).floor();

        if !first.is_finite() || !last.is_finite() {
            return Err(PatternError::TooManyLines { count: u64::MAX, limit: MAX_LINES });
        }
        if first > last {
            return Ok(None);
        }

        // ## Rust Lesson #19: Checked Conversions
        //
        // `as` saturates for floats that don't fit, so check the size while
        // the numbers are still f64 and only then narrow them.
        let count = last - first + 1.0;
        if count > MAX_LINES as f64 {
            return Err(PatternError::TooManyLines { count: count as u64, limit: MAX_LINES });
        }

        Ok(Some(Self {
            rect: area.clip_rect(),
            spacing,
            shift,
            base,
            first: first as i64,
            last: last as i64,
        }))
    }

    /// Horizontal displacement of every construction line.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Offsets (relative to the left margin) in scan order.
    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (self.first..=self.last).map(move |k| self.base + k as f64 * self.spacing)
    }

    /// The unclipped, full-height guide at `offset`.
    pub fn construction_line(&self, offset: f64) -> Line {
        let start_x = self.rect.left + offset;
        Line::new(start_x, self.rect.top, start_x + self.shift, self.rect.bottom)
    }

    /// Clip every construction line, left to right, dropping misses.
    pub fn lines(&self) -> Vec<Line> {
        self.offsets()
            .filter_map(|offset| clip_line_to_rect(self.construction_line(offset), &self.rect))
            .collect()
    }
}

/// Guide lines for a layout already in drawing units.
pub fn guide_lines(layout: &Layout) -> Result<Vec<Line>, PatternError> {
    Ok(GuideScan::new(layout)?.map(|scan| scan.lines()).unwrap_or_default())
}

/// Generate all slanted guide lines for a config, left to right.
///
/// Non-positive spacing or a degenerate area yields an empty list. Errors are
/// non-finite input and scans past [`MAX_LINES`] (a tangent of 90 degrees).
pub fn generate_vertical_lines(config: &PatternConfig) -> Result<Vec<Line>, PatternError> {
    let layout = config.layout()?;

    if layout.area.is_degenerate() {
        warn!(margin = config.margin, "margin leaves no drawing area, no guide lines");
        return Ok(Vec::new());
    }
    if layout.guide_spacing <= 0.0 {
        warn!(spacing = config.vertical_spacing, "non-positive guide spacing, no guide lines");
        return Ok(Vec::new());
    }

    let lines = guide_lines(&layout)?;
    debug!(count = lines.len(), angle = config.vertical_angle, "generated guide lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::to_drawing_units;

    fn config_with_angle(angle: f64) -> PatternConfig {
        PatternConfig { vertical_angle: angle, ..Default::default() }
    }

    fn on_edge(x: f64, y: f64, rect: &ClipRect) -> bool {
        x == rect.left || x == rect.right || y == rect.top || y == rect.bottom
    }

    #[test]
    fn zero_angle_guides_are_vertical_and_full_height() {
        let config = config_with_angle(0.0);
        let lines = generate_vertical_lines(&config).unwrap();
        let rect = config.layout().unwrap().area.clip_rect();
        let spacing = to_drawing_units(config.vertical_spacing);

        // 190 mm of content at 5 mm: 38 gaps, 39 guides including both edges
        assert_eq!(lines.len(), 39);
        assert_eq!(lines[0].x1, rect.left);

        for line in &lines {
            assert!(line.is_vertical());
            assert_eq!(line.y1, rect.top);
            assert_eq!(line.y2, rect.bottom);
            assert!((line.length() - rect.height()).abs() < 1e-9);
        }
        for pair in lines.windows(2) {
            assert!((pair[1].x1 - pair[0].x1 - spacing).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_angle_needs_no_extension() {
        let layout = config_with_angle(0.0).layout().unwrap();
        let scan = GuideScan::new(&layout).unwrap().unwrap();
        assert_eq!(scan.shift(), 0.0);
        assert_eq!(scan.offsets().next(), Some(0.0));
    }

    #[test]
    fn offsets_step_from_the_widest_sweep() {
        for angle in [12.5, 30.0, -30.0] {
            let layout = config_with_angle(angle).layout().unwrap();
            let scan = GuideScan::new(&layout).unwrap().unwrap();
            let base = -scan.shift().abs();

            for offset in scan.offsets() {
                let steps = (offset - base) / layout.guide_spacing;
                assert!((steps - steps.round()).abs() < 1e-6, "{} is off the grid", offset);
            }
        }

        // Positive slant: the first step is the sweep start itself
        let layout = config_with_angle(12.5).layout().unwrap();
        let scan = GuideScan::new(&layout).unwrap().unwrap();
        assert_eq!(scan.offsets().next(), Some(-scan.shift()));
    }

    /// Guides from the plain stepped sweep over `[-H|t|, W + H|t|]`.
    fn stepped_sweep(config: &PatternConfig) -> Vec<Line> {
        let layout = config.layout().unwrap();
        let rect = layout.area.clip_rect();
        let height = layout.area.content_height();
        let shift = height * layout.angle_degrees.to_radians().tan();
        let end = layout.area.content_width() + shift.abs();

        let mut lines = Vec::new();
        let mut x = -shift.abs();
        while x <= end {
            let start_x = rect.left + x;
            let line = Line::new(start_x, rect.top, start_x + shift, rect.bottom);
            lines.extend(clip_line_to_rect(line, &rect));
            x += layout.guide_spacing;
        }
        lines
    }

    #[test]
    fn matches_stepped_sweep() {
        for angle in [0.0, 12.5, 30.0, -30.0] {
            let config = config_with_angle(angle);
            let ours = generate_vertical_lines(&config).unwrap();
            let swept = stepped_sweep(&config);

            assert_eq!(ours.len(), swept.len(), "angle {}", angle);
            for (a, b) in ours.iter().zip(&swept) {
                for (p, q) in [(a.x1, b.x1), (a.y1, b.y1), (a.x2, b.x2), (a.y2, b.y2)] {
                    assert!((p - q).abs() < 1e-6, "{:?} vs {:?} at {} deg", a, b, angle);
                }
            }
        }
    }

    #[test]
    fn twelve_and_a_half_degrees_first_guide() {
        // The sweep starts H*tan left of the margin, so the first guide to
        // reach the top edge is one whole step past that, not at the margin.
        let config = config_with_angle(12.5);
        let layout = config.layout().unwrap();
        let rect = layout.area.clip_rect();
        let lines = generate_vertical_lines(&config).unwrap();

        let first_top = lines.iter().find(|l| l.y1 == rect.top).unwrap();
        let shift = layout.area.content_height() * 12.5f64.to_radians().tan();
        let steps = (shift / layout.guide_spacing).ceil();
        let expected = rect.left - shift + steps * layout.guide_spacing;
        assert!((first_top.x1 - expected).abs() < 1e-9);
        assert!(first_top.x1 > rect.left);
    }

    #[test]
    fn thirty_degrees_shifts_by_height_times_tangent() {
        let config = config_with_angle(30.0);
        let layout = config.layout().unwrap();
        let height = layout.area.content_height();
        let scan = GuideScan::new(&layout).unwrap().unwrap();

        let expected = height * 30f64.to_radians().tan();
        assert!((scan.shift() - expected).abs() < 1e-9);
        for offset in scan.offsets() {
            let line = scan.construction_line(offset);
            assert!((line.x2 - line.x1 - expected).abs() < 1e-9);
            assert!((line.y2 - line.y1 - height).abs() < 1e-9);
        }
    }

    #[test]
    fn slanted_endpoints_land_on_edges() {
        for angle in [30.0, -30.0, 45.0, -45.0, 12.5] {
            let config = config_with_angle(angle);
            let rect = config.layout().unwrap().area.clip_rect();
            let lines = generate_vertical_lines(&config).unwrap();
            assert!(!lines.is_empty());

            for line in &lines {
                assert!(rect.contains_line(line), "{:?} escaped at {} deg", line, angle);
                assert!(on_edge(line.x1, line.y1, &rect), "start of {:?} not on an edge", line);
                assert!(on_edge(line.x2, line.y2, &rect), "end of {:?} not on an edge", line);
            }
        }
    }

    #[test]
    fn slant_direction_follows_angle_sign() {
        for line in generate_vertical_lines(&config_with_angle(20.0)).unwrap() {
            assert!(line.x2 >= line.x1);
        }
        for line in generate_vertical_lines(&config_with_angle(-20.0)).unwrap() {
            assert!(line.x2 <= line.x1);
        }
    }

    #[test]
    fn scan_range_is_tight() {
        // Offsets one step outside the scan must miss the rectangle entirely.
        for angle in [45.0, -45.0, 30.0, -10.0, 0.0] {
            let layout = config_with_angle(angle).layout().unwrap();
            let scan = GuideScan::new(&layout).unwrap().unwrap();
            let rect = layout.area.clip_rect();
            let spacing = layout.guide_spacing;

            let first = scan.offsets().next().unwrap();
            let last = scan.offsets().last().unwrap();
            assert_eq!(clip_line_to_rect(scan.construction_line(first - spacing), &rect), None);
            assert_eq!(clip_line_to_rect(scan.construction_line(last + spacing), &rect), None);
        }
    }

    #[test]
    fn no_visible_guide_is_missed_near_45_degrees() {
        // Brute force: sweep offsets far beyond the analytic range and
        // count how many hit the rectangle.
        for angle in [44.0, 45.0, -45.0, -44.0] {
            let layout = config_with_angle(angle).layout().unwrap();
            let scan = GuideScan::new(&layout).unwrap().unwrap();
            let rect = layout.area.clip_rect();

            let base = -scan.shift().abs();
            let brute = (-500..=500)
                .map(|k| base + k as f64 * layout.guide_spacing)
                .filter(|x| clip_line_to_rect(scan.construction_line(*x), &rect).is_some())
                .count();

            assert_eq!(scan.lines().len(), brute, "angle {}", angle);
        }
    }

    #[test]
    fn right_angle_is_refused() {
        for angle in [90.0, -90.0] {
            assert!(matches!(
                generate_vertical_lines(&config_with_angle(angle)),
                Err(PatternError::TooManyLines { limit: MAX_LINES, .. })
            ));
        }
    }

    #[test]
    fn steep_angles_still_draw() {
        for angle in [85.0, 89.0, 89.99, -89.99] {
            let config = config_with_angle(angle);
            let rect = config.layout().unwrap().area.clip_rect();
            let lines = generate_vertical_lines(&config).unwrap();
            assert!(!lines.is_empty(), "angle {}", angle);
            assert!(lines.iter().all(|line| rect.contains_line(line)));
        }
        // Every offset is a visible sliver at 89.99 degrees
        assert!(generate_vertical_lines(&config_with_angle(89.99)).unwrap().len() > 100_000);
    }

    #[test]
    fn non_positive_spacing_is_empty() {
        let config = PatternConfig { vertical_spacing: 0.0, ..Default::default() };
        assert!(generate_vertical_lines(&config).unwrap().is_empty());
        let config = PatternConfig { vertical_spacing: -3.0, ..Default::default() };
        assert!(generate_vertical_lines(&config).unwrap().is_empty());
    }

    #[test]
    fn degenerate_area_is_empty() {
        let config = PatternConfig { margin: 105.0, ..Default::default() };
        assert!(generate_vertical_lines(&config).unwrap().is_empty());
    }

    #[test]
    fn non_finite_angle_is_error() {
        let config = config_with_angle(f64::NAN);
        assert!(matches!(
            generate_vertical_lines(&config),
            Err(PatternError::NonFinite { field: "vertical_angle", .. })
        ));
    }
}
