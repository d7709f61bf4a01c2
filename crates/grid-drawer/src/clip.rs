//! Cohen–Sutherland line clipping against the drawing-area rectangle.
//!
//! Every guide line passes through here, so it stays allocation-free and
//! works on plain `Copy` values.

use crate::geometry::{ClipRect, Line};

// ============================================================================
// OUTCODES
// ============================================================================
//
// ## Rust Lesson #8: Bit Flags without a Crate
//
// Four regions, four bits. A `u8` newtype keeps outcodes from being mixed up
// with ordinary integers while `|` and `&` stay as cheap as in C.

/// 4-bit region code of a point relative to a [`ClipRect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: OutCode = OutCode(0);
    pub const LEFT: OutCode = OutCode(1);
    pub const RIGHT: OutCode = OutCode(2);
    /// Above the top edge (`y < top`; y grows downward)
    pub const TOP: OutCode = OutCode(4);
    /// Below the bottom edge (`y > bottom`)
    pub const BOTTOM: OutCode = OutCode(8);

    /// Classify a point. Points on an edge are inside.
    #[inline]
    pub fn of(x: f64, y: f64, rect: &ClipRect) -> OutCode {
        let mut code = 0;
        if x < rect.left {
            code |= Self::LEFT.0;
        }
        if x > rect.right {
            code |= Self::RIGHT.0;
        }
        if y < rect.top {
            code |= Self::TOP.0;
        }
        if y > rect.bottom {
            code |= Self::BOTTOM.0;
        }
        OutCode(code)
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, flag: OutCode) -> bool {
        self.0 & flag.0 != 0
    }

    /// True when both points are beyond the same edge.
    #[inline]
    pub fn shares_side(self, other: OutCode) -> bool {
        self.0 & other.0 != 0
    }
}

/// Upper bound on edge intersections for one segment.
///
/// Each intersection pins one coordinate of one endpoint to an edge, and a
/// segment can be moved onto each of the four edges at most once. Going past
/// this only happens when rounding keeps nudging a point back out near a
/// corner; that segment touches the rectangle in at most a sliver and is
/// treated as a miss.
pub const MAX_CLIP_STEPS: usize = 4;

// ============================================================================
// CLIPPING
// ============================================================================

/// Clip a segment to a closed rectangle.
///
/// Returns `None` when the segment misses the rectangle entirely. A segment
/// already inside comes back bit-for-bit unchanged, so clipping is
/// idempotent.
///
/// Non-finite coordinates also give `None`: NaN compares false against every
/// edge and would otherwise classify as inside. Generators never get here
/// with them, since [`PatternConfig::layout`](crate::config::PatternConfig::layout)
/// reports non-finite input as an error first.
pub fn clip_line_to_rect(line: Line, rect: &ClipRect) -> Option<Line> {
    let Line { mut x1, mut y1, mut x2, mut y2 } = line;
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return None;
    }

    let mut code1 = OutCode::of(x1, y1, rect);
    let mut code2 = OutCode::of(x2, y2, rect);

    for _ in 0..=MAX_CLIP_STEPS {
        if code1.is_inside() && code2.is_inside() {
            // Trivial accept
            return Some(Line::new(x1, y1, x2, y2));
        }
        if code1.shares_side(code2) {
            // Trivial reject
            return None;
        }

        // At least one endpoint is outside; prefer the first.
        let out = if code1.is_inside() { code2 } else { code1 };

        // ## Rust Lesson #12: if/else as an Expression
        //
        // Each branch yields the intersection point, so there is no
        // uninitialised `let (x, y);` to fill in later.
        //
        // Division safety: a BOTTOM/TOP bit here means the endpoints sit on
        // different sides of that edge (same side was rejected above), so
        // y1 != y2. Same for RIGHT/LEFT and x1 != x2.
        let (x, y) = if out.contains(OutCode::BOTTOM) {
            debug_assert!(y2 != y1);
            (x1 + (x2 - x1) * (rect.bottom - y1) / (y2 - y1), rect.bottom)
        } else if out.contains(OutCode::TOP) {
            debug_assert!(y2 != y1);
            (x1 + (x2 - x1) * (rect.top - y1) / (y2 - y1), rect.top)
        } else if out.contains(OutCode::RIGHT) {
            debug_assert!(x2 != x1);
            (rect.right, y1 + (y2 - y1) * (rect.right - x1) / (x2 - x1))
        } else {
            debug_assert!(x2 != x1);
            (rect.left, y1 + (y2 - y1) * (rect.left - x1) / (x2 - x1))
        };

        if out == code1 {
            x1 = x;
            y1 = y;
            code1 = OutCode::of(x1, y1, rect);
        } else {
            x2 = x;
            y2 = y;
            code2 = OutCode::of(x2, y2, rect);
        }
    }

    None
}

/// Clip many segments, keeping only the ones that hit the rectangle.
///
/// Output order follows input order.
pub fn clip_lines_to_rect(lines: &[Line], rect: &ClipRect) -> Vec<Line> {
    lines
        .iter()
        .filter_map(|line| clip_line_to_rect(*line, rect))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
