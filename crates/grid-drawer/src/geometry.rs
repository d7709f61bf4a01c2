//! Core geometry types for grid-drawer.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(...)]` generates the boring impls for us:
//! - `Debug` = printable with `{:?}`
//! - `Clone` + `Copy` = small stack values, copied implicitly
//! - `PartialEq` = comparable with `==`
//!
//! Every type here is `Copy`. A line is four floats; passing it by value is
//! cheaper than chasing a reference.

/// A 2D point in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints, in drawing units.
///
/// Color, width and dash are not part of the segment. Generators only
/// produce coordinates; see [`Stroke`](crate::sheet::Stroke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Axis-aligned clip rectangle. `top < bottom` (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// The sheet: full canvas size plus a uniform margin, all in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// True when both endpoints share the same y.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    /// True when both endpoints share the same x.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

impl ClipRect {
    #[inline]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Closed containment test: points on the boundary are inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// True when both endpoints of `line` are inside (boundary included).
    #[inline]
    pub fn contains_line(&self, line: &Line) -> bool {
        self.contains(line.start()) && self.contains(line.end())
    }
}

impl DrawingArea {
    #[inline]
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self { width, height, margin }
    }

    /// The margin-inset region every line is confined to.
    #[inline]
    pub fn clip_rect(&self) -> ClipRect {
        ClipRect::new(
            self.margin,
            self.width - self.margin,
            self.margin,
            self.height - self.margin,
        )
    }

    /// Width between the left and right margins.
    #[inline]
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height between the top and bottom margins.
    #[inline]
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// True when the margins leave no content region.
    ///
    /// Written as a negated "is valid" test so NaN fields also count as
    /// degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let valid = self.margin >= 0.0
            && 2.0 * self.margin < self.width
            && 2.0 * self.margin < self.height;
        !valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn line_orientation() {
        assert!(Line::new(0.0, 5.0, 10.0, 5.0).is_horizontal());
        assert!(Line::new(5.0, 0.0, 5.0, 10.0).is_vertical());
        assert!(!Line::new(0.0, 0.0, 1.0, 1.0).is_horizontal());
    }

    #[test]
    fn clip_rect_from_area() {
        let area = DrawingArea::new(100.0, 200.0, 10.0);
        let rect = area.clip_rect();
        assert_eq!(rect, ClipRect::new(10.0, 90.0, 10.0, 190.0));
        assert_eq!(rect.width(), area.content_width());
        assert_eq!(rect.height(), area.content_height());
    }

    #[test]
    fn contains_is_closed() {
        let rect = ClipRect::new(0.0, 10.0, 0.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(10.000001, 5.0)));
        assert!(!rect.contains(Point::new(5.0, -0.5)));
    }

    #[test]
    fn degenerate_areas() {
        assert!(!DrawingArea::new(100.0, 100.0, 10.0).is_degenerate());
        assert!(!DrawingArea::new(100.0, 100.0, 0.0).is_degenerate());
        // Margins meet exactly in the middle
        assert!(DrawingArea::new(100.0, 200.0, 50.0).is_degenerate());
        assert!(DrawingArea::new(200.0, 100.0, 50.0).is_degenerate());
        assert!(DrawingArea::new(100.0, 100.0, -1.0).is_degenerate());
        assert!(DrawingArea::new(f64::NAN, 100.0, 1.0).is_degenerate());
    }
}
