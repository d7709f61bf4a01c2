//! # grid-drawer
//!
//! Geometry for printable ruled sheets: paired horizontal rules and slanted,
//! dashed vertical guides, all confined to a margin-inset drawing area.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Every entry point is a pure function of a borrowed [`PatternConfig`].
//! Nothing is cached between calls.

pub mod clip;
pub mod config;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod rules;
pub mod sheet;
pub mod svg;
pub mod units;

// Re-export common types at crate root for convenience.
pub use clip::{clip_line_to_rect, clip_lines_to_rect, OutCode};
pub use config::{CanvasSize, Layout, PatternConfig};
pub use error::PatternError;
pub use geometry::{ClipRect, DrawingArea, Line, Point};
pub use guides::{generate_vertical_lines, GuideScan, MAX_LINES};
pub use rules::{generate_horizontal_lines, HorizontalRules};
pub use sheet::{Dash, Layer, RuledSheet, Stroke, GUIDE_DASH};
pub use svg::sheet_to_svg;
pub use units::{to_drawing_units, to_millimeters, MM_TO_UNITS};
