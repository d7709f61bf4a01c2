//! Pattern configuration.
//!
//! A [`PatternConfig`] holds every user-facing setting in millimetres and
//! degrees. It is a plain immutable value: generators borrow it, convert it
//! to a [`Layout`] in drawing units, and never write back.
//!
//! Every field has a serde default, so a config file only needs to name the
//! settings it changes.

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::geometry::DrawingArea;
use crate::units::to_drawing_units;

/// Physical canvas size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    /// A4 portrait.
    fn default() -> Self {
        Self { width: 210.0, height: 297.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Canvas size (mm)
    pub canvas: CanvasSize,
    /// Margin on all four sides (mm)
    pub margin: f64,
    /// Gap between the two lines of a horizontal pair (mm)
    pub horizontal_primary: f64,
    /// Gap between one pair and the next (mm)
    pub horizontal_secondary: f64,
    /// Distance between guide lines along the x axis, before shear (mm)
    pub vertical_spacing: f64,
    /// Guide tilt from true vertical in degrees. [-45, 45] is sensible;
    /// nothing enforces it.
    pub vertical_angle: f64,
    /// Stroke color for horizontal rules
    pub horizontal_color: String,
    /// Stroke color for slanted guides
    pub vertical_color: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            margin: 10.0,
            horizontal_primary: 10.0,
            horizontal_secondary: 5.0,
            vertical_spacing: 5.0,
            vertical_angle: 0.0,
            horizontal_color: default_color(),
            vertical_color: default_color(),
        }
    }
}

fn default_color() -> String {
    "#000000".to_string()
}

/// A [`PatternConfig`] converted to drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub area: DrawingArea,
    pub spacing_primary: f64,
    pub spacing_secondary: f64,
    pub guide_spacing: f64,
    /// Angles are unitless; carried through unchanged.
    pub angle_degrees: f64,
}

impl PatternConfig {
    /// Numeric fields with their names, for error reporting.
    fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("margin", self.margin),
            ("horizontal_primary", self.horizontal_primary),
            ("horizontal_secondary", self.horizontal_secondary),
            ("vertical_spacing", self.vertical_spacing),
            ("vertical_angle", self.vertical_angle),
        ]
    }

    /// Reject NaN and infinite values.
    ///
    /// This is the only check the generators enforce as an error. Everything
    /// else degrades to empty output.
    pub fn ensure_finite(&self) -> Result<(), PatternError> {
        match self.numeric_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(PatternError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Every problem with this config, in field order.
    ///
    /// An empty list means both generators will produce lines.
    pub fn problems(&self) -> Vec<PatternError> {
        let mut problems: Vec<PatternError> = self
            .numeric_fields()
            .into_iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(field, value)| PatternError::NonFinite { field, value })
            .collect();

        let spacings = [
            ("horizontal_primary", self.horizontal_primary),
            ("horizontal_secondary", self.horizontal_secondary),
            ("vertical_spacing", self.vertical_spacing),
        ];
        problems.extend(
            spacings
                .into_iter()
                .filter(|(_, v)| v.is_finite() && *v <= 0.0)
                .map(|(field, value)| PatternError::InvalidSpacing { field, value }),
        );

        let area = DrawingArea::new(self.canvas.width, self.canvas.height, self.margin);
        if self.ensure_finite().is_ok() && area.is_degenerate() {
            problems.push(PatternError::DegenerateArea {
                width: self.canvas.width,
                height: self.canvas.height,
                margin: self.margin,
            });
        }

        problems
    }

    /// Strict validation: the first problem found, if any.
    pub fn validate(&self) -> Result<(), PatternError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Convert to drawing units. Each physical value is scaled exactly once.
    pub fn layout(&self) -> Result<Layout, PatternError> {
        self.ensure_finite()?;

        Ok(Layout {
            area: DrawingArea::new(
                to_drawing_units(self.canvas.width),
                to_drawing_units(self.canvas.height),
                to_drawing_units(self.margin),
            ),
            spacing_primary: to_drawing_units(self.horizontal_primary),
            spacing_secondary: to_drawing_units(self.horizontal_secondary),
            guide_spacing: to_drawing_units(self.vertical_spacing),
            angle_degrees: self.vertical_angle,
        })
    }
}
