//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use grid_drawer::{to_millimeters, Layer, Line, RuledSheet, Stroke};

use super::error::CliError;

/// Output format for a generated sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// A line in JSON output format.
#[derive(Serialize)]
struct JsonLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl From<&Line> for JsonLine {
    fn from(line: &Line) -> Self {
        Self { x1: line.x1, y1: line.y1, x2: line.x2, y2: line.y2 }
    }
}

/// Sheet size in both unit systems.
#[derive(Serialize)]
struct JsonCanvas {
    width_mm: f64,
    height_mm: f64,
    margin_mm: f64,
    width: f64,
    height: f64,
    margin: f64,
}

#[derive(Serialize)]
struct JsonLayer<'a> {
    stroke: &'a Stroke,
    lines: Vec<JsonLine>,
}

impl<'a> From<&'a Layer> for JsonLayer<'a> {
    fn from(layer: &'a Layer) -> Self {
        Self {
            stroke: &layer.stroke,
            lines: layer.lines.iter().map(JsonLine::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonSheet<'a> {
    canvas: JsonCanvas,
    horizontal: JsonLayer<'a>,
    vertical: JsonLayer<'a>,
}

/// Serialize a sheet to pretty JSON.
pub fn sheet_to_json(sheet: &RuledSheet) -> Result<String, CliError> {
    let area = sheet.area;
    let output = JsonSheet {
        canvas: JsonCanvas {
            width_mm: to_millimeters(area.width),
            height_mm: to_millimeters(area.height),
            margin_mm: to_millimeters(area.margin),
            width: area.width,
            height: area.height,
            margin: area.margin,
        },
        horizontal: JsonLayer::from(&sheet.horizontal),
        vertical: JsonLayer::from(&sheet.vertical),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write text to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}
