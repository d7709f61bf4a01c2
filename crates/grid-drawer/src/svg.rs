//! SVG output for a generated sheet.
//!
//! The document is sized in millimetres so it prints at physical size, with
//! a viewBox in drawing units so line coordinates go in untouched.

use std::fmt::Write;

use crate::sheet::{Layer, RuledSheet};
use crate::units::to_millimeters;

/// Page background painted under both layers.
const BACKGROUND: &str = "white";

/// Serialize a sheet to a standalone SVG document.
///
/// One `<g>` per layer, in paint order, with the layer's stroke on the group
/// and a bare `<line>` per segment.
pub fn sheet_to_svg(sheet: &RuledSheet) -> String {
    let area = sheet.area;

    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}mm" height="{:.2}mm"
     viewBox="0 0 {:.2} {:.2}">
  <rect width="100%" height="100%" fill="{}"/>
"##,
        to_millimeters(area.width),
        to_millimeters(area.height),
        area.width,
        area.height,
        BACKGROUND,
    );

    for layer in sheet.layers() {
        push_layer(&mut svg, layer);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_layer(svg: &mut String, layer: &Layer) {
    let stroke = &layer.stroke;

    // ## Rust Lesson #26: fmt::Write for Strings
    //
    // `write!` into a String can't actually fail, but the trait still returns
    // a Result. Ignoring it with `let _ =` is the usual idiom.
    let _ = write!(
        svg,
        r#"  <g id="{}" stroke="{}" stroke-width="{}" fill="none""#,
        layer.name,
        escape_attr(&stroke.color),
        stroke.width
    );
    if let Some(dash) = stroke.dash {
        let _ = write!(svg, r#" stroke-dasharray="{} {}""#, dash.on, dash.off);
    }
    svg.push_str(">\n");

    for line in &layer.lines {
        let _ = writeln!(
            svg,
            "    <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            line.x1, line.y1, line.x2, line.y2
        );
    }

    svg.push_str("  </g>\n");
}

/// Colors come from user config; keep them from breaking the attribute.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
