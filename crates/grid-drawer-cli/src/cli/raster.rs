//! PNG export for printing.
//!
//! The SVG document goes through usvg/resvg onto a white tiny-skia pixmap.
//! `scale` is the pixel ratio; 2 gives a print-friendly raster of an A4
//! sheet at roughly 192 DPI.

use std::path::Path;

use resvg::usvg;
use tiny_skia::Pixmap;
use tracing::info;

use super::error::CliError;

/// Default pixel ratio for PNG export.
pub const DEFAULT_PNG_SCALE: f32 = 2.0;

/// Rasterize an SVG document and return the pixmap.
pub fn render_png(svg_content: &str, scale: f32) -> Result<Pixmap, CliError> {
    if !(scale > 0.0) || !scale.is_finite() {
        return Err(CliError::Raster(format!("scale must be positive, got {}", scale)));
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| CliError::Raster(e.to_string()))?;

    let size = tree.size();
    let pixmap_width = (size.width() * scale).ceil() as u32;
    let pixmap_height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height).ok_or_else(|| {
        CliError::Raster(format!(
            "could not create a {}x{} pixmap",
            pixmap_width, pixmap_height
        ))
    })?;

    // Fill with white background
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Rasterize an SVG document straight to a PNG file.
pub fn write_png(svg_content: &str, png_path: &Path, scale: f32) -> Result<(), CliError> {
    let pixmap = render_png(svg_content, scale)?;
    pixmap
        .save_png(png_path)
        .map_err(|e| CliError::Raster(format!("{}: {}", png_path.display(), e)))?;

    info!(
        path = %png_path.display(),
        width = pixmap.width(),
        height = pixmap.height(),
        "wrote PNG"
    );
    Ok(())
}
