//! Draw command implementation.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Args;
use grid_drawer::{sheet_to_svg, RuledSheet};
use tracing::info;

use super::common::{sheet_to_json, write_output, OutputFormat};
use super::config::{warn_problems, SettingsArgs};
use super::error::CliError;
use super::raster::{write_png, DEFAULT_PNG_SCALE};

#[derive(Args, Debug)]
pub struct DrawArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Also rasterize the sheet to a PNG file for printing
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// PNG pixel ratio
    #[arg(long, default_value_t = DEFAULT_PNG_SCALE)]
    pub png_scale: f32,
}

/// Execute the draw command.
pub fn cmd_draw(args: &DrawArgs) -> Result<ExitCode, CliError> {
    let config = args.settings.resolve()?;

    // Problems are not fatal: the affected layers just come out empty.
    warn_problems(&config);

    let start = Instant::now();
    let sheet = RuledSheet::generate(&config)?;
    info!(
        horizontal = sheet.horizontal.lines.len(),
        vertical = sheet.vertical.lines.len(),
        elapsed = ?start.elapsed(),
        "generated sheet"
    );

    // PNG always rasterizes the SVG, whatever the main output format.
    let svg = sheet_to_svg(&sheet);
    match args.format {
        OutputFormat::Svg => write_output(args.output.as_deref(), &svg)?,
        OutputFormat::Json => write_output(args.output.as_deref(), &sheet_to_json(&sheet)?)?,
    }
    if let Some(path) = &args.output {
        info!(path = %path.display(), "wrote sheet");
    }

    if let Some(png_path) = &args.png {
        write_png(&svg, png_path, args.png_scale)?;
    }

    Ok(ExitCode::SUCCESS)
}
