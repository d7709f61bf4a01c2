//! Sheet settings: YAML config file plus command-line overrides.
//!
//! Precedence is defaults → config file → flags. A config file only needs to
//! name the settings it changes; everything else keeps its default.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use grid_drawer::PatternConfig;
use tracing::{debug, info, warn};

use super::error::CliError;

/// Settings shared by every command that builds a sheet.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// YAML config file (see `grid-drawer example`)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Canvas width in mm
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in mm
    #[arg(long)]
    pub height: Option<f64>,

    /// Margin on every side in mm
    #[arg(long)]
    pub margin: Option<f64>,

    /// Gap between the two lines of a horizontal pair in mm
    #[arg(long)]
    pub primary: Option<f64>,

    /// Gap between horizontal pairs in mm
    #[arg(long)]
    pub secondary: Option<f64>,

    /// Distance between vertical guides in mm
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Guide tilt from vertical in degrees (-45..45 recommended)
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Stroke color of horizontal rules
    #[arg(long, value_name = "COLOR")]
    pub horizontal_color: Option<String>,

    /// Stroke color of vertical guides
    #[arg(long, value_name = "COLOR")]
    pub vertical_color: Option<String>,
}

impl SettingsArgs {
    /// Build the final config: file (or defaults), then flags on top.
    pub fn resolve(&self) -> Result<PatternConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PatternConfig::default(),
        };
        self.apply_overrides(&mut config);
        debug!(?config, "resolved sheet settings");
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut PatternConfig) {
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(primary) = self.primary {
            config.horizontal_primary = primary;
        }
        if let Some(secondary) = self.secondary {
            config.horizontal_secondary = secondary;
        }
        if let Some(spacing) = self.spacing {
            config.vertical_spacing = spacing;
        }
        if let Some(angle) = self.angle {
            config.vertical_angle = angle;
        }
        if let Some(color) = &self.horizontal_color {
            config.horizontal_color = color.clone();
        }
        if let Some(color) = &self.vertical_color {
            config.vertical_color = color.clone();
        }
    }
}

/// Load a config from a YAML file.
pub fn load_config(path: &Path) -> Result<PatternConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse YAML config text. An empty document means all defaults.
pub fn parse_config(content: &str) -> Result<PatternConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(PatternConfig::default());
    }
    serde_yaml::from_str(content)
}

/// Log every problem with a config as a warning. Returns how many there were.
pub fn warn_problems(config: &PatternConfig) -> usize {
    let problems = config.problems();
    for problem in &problems {
        warn!("{}", problem);
    }
    problems.len()
}

/// Execute the check command: report problems, exit 1 if any.
pub fn cmd_check(settings: &SettingsArgs) -> Result<ExitCode, CliError> {
    let config = settings.resolve()?;
    let problems = config.problems();

    let mut stdout = io::stdout().lock();
    if problems.is_empty() {
        writeln!(stdout, "ok").map_err(CliError::Stdout)?;
        info!("config is valid");
        return Ok(ExitCode::SUCCESS);
    }

    for problem in &problems {
        writeln!(stdout, "{}", problem).map_err(CliError::Stdout)?;
    }
    Ok(ExitCode::FAILURE)
}

/// Execute the example command.
pub fn cmd_example() -> Result<ExitCode, CliError> {
    io::stdout()
        .lock()
        .write_all(EXAMPLE_CONFIG.as_bytes())
        .map_err(CliError::Stdout)?;
    Ok(ExitCode::SUCCESS)
}

/// Every setting with its default value.
pub const EXAMPLE_CONFIG: &str = r##"# Example grid-drawer config
# All lengths in millimetres. Omitted settings keep these defaults.

canvas:
  width: 210      # A4 portrait
  height: 297

margin: 10

# Horizontal rules come in pairs
horizontal_primary: 10     # gap inside a pair
horizontal_secondary: 5    # gap between pairs
horizontal_color: "#000000"

# Dashed slanted guides
vertical_spacing: 5
vertical_angle: 0          # degrees from vertical, -45..45 recommended
vertical_color: "#000000"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_parses_to_defaults() {
        let config = parse_config(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, PatternConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config("margin: 15\nvertical_angle: -20\n").unwrap();
        assert_eq!(config.margin, 15.0);
        assert_eq!(config.vertical_angle, -20.0);
        assert_eq!(config.horizontal_primary, 10.0);
        assert_eq!(config.canvas.width, 210.0);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("  \n").unwrap(), PatternConfig::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(parse_config("margn: 15\n").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let settings = SettingsArgs {
            margin: Some(20.0),
            angle: Some(30.0),
            vertical_color: Some("blue".to_string()),
            ..Default::default()
        };
        let mut config = parse_config("margin: 15\nhorizontal_primary: 8\n").unwrap();
        settings.apply_overrides(&mut config);

        assert_eq!(config.margin, 20.0);
        assert_eq!(config.horizontal_primary, 8.0);
        assert_eq!(config.vertical_angle, 30.0);
        assert_eq!(config.vertical_color, "blue");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_config(Path::new("/nonexistent/grid-drawer.yaml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }
}
