//! CLI command implementations.
//!
//! - `draw` - Generate a ruled sheet as SVG or JSON, optionally PNG
//! - `check` - Report problems with a sheet config
//! - `example` - Print an example YAML config

pub mod common;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod raster;

pub use config::{cmd_check, cmd_example, SettingsArgs};
pub use draw::{cmd_draw, DrawArgs};
