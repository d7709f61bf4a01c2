//! Tracing subscriber initialization.
//!
//! Logs go to stderr so stdout stays clean for SVG/JSON output.
//! `RUST_LOG` wins when set; otherwise `-v` picks the level.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
