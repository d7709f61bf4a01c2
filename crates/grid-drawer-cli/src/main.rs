//! grid-drawer - printable ruled sheets from the command line
//!
//! Usage:
//!   grid-drawer draw [options]        Generate a sheet (SVG/JSON, optional PNG)
//!   grid-drawer check [options]       Report problems with a config
//!   grid-drawer example               Print an example YAML config

mod cli;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::error;

use cli::{cmd_check, cmd_draw, cmd_example, DrawArgs, SettingsArgs};

/// Ruled writing sheets with paired rules and slanted guides
#[derive(Parser, Debug)]
#[command(name = "grid-drawer")]
#[command(version)]
#[command(about = "Generate printable ruled sheets with slanted guide lines")]
struct Args {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sheet
    Draw(DrawArgs),
    /// Report problems with the resolved settings
    Check(SettingsArgs),
    /// Print an example YAML config
    Example,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::logging::init(args.verbose);

    let result = match &args.command {
        Command::Draw(draw) => cmd_draw(draw),
        Command::Check(settings) => cmd_check(settings),
        Command::Example => cmd_example(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
