use std::path::PathBuf;

use clap::{Parser, Subcommand};
use touchstick::config::types::MonitorKind;

/// Virtual on-screen joystick, driven from touch scripts.
///
/// Set `RUST_LOG=debug` to trace ignored touches.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Opts {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Validate the syntax of a configuration file.
    Validate(Validate),
    /// Feed a touch script to a stick and print its reports.
    Replay(Replay),
}

#[derive(Debug, Parser)]
pub struct Validate {
    /// Configuration file to check.
    pub config_file: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Replay {
    /// Touch script to play.
    pub script_file: PathBuf,
    /// Stick configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Report shape, overrides the MONITOR setting.
    #[arg(short, long, value_enum)]
    pub monitor: Option<MonitorKind>,
}
