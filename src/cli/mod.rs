//! Command line of the `teacup` demo binary.

mod script;
mod session;

pub use script::{parse_line, ScriptCommand, ScriptError};
pub use session::{CommandError, Session, SessionError, SessionSummary};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::samples::SampleKind;

#[derive(Parser, Debug)]
#[command(name = "teacup")]
#[command(about = "Model-View-Update runtime demos on a headless widget tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a sample, reading events from a script or stdin
    Run(RunArgs),
    /// List the available samples
    Samples,
    /// Print the default config file location
    ConfigPath,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Sample to run (defaults to `demo.sample` from the config)
    #[arg(value_enum)]
    pub sample: Option<SampleKind>,

    /// Event script; stdin when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print JSON snapshots instead of the tree outline
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}
