use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use teacup::cli::{Cli, Command, RunArgs, Session};
use teacup::config::{Config, OutputFormat};
use teacup::logging::init_tracing;
use teacup::samples::SampleKind;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Samples => {
            for kind in SampleKind::ALL {
                println!("{:<15} {}", kind.name(), kind.description());
            }
            Ok(())
        }
        Command::ConfigPath => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config);

    let kind = args.sample.unwrap_or(config.demo.sample);
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.demo.format
    };

    let session = Session::start(kind, format)?;
    session.set_log_patches(config.logging.patches);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            session.run(BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())?
        }
        None => session.run(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?,
    };

    tracing::info!(
        events = summary.events,
        errors = summary.errors,
        cycles = summary.cycles,
        "session finished"
    );
    if summary.errors > 0 {
        anyhow::bail!("{} script line(s) failed", summary.errors);
    }
    Ok(())
}
