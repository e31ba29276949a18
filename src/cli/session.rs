//! Drives a sample through the headless renderer from a script.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::script::{parse_line, ScriptCommand};
use crate::config::OutputFormat;
use crate::headless::HeadlessRenderer;
use crate::render::RenderError;
use crate::runtime::RuntimeError;
use crate::samples::{RunningSample, SampleKind};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to start sample: {0}")]
    Start(#[from] RuntimeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What `run` reports once the input is exhausted or `quit` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub events: usize,
    pub errors: usize,
    pub cycles: u64,
}

pub struct Session {
    renderer: HeadlessRenderer,
    sample: Box<dyn RunningSample>,
    format: OutputFormat,
}

impl Session {
    pub fn start(kind: SampleKind, format: OutputFormat) -> Result<Self, SessionError> {
        let renderer = HeadlessRenderer::new();
        let sample = kind.start(renderer.clone())?;
        tracing::info!(sample = %kind, "sample started");
        Ok(Self {
            renderer,
            sample,
            format,
        })
    }

    pub fn renderer(&self) -> &HeadlessRenderer {
        &self.renderer
    }

    pub fn set_log_patches(&self, enabled: bool) {
        self.sample.set_log_patches(enabled);
    }

    /// Inject one event. Returns `false` for `quit`.
    pub fn execute(
        &self,
        command: &ScriptCommand,
        out: &mut impl Write,
    ) -> Result<bool, CommandError> {
        match command {
            ScriptCommand::Click(path) => self.renderer.click(path)?,
            ScriptCommand::Type { path, text } => self.renderer.type_text(path, text)?,
            ScriptCommand::Check { path, checked } => {
                self.renderer.set_checked(path, *checked)?
            }
            ScriptCommand::Show => {
                self.write_model(out)?;
                return Ok(true);
            }
            ScriptCommand::Quit => return Ok(false),
        }
        self.write_tree(out)?;
        Ok(true)
    }

    /// Print the initial tree, then run every command in `input`.
    ///
    /// Bad lines and failed events are reported on `err` and skipped.
    pub fn run(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary {
            events: 0,
            errors: 0,
            cycles: 0,
        };
        self.write_tree(out)?;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let Some(parsed) = parse_line(&line) else {
                continue;
            };
            let outcome = parsed
                .map_err(CommandError::from)
                .and_then(|command| self.execute(&command, out));
            match outcome {
                Ok(true) => summary.events += 1,
                Ok(false) => break,
                Err(CommandError::Output(source)) => return Err(source),
                Err(error) => {
                    summary.errors += 1;
                    tracing::warn!(line = index + 1, %error, "script line skipped");
                    writeln!(err, "line {}: {error}", index + 1)?;
                }
            }
        }

        out.flush()?;
        summary.cycles = self.sample.cycles();
        Ok(summary)
    }

    fn write_tree(&self, out: &mut impl Write) -> Result<(), SessionError> {
        match self.format {
            OutputFormat::Tree => {
                write!(out, "{}", self.renderer.render_text())?;
                writeln!(out)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &self.renderer.snapshot())?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_model(&self, out: &mut impl Write) -> Result<(), SessionError> {
        match self.format {
            OutputFormat::Tree => {
                writeln!(out, "cycles: {}", self.sample.cycles())?;
                writeln!(out, "model: {}", self.sample.describe())?;
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "cycles": self.sample.cycles(),
                    "model": self.sample.describe(),
                });
                serde_json::to_writer(&mut *out, &value)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Failure of a single script line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Script(#[from] super::script::ScriptError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the result failed; this ends the session.
    #[error(transparent)]
    Output(#[from] SessionError),
}
