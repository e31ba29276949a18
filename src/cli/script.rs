//! Line-oriented event scripts for `teacup run`.
//!
//! ```text
//! # comment
//! click /0
//! type /2/0 buy milk
//! check /0/0 true
//! show
//! quit
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::mvu::{ParsePathError, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Click(Path),
    /// Replace the input's text. Everything after the path is the text.
    Type { path: Path, text: String },
    Check { path: Path, checked: bool },
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}' takes no argument '{extra}'")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error(transparent)]
    InvalidPath(#[from] ParsePathError),

    #[error("expected true or false, got '{0}'")]
    InvalidBool(String),
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<ScriptCommand, ScriptError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.parse())
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = split_word(line);
        match command {
            "click" => {
                let (path, extra) = split_word(rest);
                no_extra("click", extra)?;
                Ok(ScriptCommand::Click(required_path("click", path)?))
            }
            "type" => {
                let (path, text) = split_word(rest);
                Ok(ScriptCommand::Type {
                    path: required_path("type", path)?,
                    text: text.to_string(),
                })
            }
            "check" => {
                let (path, rest) = split_word(rest);
                let path = required_path("check", path)?;
                let (value, extra) = split_word(rest);
                no_extra("check", extra)?;
                let checked = match value {
                    "" => {
                        return Err(ScriptError::MissingArgument {
                            command: "check",
                            argument: "value",
                        })
                    }
                    "true" | "on" => true,
                    "false" | "off" => false,
                    other => return Err(ScriptError::InvalidBool(other.to_string())),
                };
                Ok(ScriptCommand::Check { path, checked })
            }
            "show" => no_extra("show", rest).map(|()| ScriptCommand::Show),
            "quit" | "exit" => no_extra("quit", rest).map(|()| ScriptCommand::Quit),
            other => Err(ScriptError::UnknownCommand(other.to_string())),
        }
    }
}

/// First whitespace-separated word and the remainder with its leading
/// whitespace removed.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn required_path(command: &'static str, word: &str) -> Result<Path, ScriptError> {
    if word.is_empty() {
        return Err(ScriptError::MissingArgument {
            command,
            argument: "path",
        });
    }
    Ok(word.parse()?)
}

fn no_extra(command: &'static str, extra: &str) -> Result<(), ScriptError> {
    if extra.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArgument {
            command,
            extra: extra.to_string(),
        })
    }
}
