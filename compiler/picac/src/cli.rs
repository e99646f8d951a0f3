//! Command-line arguments.
//!
//! ```text
//! pica <lex|parse|run> <file> [--color=auto|always|never]
//! pica help
//! ```

use pica_diagnostic::emitter::ColorMode;

pub const USAGE: &str = "\
Usage: pica <command> <file> [options]

Commands:
  lex      Print the token stream
  parse    Print the desugared expression tree
  run      Evaluate the file and print its value
  help     Show this message

Options:
  --color=<auto|always|never>   Colorize diagnostics (default: auto)

Set RUST_LOG (e.g. RUST_LOG=pica_parse=trace) for tracing output.";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Lex,
    Parse,
    Run,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            "run" => Some(Command::Run),
            _ => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Options {
    pub command: Command,
    pub path: String,
    pub color: ColorMode,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Invocation {
    Help,
    Command(Options),
}

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{0}` for `--color`; expected auto, always or never")]
    InvalidColor(String),
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(UsageError::MissingCommand);
    };
    if matches!(name.as_str(), "help" | "--help" | "-h") {
        return Ok(Invocation::Help);
    }
    let command =
        Command::from_name(name).ok_or_else(|| UsageError::UnknownCommand(name.clone()))?;

    let mut path = None;
    let mut color = ColorMode::Auto;
    for arg in rest {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::from_flag(value)
                .ok_or_else(|| UsageError::InvalidColor(value.to_owned()))?;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(UsageError::MissingPath)?;
    Ok(Invocation::Command(Options {
        command,
        path,
        color,
    }))
}
