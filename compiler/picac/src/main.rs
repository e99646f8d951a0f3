//! `pica` command-line entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use pica_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use pica_diagnostic::Diagnostic;
use pica_eval::stdout_handler;
use picac::cli::{self, Command, Invocation, Options, USAGE};
use picac::commands::{lex_source, parse_source, run_source};

fn main() -> ExitCode {
    picac::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match cli::parse_args(&args) {
        Ok(Invocation::Command(options)) => options,
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let source = match read_file(&options.path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let result = match options.command {
        Command::Lex => Ok(lex_source(&source)),
        Command::Parse => parse_source(&source),
        Command::Run => run_source(&source, stdout_handler()),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => {
            report(&diagnostic, &options, &source);
            ExitCode::FAILURE
        }
    }
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

fn report(diagnostic: &Diagnostic, options: &Options, source: &str) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter =
        TerminalEmitter::stderr(options.color, is_tty).with_source(options.path.as_str(), source);
    emitter.emit(diagnostic);
    if diagnostic.is_error() {
        emitter.emit_summary(1, 0);
    } else {
        emitter.emit_summary(0, 1);
    }
    emitter.flush();
}
