//! Command handlers for the `resgen` CLI.
//!
//! Each submodule implements one command. Handlers write to the streams of a
//! [`Console`] instead of the process's stdio, and return a [`Status`] rather
//! than exiting, so the binary stays a thin argument dispatcher.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use resgen_diagnostic::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use crate::input::SourceFile;
use crate::options::{GenerateOptions, OutputFormat};
use crate::pipeline::RunOutput;

mod check;
mod debug;
mod explain;
mod generate;

pub use check::check;
pub use debug::{lex_file, model_file, parse_file};
pub use explain::explain;
pub use generate::generate;

/// How a command finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Errors were reported, or generated files are out of date.
    Failure,
}

impl Status {
    fn of(run: &RunOutput) -> Self {
        if run.has_errors().is_some() {
            Status::Failure
        } else {
            Status::Success
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Output streams of a command.
///
/// Results go to `out`; diagnostics, summaries and errors go to `err`.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Whether `err` is a terminal, for `--color=auto`.
    pub err_is_tty: bool,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Console {
            out,
            err,
            err_is_tty: false,
        }
    }

    /// Console over the given stdio handles.
    pub fn stdio(out: &'a mut io::StdoutLock<'static>, err: &'a mut io::StderrLock<'static>) -> Self {
        let err_is_tty = err.is_terminal();
        Console {
            out,
            err,
            err_is_tty,
        }
    }
}

/// Write the diagnostics of `run` to the console's error stream.
fn report(run: &RunOutput, files: &[SourceFile], options: &GenerateOptions, console: &mut Console<'_>) {
    match options.format {
        OutputFormat::Terminal => {
            let mut emitter =
                TerminalEmitter::with_color_mode(&mut *console.err, options.color, console.err_is_tty);
            let mut current = None;
            for (file, diagnostic) in &run.diagnostics {
                if current != Some(*file) {
                    let source = &files[file.index()];
                    emitter.set_source(&source.display, &source.text);
                    current = Some(*file);
                }
                emitter.emit(diagnostic);
            }
            emitter.emit_summary(run.error_count, run.warning_count);
            emitter.flush();

            if run.suppressed > 0 {
                let _ = writeln!(
                    console.err,
                    "note: {} more diagnostic{} not shown (--error-limit={})",
                    run.suppressed,
                    if run.suppressed == 1 { "" } else { "s" },
                    options.error_limit
                );
            }
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(&mut *console.err);
            emitter.begin();
            for (file, diagnostic) in &run.diagnostics {
                emitter.set_file(files[file.index()].display.as_str());
                emitter.emit(diagnostic);
            }
            emitter.end();
            emitter.flush();
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
