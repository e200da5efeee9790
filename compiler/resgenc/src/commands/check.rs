//! The `check` command: analyze sources and report diagnostics only.


use crate::input;
use crate::options::GenerateOptions;
use crate::pipeline::Session;
use crate::DriverError;

use super::{report, Console, Status};

/// Analyze every source under `options.inputs` without emitting anything.
pub fn check(options: &GenerateOptions, console: &mut Console<'_>) -> Result<Status, DriverError> {
    let files = input::load(&options.inputs)?;
    let run = Session::default()
        .parallel(options.parallel)
        .with_diagnostic_config(options.diagnostic_config())
        .run(&files)?;
    report(&run, &files, options, console);

    let status = Status::of(&run);
    if status == Status::Success {
        let _ = writeln!(
            console.out,
            "OK: {} file{}, {} result type{}",
            files.len(),
            if files.len() == 1 { "" } else { "s" },
            run.generated.len(),
            if run.generated.len() == 1 { "" } else { "s" },
        );
    }
    Ok(status)
}
