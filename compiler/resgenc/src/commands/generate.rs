//! The `generate` command: analyze sources and emit `{Name}.g.cs` files.


use tracing::info;

use crate::input;
use crate::options::GenerateOptions;
use crate::output::{CheckOutput, DirectoryOutput, MemoryOutput};
use crate::pipeline::Session;
use crate::DriverError;

use super::{report, Console, Status};

/// Generate result types for every marked method under `options.inputs`.
///
/// Result types that could be built are emitted even when other methods
/// have errors; the status still reports the failure. With `--check`,
/// nothing is written and out-of-date files fail the command.
pub fn generate(options: &GenerateOptions, console: &mut Console<'_>) -> Result<Status, DriverError> {
    let files = input::load(&options.inputs)?;
    let session = Session::default()
        .parallel(options.parallel)
        .with_diagnostic_config(options.diagnostic_config());
    let run = session.run(&files)?;
    report(&run, &files, options, console);
    let mut status = Status::of(&run);

    if options.check {
        let output = CheckOutput::new(&options.out_dir);
        session.publish(&run, &output)?;
        let stale = output.stale();
        for name in &stale {
            let _ = writeln!(
                console.out,
                "out of date: {}",
                options.out_dir.join(name).display()
            );
        }
        if !stale.is_empty() {
            status = Status::Failure;
        }
    } else if options.stdout {
        let output = MemoryOutput::new();
        session.publish(&run, &output)?;
        for (name, content) in output.into_sources() {
            let _ = writeln!(console.out, "// {name}");
            let _ = write!(console.out, "{content}");
        }
    } else {
        let output = DirectoryOutput::create(&options.out_dir)?;
        session.publish(&run, &output)?;
        let written = output.written().len();
        info!(written, dir = %output.dir().display(), "published");
        let _ = writeln!(
            console.out,
            "generated {} result type{} in '{}' ({written} changed)",
            run.generated.len(),
            if run.generated.len() == 1 { "" } else { "s" },
            output.dir().display()
        );
    }

    Ok(status)
}
