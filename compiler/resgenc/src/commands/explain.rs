//! The `explain` command: display documentation for diagnostic codes.


use resgen_diagnostic::{ErrorCode, ErrorDocs};

use super::{Console, Status};

/// Print the documentation of `code_str`, e.g. `RESGEN0003`.
pub fn explain(code_str: &str, console: &mut Console<'_>) -> Status {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(console.err, "Unknown diagnostic code: {code_str}");
        let _ = writeln!(console.err);
        let _ = writeln!(
            console.err,
            "Codes have the format RESGENXXXX where X is a digit, e.g. RESGEN0001 or RESGEN1004."
        );
        return Status::Failure;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(console.out, "{doc}");
        Status::Success
    } else {
        let _ = writeln!(console.err, "No documentation available for {}", code.as_str());
        let _ = writeln!(console.err);
        let _ = writeln!(console.err, "{}: {}", code.as_str(), code.title());
        Status::Failure
    }
}
