//! Diagnostics for the resgen result-type generator.
//!
//! Every diagnostic carries:
//! - A stable code (`RESGEN0001`...) for searchability and `--explain`
//! - A message saying what went wrong
//! - A primary span saying where
//! - Optional notes, help lines and structured fixes
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is type-level proof that at least one error was
//! emitted, so a phase cannot fail without reporting why.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;
pub mod sink;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
pub use error_code::{Category, ErrorCode};
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::{CollectingSink, DiagnosticSink};
pub use span_utils::LineOffsetTable;
