//! Result declaration analysis for resgen.
//!
//! Finds methods carrying the marker attribute, checks their result
//! declarations and builds a [`ResultTypeModel`](resgen_ir::ResultTypeModel)
//! for each:
//!
//! ```text
//! [ReturnsResult]
//! [result: Ok(Value<Person>), NotFound]
//! public partial GetPersonResult GetPerson(Guid id);
//! ```
//!
//! The stages, in order:
//!
//! - [`classify_ctor_args`]: which marker constructor applies
//! - [`is_valid_identifier`]: whether the type name can be emitted
//! - [`find_declarations`]: the `[result: ...]` lists
//! - variant parsing: `Name(param<Type>, ...)` entries
//! - [`resolve_parameter_type`]: value parameter types
//!
//! [`Analyzer`] runs them over a set of parsed files. Problems are reported
//! to a [`DiagnosticSink`](resgen_diagnostic::DiagnosticSink) and never stop
//! other methods from being analyzed.

mod analyze;
mod builder;
mod cancel;
mod collect;
mod context;
mod ctor;
mod identifier;
mod locate;
mod param_type;
mod partial;
mod report;
mod variant;

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use analyze::{Analyzer, GeneratedModel};
pub use cancel::{CancellationToken, Cancelled};
pub use collect::SourceUnit;
pub use context::AnalysisContext;
pub use ctor::{classify_ctor_args, CtorArgs};
pub use identifier::is_valid_identifier;
pub use locate::find_declarations;
pub use param_type::resolve_parameter_type;
