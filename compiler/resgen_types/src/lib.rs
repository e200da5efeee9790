//! Type resolution for resgen.
//!
//! Variant parameters name C# types (`Value<Person>`, `Items<List<int>?>`).
//! This crate answers what such a name means at the marked method: its fully
//! qualified display, whether it is a reference or value type, and whether it
//! is `System.Nullable<T>`.
//!
//! - [`TypeTable`]: every type the compilation can see. Predefined types and
//!   common `System` types are built in; declared types come from parsed
//!   files, with partial declarations merged.
//! - [`Scope`]: what is visible at one point in a file: type parameters,
//!   containing types, enclosing namespaces and their `using` directives.
//! - [`TypeResolver`]: the seam the analysis resolves through, implemented
//!   over the table by [`TableResolver`].
//! - [`walk_types`]: visits every type declaration of a file with the scope
//!   inside it.

mod descriptor;
mod resolve;
mod scope;
mod table;
mod walk;
mod well_known;

pub use descriptor::{escape_identifier, TypeCategory, TypeDescriptor};
pub use resolve::{TableResolver, TypeResolver};
pub use scope::{Scope, TypeParamInfo};
pub use table::{SpecialType, TypeEntry, TypeId, TypeOrigin, TypeTable};
pub use walk::walk_types;
pub use well_known::IMPLICIT_USINGS;
