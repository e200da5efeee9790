//! C# code generation for resgen.
//!
//! Turns a [`ResultTypeModel`](resgen_ir::ResultTypeModel) into the source of
//! a tagged-union struct:
//!
//! ```text
//! ResultTypeModel
//!        ↓
//!     render      (header, fields, ctor, factories, Is*, TryAs*, ToString)
//!        ↓
//!  "{Name}.g.cs"
//! ```
//!
//! Rendering is pure. Callers that want memoization key it on the model.

mod render;
mod writer;

pub use render::{file_name, render};
pub use writer::CodeWriter;
