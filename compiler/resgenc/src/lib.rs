//! resgen driver: result types for C# methods marked `[ReturnsResult]`.
//!
//! # Architecture
//!
//! ```text
//! inputs ──► input::load ──► Vec<SourceFile>
//!                                 │
//!                                 ▼
//!                          Session::run ──► RunOutput { generated, diagnostics }
//!                                 │                        │
//!                                 ▼                        ▼
//!                     Session::publish              commands::report
//!                                 │
//!                                 ▼
//!          SourceOutput (DirectoryOutput | CheckOutput | MemoryOutput)
//! ```
//!
//! The per-file front end and the per-method analysis run on a rayon pool;
//! rendered text is shared through a [`RenderCache`] that outlives a run.

mod cache;
pub mod commands;
mod error;
pub mod input;
pub mod options;
pub mod output;
pub mod pipeline;
mod tracing_setup;

pub use cache::RenderCache;
pub use error::DriverError;
pub use input::SourceFile;
pub use options::{GenerateOptions, OutputFormat};
pub use output::{CheckOutput, DirectoryOutput, MemoryOutput, SourceOutput};
pub use pipeline::{GeneratedSource, RunOutput, Session};
pub use tracing_setup::init_tracing;
