//! resgen IR: data shared by every phase of the result generator.
//!
//! - Spans and file ids for source locations
//! - Names for interned identifiers and literal values
//! - Tokens and `TokenList` for lexer output
//! - The C# syntax tree produced by the parser
//! - The result-type model consumed by the renderer

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod file_id;
mod interner;
mod model;
mod name;
mod span;
mod token;

pub use file_id::FileId;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use model::{ParameterTypeModel, ResultTypeModel, ResultValueModel, ValueParameterModel};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Keyword, PredefinedType, Token, TokenKind, TokenList};
