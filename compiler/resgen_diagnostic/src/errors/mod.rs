//! Embedded error documentation for `--explain` support.
//!
//! Each result-declaration code has a markdown file that explains the
//! problem, shows an example, and gives the fix. The files are embedded at
//! compile time.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown documentation for `code`, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// All documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::SpecifyResultDeclaration, include_str!("RESGEN0001.md")),
    (ErrorCode::TooManyResultDeclarations, include_str!("RESGEN0002.md")),
    (ErrorCode::InvalidResultTypeName, include_str!("RESGEN0003.md")),
    (ErrorCode::InvalidAttributeCtor, include_str!("RESGEN0004.md")),
    (ErrorCode::CanBeInlined, include_str!("RESGEN0005.md")),
    (ErrorCode::BadValueSyntax, include_str!("RESGEN0006.md")),
    (ErrorCode::BadValueParameterSyntax, include_str!("RESGEN0007.md")),
    (ErrorCode::TooManyValueParameterTypes, include_str!("RESGEN0008.md")),
    (ErrorCode::UnknownType, include_str!("RESGEN0009.md")),
    (ErrorCode::IgnoredResultDeclaration, include_str!("RESGEN0010.md")),
];
