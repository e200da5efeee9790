//! Lexer error types.
//!
//! The lexer never stops at bad input: it records a `LexError`, emits a
//! `TokenKind::Error` token and keeps going.

use resgen_diagnostic::{Diagnostic, ErrorCode};
use resgen_ir::Span;

/// A lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing quote(s) on a string literal.
    UnterminatedString,
    /// Missing closing `'` on a character literal.
    UnterminatedChar,
    /// `/*` without `*/`.
    UnterminatedComment,
    /// A character that starts no token.
    InvalidCharacter(char),
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::UnterminatedString,
            LexErrorKind::UnterminatedChar => ErrorCode::UnterminatedChar,
            LexErrorKind::UnterminatedComment => ErrorCode::UnterminatedComment,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::InvalidCharacter,
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedChar => "unterminated character literal".to_string(),
            LexErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
            LexErrorKind::InvalidCharacter(c) => {
                format!("unexpected character `{}`", c.escape_default())
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, help) = match self.kind {
            LexErrorKind::UnterminatedString => {
                ("string starts here", Some("add the closing quote"))
            }
            LexErrorKind::UnterminatedChar => ("character starts here", Some("add a closing `'`")),
            LexErrorKind::UnterminatedComment => ("comment starts here", Some("add `*/`")),
            LexErrorKind::InvalidCharacter(_) => ("not valid here", None),
        };

        let label_span = match self.kind {
            LexErrorKind::InvalidCharacter(_) => self.span,
            _ => Span::new(self.span.start, self.span.start.saturating_add(1).min(self.span.end)),
        };

        let diag = Diagnostic::from_code(self.code())
            .with_message(self.message())
            .with_label(label_span, label);
        match help {
            Some(help) => diag.with_suggestion(help),
            None => diag,
        }
    }
}
