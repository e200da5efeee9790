//! Parse errors.

use resgen_diagnostic::{Diagnostic, ErrorCode};
use resgen_ir::{Span, Token};

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// What the parser was reading, e.g. "attribute list".
    pub context: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// `expected {what}, found {token}`.
    pub fn expected(code: ErrorCode, what: &str, found: Token) -> Self {
        ParseError::new(
            code,
            format!("expected {what}, found {}", found.kind.display_name()),
            found.span,
        )
    }

    /// Unexpected token where `what` was required.
    pub fn unexpected(what: &str, found: Token) -> Self {
        ParseError::expected(ErrorCode::UnexpectedToken, what, found)
    }

    /// Opening delimiter at `open` was never closed.
    pub fn unclosed(delimiter: &str, open: Span) -> Self {
        ParseError::new(
            ErrorCode::UnclosedDelimiter,
            format!("unclosed delimiter `{delimiter}`"),
            open,
        )
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::UnclosedDelimiter => "opened here",
            _ => "here",
        };
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        match &self.context {
            Some(context) => diag.with_note(format!("while parsing {context}")),
            None => diag,
        }
    }
}
