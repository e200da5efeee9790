//! Recursive descent parser for the C# subset read by resgen.
//!
//! The parser builds a full syntax tree for namespaces, type declarations,
//! member signatures and attributes, and skips everything else (method
//! bodies, accessor lists, initializers, enum member values, top-level
//! statements) with delimiter-aware recovery. It never panics on malformed
//! input: errors are collected and parsing continues at the next member.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{CompilationUnit, Ident};
use resgen_ir::{Name, Span, StringInterner, TokenKind, TokenList};

/// Result of parsing one file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutput {
    pub unit: CompilationUnit,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Contextual keywords, interned once per parse.
struct Contextual {
    partial: Name,
    record: Name,
    global: Name,
    where_: Name,
    file: Name,
    required: Name,
    async_: Name,
    scoped: Name,
    unmanaged: Name,
    notnull: Name,
    alias: Name,
    assembly: Name,
    module: Name,
}

impl Contextual {
    fn new(interner: &StringInterner) -> Self {
        Contextual {
            partial: interner.intern("partial"),
            record: interner.intern("record"),
            global: interner.intern("global"),
            where_: interner.intern("where"),
            file: interner.intern("file"),
            required: interner.intern("required"),
            async_: interner.intern("async"),
            scoped: interner.intern("scoped"),
            unmanaged: interner.intern("unmanaged"),
            notnull: interner.intern("notnull"),
            alias: interner.intern("alias"),
            assembly: interner.intern("assembly"),
            module: interner.intern("module"),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    names: Contextual,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source, interner),
            errors: Vec::new(),
            names: Contextual::new(interner),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_compilation_unit(mut self) -> ParseOutput {
        let unit = self.compilation_unit();
        ParseOutput {
            unit,
            errors: self.errors,
        }
    }

    fn error(&mut self, error: ParseError) {
        tracing::debug!(code = %error.code, message = %error.message, "parse error");
        self.errors.push(error);
    }

    /// Consume `kind` or fail with `expected {what}`.
    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Span, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().span)
        } else {
            Err(ParseError::unexpected(what, self.cursor.current()))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        self.cursor.eat_ident().ok_or_else(|| {
            ParseError::expected(
                ErrorCode::ExpectedIdentifier,
                "identifier",
                self.cursor.current(),
            )
        })
    }

    fn intern(&self, text: &str) -> Name {
        self.cursor.interner().intern(text)
    }
}

/// Parse a token list into a compilation unit.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, source: &str, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, source, interner).parse_compilation_unit()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
