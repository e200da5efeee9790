//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`unit`]: compilation units, using directives and namespaces
//! - [`decl`]: type declarations, modifiers, type parameters, constraints
//! - [`member`]: members of a type body and parameter lists
//! - [`attr`]: attribute lists, including target specifiers
//! - [`ty`]: types and names, with speculative generic arguments
//! - [`expr`]: expressions allowed as attribute arguments
//!
//! Productions return `Result<_, ParseError>` and never record errors
//! themselves; the list parsers (`unit`, type bodies, attribute lists)
//! record the error and resynchronize, so one broken member costs one
//! diagnostic.

mod attr;
mod decl;
mod expr;
mod member;
mod ty;
mod unit;

use resgen_ir::{Keyword, TokenKind};

use crate::recovery::{self, BlockEnd};
use crate::Parser;

impl Parser<'_> {
    /// Skip past a member or declaration that failed to parse.
    ///
    /// Stray `)` and `]` left over from a broken parameter or attribute list
    /// are consumed too, so the next member starts on a fresh token.
    pub(crate) fn recover_to_member_end(&mut self) {
        loop {
            recovery::skip_until_end(&mut self.cursor, BlockEnd::Terminates);
            if matches!(
                self.cursor.current_kind(),
                TokenKind::RParen | TokenKind::RBracket
            ) {
                self.cursor.advance();
                continue;
            }
            break;
        }
    }

    /// Whether the current token can follow a modifier-like contextual
    /// keyword, making it a modifier rather than a type or member name.
    fn starts_declaration_after(&self, offset: usize) -> bool {
        match self.cursor.peek_kind_at(offset) {
            TokenKind::Ident(_) => true,
            TokenKind::Keyword(kw) => !matches!(kw, Keyword::Operator | Keyword::This),
            _ => false,
        }
    }
}
