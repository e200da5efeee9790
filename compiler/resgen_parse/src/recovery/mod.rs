//! Error recovery and body skipping.
//!
//! The parser reads declarations in full but skips method bodies, accessor
//! lists, initializers and top-level statements. All skipping goes through
//! the delimiter-aware helpers here, so a `;` or `}` inside a nested group
//! never ends the skip early.

use resgen_ir::{Span, TokenKind};

use crate::{Cursor, ParseError};

#[inline]
fn is_open(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket
    )
}

#[inline]
fn is_close(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket
    )
}

fn delimiter_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LParen => "(",
        TokenKind::LBracket => "[",
        _ => "{",
    }
}

/// Skip a delimited group starting at the current opening token.
///
/// Returns the span from the opener through its closer. At end of input
/// the error points at the opener.
pub fn skip_balanced(cursor: &mut Cursor<'_>) -> Result<Span, ParseError> {
    let open = cursor.advance();
    debug_assert!(is_open(open.kind), "skip_balanced called on {:?}", open.kind);
    let mut depth = 1usize;
    loop {
        let kind = cursor.current_kind();
        if matches!(kind, TokenKind::Eof) {
            return Err(ParseError::unclosed(delimiter_text(open.kind), open.span));
        }
        cursor.advance();
        if is_open(kind) {
            depth += 1;
        } else if is_close(kind) {
            depth -= 1;
            if depth == 0 {
                return Ok(open.span.merge(cursor.previous_span()));
            }
        }
    }
}

/// How `skip_until_end` treats a closing brace at nesting depth zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlockEnd {
    /// A `{ ... }` group ends the construct (statements, member recovery).
    Terminates,
    /// Only `;` ends the construct (`=> expr;`, initializers).
    Continues,
}

/// Skip to the end of a statement-like construct.
///
/// Consumes through a `;` at depth zero, or a closing `}` per `block_end`.
/// Stops without consuming before a closer that belongs to an enclosing
/// group, or at end of input. Returns the span of what was skipped.
pub fn skip_until_end(cursor: &mut Cursor<'_>, block_end: BlockEnd) -> Span {
    let start = cursor.current_span();
    let begin = cursor.position();
    let mut depth = 0usize;
    loop {
        let kind = cursor.current_kind();
        match kind {
            TokenKind::Eof => break,
            TokenKind::Semicolon if depth == 0 => {
                cursor.advance();
                break;
            }
            _ if is_close(kind) && depth == 0 => break,
            _ => {}
        }
        cursor.advance();
        if is_open(kind) {
            depth += 1;
        } else if is_close(kind) {
            depth -= 1;
            if depth == 0 && kind == TokenKind::RBrace && block_end == BlockEnd::Terminates {
                break;
            }
        }
    }
    if cursor.position() == begin {
        Span::point(start.start)
    } else {
        start.merge(cursor.previous_span())
    }
}

/// Skip a value such as a parameter default or enum member initializer.
///
/// Stops without consuming before a `,` or `;` at depth zero, or before a
/// closer of an enclosing group.
pub fn skip_until_separator(cursor: &mut Cursor<'_>) -> Span {
    let start = cursor.current_span();
    let begin = cursor.position();
    let mut depth = 0usize;
    loop {
        let kind = cursor.current_kind();
        if matches!(kind, TokenKind::Eof)
            || (depth == 0 && (matches!(kind, TokenKind::Comma | TokenKind::Semicolon) || is_close(kind)))
        {
            break;
        }
        cursor.advance();
        if is_open(kind) {
            depth += 1;
        } else if is_close(kind) {
            depth -= 1;
        }
    }
    if cursor.position() == begin {
        Span::point(start.start)
    } else {
        start.merge(cursor.previous_span())
    }
}

/// Advance until `stop` matches the current token or input ends.
///
/// Returns `true` when a stop token was found.
pub fn synchronize(cursor: &mut Cursor<'_>, stop: impl Fn(TokenKind) -> bool) -> bool {
    while !cursor.is_at_end() {
        if stop(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}
