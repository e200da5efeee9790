//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! The cursor never moves past the trailing `Eof` token, so loops that
//! check `is_at_end` always terminate.

use resgen_ir::ast::Ident;
use resgen_ir::{Keyword, Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Returned for reads past the end of a token list that lacks `Eof`.
const EOF: Token = Token::new(TokenKind::Eof, Span::DUMMY);

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    source: &'a str,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, source: &'a str, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            source,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current position in the token stream.
    ///
    /// Used for progress tracking and, together with `set_position`, for
    /// speculative parsing.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll the cursor back to a position returned by `position`.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len().saturating_sub(1));
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Kind of the token `offset` positions ahead (0 is current).
    pub fn peek_kind_at(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Span of the token `offset` positions ahead (0 is current).
    pub fn peek_span_at(&self, offset: usize) -> Span {
        self.tokens
            .get(self.pos + offset)
            .map_or(Span::DUMMY, |t| t.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    /// Whether the current token is the contextual keyword `name`.
    ///
    /// `@partial` is an ordinary identifier, never the keyword.
    pub fn check_contextual(&self, name: Name) -> bool {
        self.is_contextual_at(0, name)
    }

    /// Contextual keyword check `offset` tokens ahead.
    pub fn is_contextual_at(&self, offset: usize, name: Name) -> bool {
        match self.tokens.get(self.pos + offset) {
            Some(token) => token.kind == TokenKind::Ident(name) && !self.is_verbatim(token.span),
            None => false,
        }
    }

    /// Whether the token at `span` was written with an `@` prefix.
    pub fn is_verbatim(&self, span: Span) -> bool {
        self.source.as_bytes().get(span.start as usize) == Some(&b'@')
    }

    /// Advance to the next token, returning the one consumed.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(pos = self.pos, kind = ?token.kind, "advance");
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token when it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, kw: Keyword) -> bool {
        self.eat(TokenKind::Keyword(kw))
    }

    /// Consume the current token as an identifier.
    pub fn eat_ident(&mut self) -> Option<Ident> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Some(Ident {
                    name,
                    span,
                    verbatim: self.is_verbatim(span),
                })
            }
            _ => None,
        }
    }

    /// Whether two adjacent tokens touch with no trivia between them.
    pub fn is_adjacent(&self, offset: usize) -> bool {
        self.peek_span_at(offset).end == self.peek_span_at(offset + 1).start
    }
}
