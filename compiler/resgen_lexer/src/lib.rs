//! Lexer for the C# subset read by resgen, using logos with string
//! interning.
//!
//! Comments, preprocessor lines and whitespace are trivia and never reach
//! the token list. Bad input becomes `TokenKind::Error` plus a `LexError`;
//! lexing always runs to the end and always ends with `Eof`.

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use resgen_ir::{Keyword, Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

use raw_token::RawToken;

/// Tokens and errors for one source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Span for a logos byte range; sources past `u32::MAX` are rejected by the
/// driver before lexing, so saturating is only a backstop.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::new(u32::MAX, u32::MAX))
}

/// Whether `text` is exactly one C# identifier: a letter or `_`, then
/// letters, digits, connectors, combining marks and format characters.
///
/// Keywords count (`class` passes); the verbatim `@` prefix does not.
pub fn is_identifier(text: &str) -> bool {
    let mut logos = RawToken::lexer(text);
    matches!(logos.next(), Some(Ok(RawToken::Ident))) && logos.span() == (0..text.len())
}

/// Lex source code into a token list.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 4),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = span_of(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(raw) => match convert_token(raw, slice, interner) {
                Converted::Trivia => continue,
                Converted::Token(kind) => kind,
                Converted::Error(kind) => {
                    output.errors.push(LexError::new(span, kind));
                    TokenKind::Error
                }
            },
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\0');
                output
                    .errors
                    .push(LexError::new(span, LexErrorKind::InvalidCharacter(c)));
                TokenKind::Error
            }
        };
        output.tokens.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    output.tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));

    tracing::trace!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

enum Converted {
    Trivia,
    Token(TokenKind),
    Error(LexErrorKind),
}

/// Whether a raw string literal has its closing quotes.
fn raw_string_terminated(slice: &str) -> bool {
    let literal = slice.trim_start_matches('$');
    let quotes = literal.bytes().take_while(|&b| b == b'"').count();
    literal.len() >= 2 * quotes
        && literal.bytes().rev().take_while(|&b| b == b'"').count() >= quotes
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Converted {
    let kind = match raw {
        RawToken::LineComment | RawToken::Preprocessor => return Converted::Trivia,
        RawToken::BlockComment => {
            return if slice.len() >= 4 && slice.ends_with("*/") {
                Converted::Trivia
            } else {
                Converted::Error(LexErrorKind::UnterminatedComment)
            };
        }

        RawToken::Ident => match Keyword::from_text(slice) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(interner.intern(slice)),
        },
        RawToken::VerbatimIdent => TokenKind::Ident(interner.intern(&slice[1..])),

        RawToken::Number => TokenKind::Number(interner.intern(slice)),

        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&escape::unescape_regular(body)))
        }
        RawToken::VerbatimString => {
            let body = &slice[2..slice.len() - 1];
            TokenKind::String(interner.intern(&escape::unescape_verbatim(body)))
        }
        RawToken::RawString => {
            if !raw_string_terminated(slice) {
                return Converted::Error(LexErrorKind::UnterminatedString);
            }
            TokenKind::String(interner.intern(&escape::cook_raw(slice)))
        }
        RawToken::InterpolatedString => {
            let is_raw = slice.trim_start_matches('$').starts_with("\"\"\"");
            if is_raw && !raw_string_terminated(slice) {
                return Converted::Error(LexErrorKind::UnterminatedString);
            }
            TokenKind::InterpolatedString
        }
        RawToken::UnterminatedString
        | RawToken::UnterminatedVerbatimString
        | RawToken::UnterminatedInterpolatedString => {
            return Converted::Error(LexErrorKind::UnterminatedString)
        }

        RawToken::Char => TokenKind::Char(escape::unescape_char(&slice[1..slice.len() - 1])),
        RawToken::UnterminatedChar => return Converted::Error(LexErrorKind::UnterminatedChar),

        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::ColonColon => TokenKind::ColonColon,
        RawToken::Question => TokenKind::Question,
        RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
        RawToken::QuestionDot => TokenKind::QuestionDot,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::CompoundAssign => TokenKind::CompoundAssign,
    };
    Converted::Token(kind)
}

#[cfg(test)]
mod tests;
