//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! string cooking, keyword lookup and interning.

use logos::{Lexer, Logos};

/// Extend a raw string opening (`"""`, `$$"""`) through its closing quotes.
///
/// An unterminated raw string runs to the end of input; the converter
/// notices the missing closing quotes.
fn raw_string(lex: &mut Lexer<'_, RawToken>) -> bool {
    let quotes = lex.slice().bytes().rev().take_while(|&b| b == b'"').count();
    let closing = "\"".repeat(quotes);
    let rest = lex.remainder();
    match rest.find(&closing) {
        Some(pos) => lex.bump(pos + quotes),
        None => lex.bump(rest.len()),
    }
    true
}

/// Extend `/*` through the matching `*/`, or to the end of input.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(pos) => lex.bump(pos + 2),
        None => lex.bump(rest.len()),
    }
    true
}

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x0C\x{00A0}\x{FEFF}]+")]
pub(crate) enum RawToken {
    // Trivia
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,
    /// `#if`, `#region`, `#nullable`, ... to end of line.
    #[regex(r"#[^\n]*")]
    Preprocessor,

    // Identifiers and keywords (keywords are split off during conversion)
    #[regex(r"[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\p{Cf}]*")]
    Ident,
    #[regex(r"@[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\p{Cf}]*")]
    VerbatimIdent,

    // Numbers
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9][0-9_]*)?[uUlLfFdDmM]*")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?[fFdDmM]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[uUlL]*")]
    #[regex(r"0[bB][01_]+[uUlL]*")]
    Number,

    // Strings
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,
    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    UnterminatedString,
    #[regex(r#"@"([^"]|"")*""#)]
    VerbatimString,
    #[regex(r#"@"([^"]|"")*"#)]
    UnterminatedVerbatimString,
    #[regex(r#""""+"#, raw_string)]
    RawString,
    #[regex(r#"\$"([^"\\\n]|\\[^\n])*""#)]
    #[regex(r#"(\$@|@\$)"([^"]|"")*""#)]
    #[regex(r#"\$+"""+"#, raw_string)]
    InterpolatedString,
    #[regex(r#"\$"([^"\\\n]|\\[^\n])*"#)]
    #[regex(r#"(\$@|@\$)"([^"]|"")*"#)]
    UnterminatedInterpolatedString,

    #[regex(r"'([^'\\\n]|\\[^\n][^'\n]*)'")]
    Char,
    #[regex(r"'[^'\n]*")]
    UnterminatedChar,

    // Delimiters
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,

    // Operators
    #[token("?")]
    Question,
    #[token("??")]
    QuestionQuestion,
    #[token("?.")]
    QuestionDot,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    Arrow,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token("??=")]
    CompoundAssign,
}
