use pretty_assertions::assert_eq;
use proptest::prelude::*;
use resgen_ir::{Keyword, Name, Span, StringInterner, TokenKind};

use super::{is_identifier, lex, LexErrorKind};

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).tokens.iter().map(|t| t.kind).collect()
}

fn ident(interner: &StringInterner, text: &str) -> TokenKind {
    TokenKind::Ident(interner.intern(text))
}

fn string(interner: &StringInterner, text: &str) -> TokenKind {
    TokenKind::String(interner.intern(text))
}

#[test]
fn lexes_result_declaration() {
    let interner = StringInterner::new();
    let source = "[result: Ok(Value<Person>), NotFound]";
    assert_eq!(
        kinds(source, &interner),
        vec![
            TokenKind::LBracket,
            ident(&interner, "result"),
            TokenKind::Colon,
            ident(&interner, "Ok"),
            TokenKind::LParen,
            ident(&interner, "Value"),
            TokenKind::Lt,
            ident(&interner, "Person"),
            TokenKind::Gt,
            TokenKind::RParen,
            TokenKind::Comma,
            ident(&interner, "NotFound"),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_and_contextual_words() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("public partial class record string", &interner),
        vec![
            TokenKind::Keyword(Keyword::Public),
            ident(&interner, "partial"),
            TokenKind::Keyword(Keyword::Class),
            ident(&interner, "record"),
            TokenKind::Keyword(Keyword::String),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn verbatim_identifiers_drop_the_at() {
    let interner = StringInterner::new();
    let output = lex("@class @Foo", &interner);
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![ident(&interner, "class"), ident(&interner, "Foo"), TokenKind::Eof]
    );
    assert_eq!(output.tokens.as_slice()[0].span, Span::new(0, 6));
}

#[test]
fn unicode_identifiers() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("Größe _x1 ĀĒ", &interner),
        vec![
            ident(&interner, "Größe"),
            ident(&interner, "_x1"),
            ident(&interner, "ĀĒ"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn nested_generics_close_with_single_gt_tokens() {
    let interner = StringInterner::new();
    let kinds = kinds("List<List<int>>", &interner);
    assert_eq!(kinds[5], TokenKind::Gt);
    assert_eq!(kinds[6], TokenKind::Gt);
}

#[test]
fn string_literal_forms_are_cooked() {
    let interner = StringInterner::new();
    let source = r#""a\tb" @"C:\dir ""x""" """raw "q" text""""#;
    assert_eq!(
        kinds(source, &interner),
        vec![
            string(&interner, "a\tb"),
            string(&interner, "C:\\dir \"x\""),
            string(&interner, "raw \"q\" text"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multi_line_raw_string() {
    let interner = StringInterner::new();
    let source = "x = \"\"\"\n    Hello\n      World\n    \"\"\";";
    let kinds = kinds(source, &interner);
    assert_eq!(kinds[2], string(&interner, "Hello\n  World"));
    assert_eq!(kinds[3], TokenKind::Semicolon);
}

#[test]
fn interpolated_strings_are_opaque() {
    let interner = StringInterner::new();
    let source = r#"$"x={x}" $@"p\{y}" $$"""{{z}}""""#;
    assert_eq!(
        kinds(source, &interner),
        vec![
            TokenKind::InterpolatedString,
            TokenKind::InterpolatedString,
            TokenKind::InterpolatedString,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn chars_and_numbers() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds(r"'a' '\n' 42 3.5e-2f 0xFFu 0b1010 .5m", &interner),
        vec![
            TokenKind::Char('a'),
            TokenKind::Char('\n'),
            TokenKind::Number(interner.intern("42")),
            TokenKind::Number(interner.intern("3.5e-2f")),
            TokenKind::Number(interner.intern("0xFFu")),
            TokenKind::Number(interner.intern("0b1010")),
            TokenKind::Number(interner.intern(".5m")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn member_access_on_integer_is_not_a_real() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("1.ToString()", &interner)[..3].to_vec(),
        vec![
            TokenKind::Number(interner.intern("1")),
            TokenKind::Dot,
            ident(&interner, "ToString"),
        ]
    );
}

#[test]
fn trivia_is_skipped() {
    let interner = StringInterner::new();
    let source = "#nullable enable\n// line\n/// doc\n/* block\n */ x /**/ y\n#region R\n";
    assert_eq!(
        kinds(source, &interner),
        vec![ident(&interner, "x"), ident(&interner, "y"), TokenKind::Eof]
    );
}

#[test]
fn operators() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds(":: => ?? ?. += ??= <<= != <= >= << && ||", &interner),
        vec![
            TokenKind::ColonColon,
            TokenKind::FatArrow,
            TokenKind::QuestionQuestion,
            TokenKind::QuestionDot,
            TokenKind::CompoundAssign,
            TokenKind::CompoundAssign,
            TokenKind::CompoundAssign,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Shl,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_reports_and_continues() {
    let interner = StringInterner::new();
    let output = lex("a \"open\nb", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span, Span::new(2, 7));
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ident(&interner, "a"),
            TokenKind::Error,
            ident(&interner, "b"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_raw_string_and_comment() {
    let interner = StringInterner::new();
    let raw = lex("x \"\"\"never closed", &interner);
    assert_eq!(raw.errors[0].kind, LexErrorKind::UnterminatedString);

    let comment = lex("x /* never closed", &interner);
    assert_eq!(comment.errors.len(), 1);
    assert_eq!(comment.errors[0].kind, LexErrorKind::UnterminatedComment);
    assert_eq!(comment.errors[0].span, Span::new(2, 17));
}

#[test]
fn invalid_character() {
    let interner = StringInterner::new();
    let output = lex("a ` b", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter('`'));
    assert!(output.has_errors());
}

#[test]
fn eof_span_is_end_of_source() {
    let interner = StringInterner::new();
    let output = lex("abc  ", &interner);
    let last = output.tokens.iter().last().map(|t| (t.kind, t.span));
    assert_eq!(last, Some((TokenKind::Eof, Span::point(5))));
}

#[test]
fn empty_source_is_just_eof() {
    let interner = StringInterner::new();
    assert_eq!(kinds("", &interner), vec![TokenKind::Eof]);
    assert_eq!(kinds("\u{FEFF}", &interner), vec![TokenKind::Eof]);
}

proptest! {
    #[test]
    fn lexing_never_fails_and_spans_are_ordered(source in "\\PC{0,64}") {
        let interner = StringInterner::new();
        let output = lex(&source, &interner);
        let tokens = output.tokens.as_slice();

        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens[tokens.len() - 1].kind, TokenKind::Eof);

        let mut previous_end = 0u32;
        for token in tokens {
            prop_assert!(token.span.start >= previous_end);
            prop_assert!(token.span.end as usize <= source.len());
            previous_end = token.span.end;
        }
    }

    #[test]
    fn identifiers_lex_to_one_token(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        let interner = StringInterner::new();
        let tokens = lex(&name, &interner).tokens;
        prop_assert_eq!(tokens.len(), 2);
        let expected = match Keyword::from_text(&name) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(interner.intern(&name)),
        };
        prop_assert_eq!(tokens.as_slice()[0].kind, expected);
    }
}

#[test]
fn interned_names_are_shared() {
    let interner = StringInterner::new();
    let output = lex("Ok Ok", &interner);
    let names: Vec<Name> = output
        .tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(names[0], names[1]);
    assert_eq!(interner.lookup(names[0]), "Ok");
}

#[test]
fn identifier_shape() {
    assert!(is_identifier("GetPersonResult"));
    assert!(is_identifier("class"));
    assert!(is_identifier("_1"));
    assert!(!is_identifier("@class"));
    assert!(!is_identifier(" Foo"));
    assert!(!is_identifier("Foo "));
    assert!(!is_identifier("Foo.Bar"));
}
