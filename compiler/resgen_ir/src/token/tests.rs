use super::*;

#[test]
fn keyword_round_trips_through_text() {
    for &kw in Keyword::ALL {
        assert_eq!(Keyword::from_text(kw.as_str()), Some(kw));
    }
    assert_eq!(Keyword::ALL.len(), 77);
}

#[test]
fn contextual_keywords_are_not_reserved() {
    for text in ["partial", "record", "global", "where", "var", "nameof", "result"] {
        assert_eq!(Keyword::from_text(text), None, "{text}");
    }
}

#[test]
fn predefined_types_map_to_system_names() {
    assert_eq!(
        Keyword::Int.predefined_type(),
        Some(PredefinedType::Int)
    );
    assert_eq!(PredefinedType::Int.system_name(), "Int32");
    assert_eq!(PredefinedType::Float.system_name(), "Single");
    assert_eq!(
        PredefinedType::from_system_name("Boolean"),
        Some(PredefinedType::Bool)
    );
    assert_eq!(PredefinedType::from_system_name("Guid"), None);
    assert_eq!(Keyword::Class.predefined_type(), None);
}

#[test]
fn only_object_and_string_are_reference_types() {
    let reference: Vec<_> = PredefinedType::ALL
        .iter()
        .filter(|ty| ty.is_reference_type())
        .map(|ty| ty.keyword())
        .collect();
    assert_eq!(reference, vec!["object", "string"]);
}

#[test]
fn token_list_keeps_order() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::LBracket, Span::new(0, 1)));
    list.push(Token::new(TokenKind::Eof, Span::point(1)));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).map(|t| t.kind), Some(TokenKind::LBracket));
    let kinds: Vec<_> = list.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::LBracket, TokenKind::Eof]);
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Keyword(Keyword::Class).display_name(), "class");
    assert_eq!(TokenKind::Gt.display_name(), "`>`");
    assert!(TokenKind::Keyword(Keyword::Void).is_keyword(Keyword::Void));
}
