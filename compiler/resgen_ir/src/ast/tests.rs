use super::*;
use crate::{PredefinedType, StringInterner};

fn ident(interner: &StringInterner, text: &str, start: u32) -> Ident {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "test identifiers are short"
    )]
    let end = start + text.len() as u32;
    Ident::new(interner.intern(text), Span::new(start, end))
}

fn int_type(start: u32) -> TypeSyntax {
    TypeSyntax {
        kind: TypeKind::Predefined(PredefinedType::Int),
        span: Span::new(start, start + 3),
    }
}

#[test]
fn last_ident_of_qualified_generic_name() {
    let interner = StringInterner::new();
    // N.Value<int>
    let left = NameSyntax::simple(ident(&interner, "N", 0));
    let right = NameSyntax {
        kind: NameKind::Generic {
            ident: ident(&interner, "Value", 2),
            type_args: TypeArgumentList {
                args: vec![int_type(8)],
                span: Span::new(7, 12),
            },
        },
        span: Span::new(2, 12),
    };
    let name = NameSyntax {
        kind: NameKind::Qualified {
            left: Box::new(left),
            right: Box::new(right),
        },
        span: Span::new(0, 12),
    };

    assert_eq!(interner.lookup(name.last_ident().name), "Value");
    assert_eq!(name.as_simple(), None);
    assert_eq!(name.type_args().map(|list| list.args.len()), Some(1));
}

#[test]
fn simple_name_has_no_type_args() {
    let interner = StringInterner::new();
    let name = NameSyntax::simple(ident(&interner, "NotFound", 10));
    assert_eq!(name.span, Span::new(10, 18));
    assert!(name.type_args().is_none());
    assert!(name.as_simple().is_some());
}

#[test]
fn attribute_list_target() {
    let interner = StringInterner::new();
    let result = interner.intern("result");
    let list = AttributeList {
        target: Some(AttributeTarget {
            name: result,
            span: Span::new(1, 7),
        }),
        attributes: Vec::new(),
        span: Span::new(0, 12),
    };
    assert!(list.has_target(result));
    assert!(!list.has_target(interner.intern("return")));

    let untargeted = AttributeList {
        target: None,
        ..list
    };
    assert!(!untargeted.has_target(result));
}

#[test]
fn attribute_without_argument_list_has_no_arguments() {
    let interner = StringInterner::new();
    let attr = Attribute {
        name: NameSyntax::simple(ident(&interner, "NotFound", 0)),
        args: None,
        span: Span::new(0, 8),
    };
    assert!(attr.arguments().is_empty());
}

#[test]
fn nullable_type_syntax() {
    let nullable = TypeSyntax {
        kind: TypeKind::Nullable(Box::new(int_type(0))),
        span: Span::new(0, 4),
    };
    assert!(nullable.is_nullable());
    assert!(!int_type(0).is_nullable());
}

#[test]
fn reference_kinds_of_declarations() {
    assert!(TypeDeclKind::Class.is_reference_type());
    assert!(TypeDeclKind::Record.is_reference_type());
    assert!(TypeDeclKind::Delegate.is_reference_type());
    assert!(!TypeDeclKind::Struct.is_reference_type());
    assert!(!TypeDeclKind::RecordStruct.is_reference_type());
    assert!(!TypeDeclKind::Enum.is_reference_type());
}

#[test]
fn modifiers_combine() {
    let mods = Modifiers::PUBLIC | Modifiers::PARTIAL;
    assert!(mods.contains(Modifiers::PARTIAL));
    assert!(!mods.contains(Modifiers::STATIC));
}

#[test]
fn binary_precedence_orders_operators() {
    assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() > BinaryOp::Coalesce.precedence());
    assert!(BinaryOp::Coalesce.is_right_assoc());
}
