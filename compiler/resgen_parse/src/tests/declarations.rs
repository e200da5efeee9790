use pretty_assertions::assert_eq;
use resgen_ir::ast::{
    Constraint, MemberKind, MethodBody, Modifiers, NamespaceMember, RefKind, TypeDeclKind,
    TypeKind, UsingKind,
};

use super::{all_types, method, TestCtx};

const SERVICE: &str = r#"
using System;
using static System.Math;
global using Json = System.Text.Json.JsonSerializer;

[assembly: InternalsVisibleTo("Tests")]

namespace App.Services
{
    public partial class PersonService : BaseService, IPersonService
    {
        private readonly int _count = 0, _other;

        public PersonService(int count) : base(count) { _count = count; }

        [ReturnsResult]
        [result: Ok(Value<Person>), NotFound]
        public partial GetPersonResult GetPerson(int id, string? name = null);

        public string Name { get; set; } = "x";

        public int this[int i] => i;

        public static PersonService operator +(PersonService a, PersonService b) => a;

        public static implicit operator int(PersonService s) => 0;

        public event EventHandler? Changed;

        ~PersonService() { }

        T IPersonService.Find<T>(T value) where T : class, new() => value;

        private enum Kind : byte { A = 1, [Obsolete] B, }

        public record Person(int Id, string Name);
    }
}
"#;

#[test]
fn test_service_file() {
    let ctx = TestCtx::new(SERVICE);
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let unit = &output.unit;

    assert_eq!(unit.usings.len(), 3);
    assert!(matches!(unit.usings[0].kind, UsingKind::Namespace(_)));
    assert!(matches!(unit.usings[1].kind, UsingKind::Static(_)));
    assert!(unit.usings[2].is_global);
    let UsingKind::Alias { alias, .. } = &unit.usings[2].kind else {
        panic!("expected alias using");
    };
    assert_eq!(ctx.name(alias.name), "Json");
    assert_eq!(unit.attributes.len(), 1);

    let NamespaceMember::Namespace(ns) = &unit.members[0] else {
        panic!("expected namespace");
    };
    assert_eq!(ctx.text(ns.name.span), "App.Services");
    assert!(!ns.file_scoped);

    let NamespaceMember::Type(service) = &ns.members[0] else {
        panic!("expected type");
    };
    assert_eq!(ctx.name(service.name.name), "PersonService");
    assert_eq!(service.kind, TypeDeclKind::Class);
    assert_eq!(service.modifiers, Modifiers::PUBLIC | Modifiers::PARTIAL);

    let kinds: Vec<&str> = service
        .members
        .iter()
        .map(|m| match &m.kind {
            MemberKind::Method(_) => "method",
            MemberKind::Constructor(_) => "ctor",
            MemberKind::Destructor(_) => "dtor",
            MemberKind::Operator => "operator",
            MemberKind::Conversion => "conversion",
            MemberKind::Property(_) => "property",
            MemberKind::Indexer => "indexer",
            MemberKind::Field(_) => "field",
            MemberKind::Event(_) => "event",
            MemberKind::EnumMember(_) => "enum member",
            MemberKind::Type(_) => "type",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "field",
            "ctor",
            "method",
            "property",
            "indexer",
            "operator",
            "conversion",
            "event",
            "dtor",
            "method",
            "type",
            "type",
        ]
    );

    let MemberKind::Field(fields) = &service.members[0].kind else {
        panic!("expected field");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(ctx.name(fields[1].name), "_other");
}

#[test]
fn test_marked_partial_method() {
    let ctx = TestCtx::new(SERVICE);
    let output = ctx.parse();
    let service = all_types(&output.unit.members)[0];
    let member = &service.members[2];

    assert_eq!(member.attributes.len(), 2);
    assert_eq!(ctx.text(member.attributes[1].span), "[result: Ok(Value<Person>), NotFound]");
    assert_eq!(member.modifiers, Modifiers::PUBLIC | Modifiers::PARTIAL);
    assert!(ctx.text(member.span).starts_with("[ReturnsResult]"));
    assert!(ctx.text(member.span).ends_with("name = null);"));

    let get_person = method(member);
    assert_eq!(ctx.name(get_person.name.name), "GetPerson");
    assert_eq!(ctx.text(get_person.return_type.span), "GetPersonResult");
    assert!(get_person.body.is_none());
    assert!(get_person.explicit_interface.is_none());
    assert_eq!(get_person.params.len(), 2);
    let name = &get_person.params[1];
    assert!(name.ty.is_nullable());
    assert!(name.has_default);
    assert_eq!(ctx.text(name.span), "string? name = null");
}

#[test]
fn test_explicit_interface_generic_method() {
    let ctx = TestCtx::new(SERVICE);
    let output = ctx.parse();
    let service = all_types(&output.unit.members)[0];
    let find = method(&service.members[9]);

    assert_eq!(ctx.name(find.name.name), "Find");
    let iface = find.explicit_interface.as_ref().unwrap();
    assert_eq!(ctx.text(iface.span), "IPersonService");
    assert_eq!(find.type_params.len(), 1);
    assert_eq!(find.constraints.len(), 1);
    assert_eq!(
        find.constraints[0].constraints,
        vec![Constraint::Class, Constraint::New]
    );
    let MethodBody::Expression(body) = find.body else {
        panic!("expected expression body");
    };
    assert_eq!(ctx.text(body), "value;");
}

#[test]
fn test_nested_enum_and_record() {
    let ctx = TestCtx::new(SERVICE);
    let output = ctx.parse();
    let types = all_types(&output.unit.members);
    assert_eq!(types.len(), 3);

    let kind = types[1];
    assert_eq!(kind.kind, TypeDeclKind::Enum);
    let names: Vec<&str> = kind
        .members
        .iter()
        .map(|m| match &m.kind {
            MemberKind::EnumMember(ident) => ctx.name(ident.name),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(kind.members[1].attributes.len(), 1);

    let person = types[2];
    assert_eq!(person.kind, TypeDeclKind::Record);
    assert!(person.members.is_empty());
}

#[test]
fn test_file_scoped_namespace_and_top_level_statements() {
    let ctx = TestCtx::new(
        r#"
using System;
Console.WriteLine("hi");
if (args.Length > 0) { return; }
static int Local() => 1;

namespace App;

using App.Models;

internal sealed class A { }
public struct B { }
"#,
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.unit.usings.len(), 1);
    assert_eq!(output.unit.members.len(), 1);
    let NamespaceMember::Namespace(ns) = &output.unit.members[0] else {
        panic!("expected namespace");
    };
    assert!(ns.file_scoped);
    assert_eq!(ns.usings.len(), 1);
    let kinds: Vec<_> = all_types(&ns.members).iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TypeDeclKind::Class, TypeDeclKind::Struct]);
}

#[test]
fn test_type_kinds() {
    let ctx = TestCtx::new(
        "interface I { } record struct P(int X); record class Q; \
         readonly ref struct S { } delegate R D<T>(T value) where T : notnull;",
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let types = all_types(&output.unit.members);
    let kinds: Vec<_> = types.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TypeDeclKind::Interface,
            TypeDeclKind::RecordStruct,
            TypeDeclKind::Record,
            TypeDeclKind::Struct,
            TypeDeclKind::Delegate,
        ]
    );
    assert_eq!(types[3].modifiers, Modifiers::READONLY | Modifiers::REF);
    assert_eq!(types[4].constraints[0].constraints, vec![Constraint::NotNull]);
}

#[test]
fn test_generic_class_with_constraints() {
    let ctx = TestCtx::new(
        "class Repo<[Marker] in TKey, out TValue> where TKey : struct where TValue : IEntity<TKey>, new() { }",
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let repo = all_types(&output.unit.members)[0];
    assert_eq!(repo.type_params.len(), 2);
    assert_eq!(repo.type_params[0].attributes.len(), 1);
    assert_eq!(repo.constraints.len(), 2);
    assert_eq!(repo.constraints[0].constraints, vec![Constraint::Struct]);
    assert!(matches!(
        repo.constraints[1].constraints[0],
        Constraint::Type(_)
    ));
}

#[test]
fn test_method_shapes() {
    let ctx = TestCtx::new(
        r#"
static class Ext
{
    public static async Task<R> RunAsync(this string s, ref int a, out int b, in int c, params object[] rest) { await Task.Yield(); return default; }
    R IFoo<int>.Get() => default;
    R global::App.IBar.Get() => default;
    public R @class<T>([FromBody] T body) where T : unmanaged { }
    public ref readonly int Peek(ref readonly int x) => ref x;
}
"#,
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let ext = all_types(&output.unit.members)[0];

    let run = method(&ext.members[0]);
    assert!(ext.members[0].modifiers.contains(Modifiers::ASYNC | Modifiers::STATIC));
    assert!(matches!(run.body, MethodBody::Block(_)));
    let refs: Vec<_> = run.params.iter().map(|p| p.ref_kind).collect();
    assert_eq!(
        refs,
        vec![
            RefKind::None,
            RefKind::Ref,
            RefKind::Out,
            RefKind::In,
            RefKind::None
        ]
    );
    assert!(run.params[0].is_this);
    assert!(run.params[4].is_params);
    assert!(matches!(run.params[4].ty.kind, TypeKind::Array { .. }));

    let get = method(&ext.members[1]);
    assert_eq!(ctx.text(get.explicit_interface.as_ref().unwrap().span), "IFoo<int>");

    let bar = method(&ext.members[2]);
    assert_eq!(
        ctx.text(bar.explicit_interface.as_ref().unwrap().span),
        "global::App.IBar"
    );

    let verbatim = method(&ext.members[3]);
    assert!(verbatim.name.verbatim);
    assert_eq!(ctx.name(verbatim.name.name), "class");
    assert_eq!(verbatim.params[0].attributes.len(), 1);
    assert_eq!(verbatim.constraints[0].constraints, vec![Constraint::Unmanaged]);

    let peek = method(&ext.members[4]);
    assert!(ext.members[4].modifiers.contains(Modifiers::REF | Modifiers::READONLY));
    assert_eq!(peek.params[0].ref_kind, RefKind::RefReadonly);
}

#[test]
fn test_partial_method_halves() {
    let ctx = TestCtx::new(
        r"
partial class C
{
    [ReturnsResult]
    public partial R M(int x);
    public partial R M(int x) { return default; }
}
",
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let c = all_types(&output.unit.members)[0];
    assert_eq!(c.members.len(), 2);
    assert!(method(&c.members[0]).body.is_none());
    assert!(!method(&c.members[1]).body.is_none());
    assert!(c.members[1].attributes.is_empty());
}

#[test]
fn test_contextual_words_as_names() {
    let ctx = TestCtx::new(
        "class partial { int record; partial M() => default; string where => \"\"; }",
    );
    let output = ctx.parse();
    assert!(!output.has_errors(), "{:?}", output.errors);
    let decl = all_types(&output.unit.members)[0];
    assert_eq!(ctx.name(decl.name.name), "partial");
    assert!(matches!(decl.members[0].kind, MemberKind::Field(_)));
    assert!(matches!(decl.members[2].kind, MemberKind::Property(_)));
}

#[test]
fn test_empty_source() {
    let ctx = TestCtx::new("");
    let output = ctx.parse();
    assert!(!output.has_errors());
    assert!(output.unit.members.is_empty());
    assert_eq!(output.unit.span.end, 0);
}
