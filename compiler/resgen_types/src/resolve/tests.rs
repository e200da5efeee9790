use pretty_assertions::assert_eq;
use resgen_ir::ast::{CompilationUnit, MemberKind};
use resgen_ir::StringInterner;

use super::*;
use crate::{walk_types, TypeParamInfo};

fn parse(source: &str, interner: &StringInterner) -> CompilationUnit {
    let tokens = resgen_lexer::lex(source, interner).tokens;
    let output = resgen_parse::parse(&tokens, source, interner);
    assert!(!output.has_errors(), "{:?}", output.errors);
    output.unit
}

/// Resolve the parameter types of every method named `Probe`.
fn probe(sources: &[&str]) -> Vec<Option<TypeDescriptor>> {
    let interner = StringInterner::new();
    let units: Vec<_> = sources.iter().map(|s| parse(s, &interner)).collect();
    let mut table = TypeTable::new();
    for unit in &units {
        table.add_unit(unit, &interner);
    }
    let resolver = TableResolver::new(&table, &interner);

    let mut resolved = Vec::new();
    for unit in &units {
        walk_types(unit, &table, &interner, |scope, decl| {
            for member in &decl.members {
                let MemberKind::Method(method) = &member.kind else {
                    continue;
                };
                if interner.lookup(method.name.name) != "Probe" {
                    continue;
                }
                let mut scope = scope.clone();
                scope.add_type_params(TypeParamInfo::from_decl(
                    &method.type_params,
                    &method.constraints,
                    &interner,
                ));
                resolved.extend(method.params.iter().map(|p| resolver.resolve(&p.ty, &scope)));
            }
        });
    }
    resolved
}

fn displays(resolved: &[Option<TypeDescriptor>]) -> Vec<&str> {
    resolved
        .iter()
        .map(|ty| ty.as_ref().map_or("<unresolved>", TypeDescriptor::display))
        .collect()
}

#[test]
fn test_predefined_and_system_types() {
    let resolved = probe(&[r"
class C
{
    void Probe(int a, string b, System.Guid c, Guid d, System.Int32 e, List<int> f,
        Dictionary<string, List<Guid>> g, object h, System.String i) { }
}
"]);
    assert_eq!(
        displays(&resolved),
        vec![
            "int",
            "string",
            "global::System.Guid",
            "global::System.Guid",
            "int",
            "global::System.Collections.Generic.List<int>",
            "global::System.Collections.Generic.Dictionary<string, global::System.Collections.Generic.List<global::System.Guid>>",
            "object",
            "string",
        ]
    );
    assert!(resolved[0].as_ref().unwrap().is_value_type());
    assert!(resolved[1].as_ref().unwrap().is_reference_type());
    assert!(resolved[5].as_ref().unwrap().is_reference_type());
}

#[test]
fn test_nullable_types() {
    let resolved = probe(&[r"
namespace App
{
    class Person { }
    struct Point { }

    class C
    {
        void Probe<T, U, V>(T? t, U? u, V? v, int? a, Nullable<Point> b, string? c, Person? d,
            Point? e, List<int?> f) where U : struct where V : class { }
    }
}
"]);
    assert_eq!(
        displays(&resolved),
        vec![
            "T",
            "U?",
            "V",
            "int?",
            "global::App.Point?",
            "string",
            "global::App.Person",
            "global::App.Point?",
            "global::System.Collections.Generic.List<int?>",
        ]
    );

    let underlying: Vec<_> = resolved
        .iter()
        .map(|ty| {
            ty.as_ref()
                .unwrap()
                .nullable_underlying()
                .map(TypeDescriptor::display)
        })
        .collect();
    assert_eq!(
        underlying,
        vec![
            None,
            Some("U"),
            None,
            Some("int"),
            Some("global::App.Point"),
            None,
            None,
            Some("global::App.Point"),
            None,
        ]
    );
    assert_eq!(resolved[0].as_ref().unwrap().category(), TypeCategory::Unconstrained);
    assert!(resolved[2].as_ref().unwrap().is_reference_type());
}

#[test]
fn test_arrays_and_tuples() {
    let resolved = probe(&[r"
namespace App
{
    class Person { }
    class C
    {
        void Probe((int Id, string Name) a, (int, Person) b, int[] c, string[,] d, int?[] e) { }
    }
}
"]);
    assert_eq!(
        displays(&resolved),
        vec![
            "(int Id, string Name)",
            "(int, global::App.Person)",
            "int[]",
            "string[,]",
            "int?[]",
        ]
    );
    assert!(resolved[0].as_ref().unwrap().is_value_type());
    assert!(resolved[2].as_ref().unwrap().is_reference_type());
}

#[test]
fn test_nested_types_and_generic_containers() {
    let resolved = probe(&[r"
namespace App.Models
{
    public class Outer<T>
    {
        public class Inner { }
        public enum Kind { A }

        void Probe(Inner a, Kind b, Outer<int>.Inner c, T d) { }
    }
}
"]);
    assert_eq!(
        displays(&resolved),
        vec![
            "global::App.Models.Outer<T>.Inner",
            "global::App.Models.Outer<T>.Kind",
            "global::App.Models.Outer<int>.Inner",
            "T",
        ]
    );
    assert!(resolved[1].as_ref().unwrap().is_value_type());
}

#[test]
fn test_using_directives_and_aliases() {
    let declarations = r"
namespace App.Models { public class Person { } }
namespace Other
{
    public class Person { }
    public class Widget { }
}
";
    let usage = r"
using App.Models;
using W = Other.Widget;
using Gen = System.Collections.Generic;

namespace App.Services
{
    using Other;

    class C
    {
        void Probe(Person a, W b, Gen::List<int> c, Gen.List<W> d, Widget e,
            global::App.Models.Person f) { }
    }
}
";
    let resolved = probe(&[declarations, usage]);
    assert_eq!(
        displays(&resolved),
        vec![
            "global::Other.Person",
            "global::Other.Widget",
            "global::System.Collections.Generic.List<int>",
            "global::System.Collections.Generic.List<global::Other.Widget>",
            "global::Other.Widget",
            "global::App.Models.Person",
        ]
    );
}

#[test]
fn test_global_usings_apply_to_every_file() {
    let globals = r"
global using App.Models;
global using Id = System.Guid;

namespace App.Models { public record Person; }
";
    let usage = "class C { void Probe(Person a, Id b) { } }";
    let resolved = probe(&[globals, usage]);
    assert_eq!(
        displays(&resolved),
        vec!["global::App.Models.Person", "global::System.Guid"]
    );
    assert!(resolved[0].as_ref().unwrap().is_reference_type());
}

#[test]
fn test_unresolved_types() {
    let resolved = probe(&[r"
class C
{
    void Probe(Missing a, List<Missing> b, int* c, Guid<int> d, System.Collections e,
        Nope::Thing f) { }
}
"]);
    assert!(resolved.iter().all(Option::is_none), "{resolved:?}");
    assert_eq!(resolved.len(), 6);
}

#[test]
fn test_type_parameters_shadow_types() {
    let resolved = probe(&["class Person { } class C<Person> { void Probe(Person a) { } }"]);
    assert_eq!(displays(&resolved), vec!["Person"]);
    assert_eq!(resolved[0].as_ref().unwrap().category(), TypeCategory::Unconstrained);
}

#[test]
fn test_keyword_names_are_escaped() {
    let resolved = probe(&[r"
namespace App
{
    class @class { }
    class C { void Probe(@class a, dynamic b, nint c) { } }
}
"]);
    assert_eq!(
        displays(&resolved),
        vec!["global::App.@class", "dynamic", "nint"]
    );
}

#[test]
fn test_resolve_attribute_names() {
    let interner = StringInterner::new();
    let unit = parse(
        r"
using ResultGenerator;
using RR = ResultGenerator.ReturnsResultAttribute;

class C
{
    [ReturnsResult] void A() { }
    [ReturnsResultAttribute] void B() { }
    [ResultGenerator.ReturnsResult] void C1() { }
    [global::ResultGenerator.ReturnsResultAttribute] void D() { }
    [RR] void E() { }
    [Obsolete] void F() { }
}
",
        &interner,
    );
    let mut table = TypeTable::new();
    table.add_external(
        "ResultGenerator",
        "ReturnsResultAttribute",
        0,
        TypeCategory::Reference,
    );
    table.add_unit(&unit, &interner);
    let resolver = TableResolver::new(&table, &interner);

    let mut resolved = Vec::new();
    walk_types(&unit, &table, &interner, |scope, decl| {
        for member in &decl.members {
            let attribute = &member.attributes[0].attributes[0];
            resolved.push(
                resolver
                    .resolve_attribute(&attribute.name, scope)
                    .map(|ty| ty.display().to_owned()),
            );
        }
    });

    let marker = Some("global::ResultGenerator.ReturnsResultAttribute".to_owned());
    assert_eq!(
        resolved,
        vec![
            marker.clone(),
            marker.clone(),
            marker.clone(),
            marker.clone(),
            marker,
            None,
        ]
    );
}
