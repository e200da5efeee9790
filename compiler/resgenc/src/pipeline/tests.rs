use pretty_assertions::assert_eq;
use resgen_analysis::{AnalysisContext, CancellationToken};
use resgen_diagnostic::{DiagnosticConfig, ErrorCode};
use resgen_ir::FileId;

use super::{RunOutput, Session};
use crate::input::SourceFile;
use crate::output::MemoryOutput;
use crate::DriverError;

const HEADER: &str = "using ResultGenerator;\n";

fn file(name: &str, body: &str) -> SourceFile {
    SourceFile::new(name, format!("{HEADER}{body}"))
}

fn run(files: &[SourceFile]) -> RunOutput {
    Session::default().parallel(false).run(files).unwrap()
}

fn codes(output: &RunOutput) -> Vec<(FileId, ErrorCode)> {
    output
        .diagnostics
        .iter()
        .map(|(file, diag)| (*file, diag.code))
        .collect()
}

#[test]
fn get_person_end_to_end() {
    let files = [file(
        "PersonService.cs",
        r"
namespace App.Services;

public record Person(string Name);

public partial class PersonService
{
    [ReturnsResult]
    [result: Ok(Value<Person>), NotFound]
    public partial GetPersonResult GetPerson(Guid id);
}
",
    )];
    let output = run(&files);

    assert!(output.diagnostics.is_empty());
    assert!(output.has_errors().is_none());
    assert_eq!(output.generated.len(), 1);

    let source = &output.generated[0];
    assert_eq!(source.file_name, "GetPersonResult.g.cs");
    assert_eq!(source.origin.method, "GetPerson");
    assert_eq!(&*source.content, resgen_codegen::render(&source.origin.model));
    assert!(source.content.contains(
        "public static @GetPersonResult @Ok(global::App.Services.Person @value) => new(1, @ok: (@value));"
    ));
}

#[test]
fn types_are_shared_across_files() {
    let files = [
        SourceFile::new("Person.cs", "namespace App; public class Person { }"),
        file(
            "Service.cs",
            "namespace App; class S { [ReturnsResult] [result: Found(P<Person>), Missing] R Find() => default; }",
        ),
    ];
    let output = run(&files);
    assert!(output.diagnostics.is_empty());
    assert_eq!(
        output.generated[0].origin.model.values[0].parameters[0]
            .ty
            .fully_qualified_name,
        "global::App.Person"
    );
}

#[test]
fn diagnostics_are_sorted_and_counted() {
    let files = [
        file(
            "B.cs",
            "class B { [ReturnsResult] [result: Ok(V<Nope>), E] R One() => default; [ReturnsResult] R Two() => default; }",
        ),
        file("A.cs", "class A { [ReturnsResult(\"1Bad\")] [result: X, Y] R M() => default; }"),
    ];
    let output = run(&files);

    assert_eq!(
        codes(&output),
        vec![
            (FileId::new(0), ErrorCode::UnknownType),
            (FileId::new(0), ErrorCode::SpecifyResultDeclaration),
            (FileId::new(1), ErrorCode::InvalidResultTypeName),
        ]
    );
    assert_eq!(output.error_count, 2);
    assert_eq!(output.warning_count, 1);
    assert!(output.has_errors().is_some());
    assert_eq!(output.generated.len(), 1);
}

#[test]
fn syntax_errors_do_not_stop_analysis() {
    let files = [file(
        "C.cs",
        r"
class C
{
    public int = 5;
    [ReturnsResult]
    [result: A, B]
    public partial R M();
}
",
    )];
    let output = run(&files);
    assert_eq!(codes(&output), vec![(FileId::new(0), ErrorCode::ExpectedIdentifier)]);
    assert_eq!(output.generated.len(), 1);
    assert_eq!(output.generated[0].file_name, "MResult.g.cs");
}

#[test]
fn lexer_errors_are_reported() {
    let files = [file(
        "C.cs",
        "class C { [ReturnsResult] [result: A, B] R M() => ` ; }",
    )];
    let output = run(&files);
    assert_eq!(codes(&output), vec![(FileId::new(0), ErrorCode::InvalidCharacter)]);
}

#[test]
fn duplicate_result_types_keep_the_first() {
    let files = [
        file("A.cs", "class A { [ReturnsResult(\"Shared\")] [result: X, Y] R M() => default; }"),
        file(
            "B.cs",
            "class B { [ReturnsResult(\"shared\")] [result: Z, W] R N() => default; }",
        ),
    ];
    let output = run(&files);

    assert_eq!(output.generated.len(), 1);
    assert_eq!(output.generated[0].file_name, "Shared.g.cs");
    assert_eq!(codes(&output), vec![(FileId::new(1), ErrorCode::DuplicateResultType)]);

    let (file, diag) = &output.diagnostics[0];
    assert_eq!(diag.message, "Result type 'shared' is generated more than once");
    assert_eq!(diag.primary_span().unwrap().text(&files[file.index()].text), "N");
    assert_eq!(
        diag.notes,
        vec!["'Shared.g.cs' is already generated for method 'M'".to_string()]
    );
}

#[test]
fn parallel_run_matches_sequential_run() {
    let files: Vec<SourceFile> = (0..12)
        .map(|i| {
            file(
                &format!("F{i}.cs"),
                &format!(
                    "namespace N{i} {{ class C {{ [ReturnsResult] [result: Ok(V<int>), Bad(X<Missing>)] R M{i}() => default; [ReturnsResult] [result: Only] R S{i}() => default; }} }}"
                ),
            )
        })
        .collect();

    let sequential = Session::default().parallel(false).run(&files).unwrap();
    let parallel = Session::default().parallel(true).run(&files).unwrap();
    assert_eq!(parallel.generated, sequential.generated);
    assert_eq!(parallel.diagnostics, sequential.diagnostics);
    assert_eq!(sequential.generated.len(), 24);
    assert_eq!(sequential.error_count, 12);
}

#[test]
fn render_cache_survives_runs() {
    let files = [file(
        "C.cs",
        "class C { [ReturnsResult] [result: A, B] R One() => default; [ReturnsResult] [result: A, B] R Two() => default; }",
    )];
    let session = Session::default().parallel(false);

    session.run(&files).unwrap();
    assert_eq!(session.cache().len(), 2);
    assert_eq!(session.cache().hits(), 0);

    session.run(&files).unwrap();
    assert_eq!(session.cache().len(), 2);
    assert_eq!(session.cache().hits(), 2);
}

#[test]
fn error_limit_suppresses_the_rest() {
    let files = [file(
        "C.cs",
        "class C { [ReturnsResult(\"1\")] R A() => default; [ReturnsResult(\"2\")] R B() => default; [ReturnsResult(\"3\")] R D() => default; }",
    )];
    let output = Session::default()
        .parallel(false)
        .with_diagnostic_config(DiagnosticConfig {
            error_limit: 2,
            deduplicate: true,
        })
        .run(&files)
        .unwrap();

    assert_eq!(output.diagnostics.len(), 2);
    assert_eq!(output.error_count, 2);
    assert_eq!(output.suppressed, 1);
}

#[test]
fn custom_marker_context() {
    let ctx = AnalysisContext {
        marker_namespace: "Acme".to_string(),
        marker_name: "Outcome".to_string(),
        ..AnalysisContext::default()
    };
    let files = [SourceFile::new(
        "C.cs",
        "using Acme; class C { [Outcome] [result: A, B] R Get() => default; [ReturnsResult] [result: A, B] R Other() => default; }",
    )];
    let output = Session::new(ctx).parallel(false).run(&files).unwrap();
    let names: Vec<_> = output
        .generated
        .iter()
        .map(|source| source.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["GetResult.g.cs"]);
}

#[test]
fn cancelled_session_fails() {
    let token = CancellationToken::new();
    token.cancel();
    let files = [file("C.cs", "class C { }")];
    for parallel in [false, true] {
        let result = Session::default()
            .parallel(parallel)
            .with_cancellation(token.clone())
            .run(&files);
        assert!(matches!(result, Err(DriverError::Cancelled(_))));
    }
}

#[test]
fn publish_hands_over_every_source() {
    let files = [file(
        "C.cs",
        "class C { [ReturnsResult] [result: A, B] R One() => default; [ReturnsResult(\"class\")] [result: A, B] R Two() => default; }",
    )];
    let session = Session::default();
    let output = session.run(&files).unwrap();
    let memory = MemoryOutput::new();
    session.publish(&output, &memory).unwrap();

    let sources = memory.into_sources();
    let names: Vec<_> = sources.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["OneResult.g.cs", "class.g.cs"]);
    assert!(sources[1].1.contains("public readonly partial struct @class\n"));
}
