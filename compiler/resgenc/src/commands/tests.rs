use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use super::*;
use crate::DriverError;

const SERVICE: &str = r"using ResultGenerator;

namespace App.Services;

public record Person(string Name);

public partial class PersonService
{
    [ReturnsResult]
    [result: Ok(Value<Person>), NotFound]
    public partial GetPersonResult GetPerson(Guid id);
}
";

const BROKEN: &str = r#"using ResultGenerator;

class Broken
{
    [ReturnsResult("1Bad")]
    [result: A, B]
    public R M() => default;
}
"#;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    for (name, text) in files {
        fs::write(dir.path().join("src").join(name), text).unwrap();
    }
    dir
}

fn options(dir: &Path, extra: &[&str]) -> GenerateOptions {
    let mut args = vec![
        dir.join("src").display().to_string(),
        format!("--out-dir={}", dir.join("gen").display()),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    GenerateOptions::parse(&args).unwrap()
}

fn capture(command: impl FnOnce(&mut Console<'_>) -> Status) -> (Status, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = command(&mut Console::new(&mut out, &mut err));
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn generate_writes_result_types() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let options = options(dir.path(), &[]);

    let (status, out, err) = capture(|console| generate(&options, console).unwrap());
    assert_eq!(status, Status::Success);
    assert_eq!(err, "");
    assert!(out.starts_with("generated 1 result type in '"));
    assert!(out.ends_with("(1 changed)\n"));

    let generated = fs::read_to_string(dir.path().join("gen/GetPersonResult.g.cs")).unwrap();
    assert!(generated.contains("public readonly partial struct @GetPersonResult\n"));

    let (_, again, _) = capture(|console| generate(&options, console).unwrap());
    assert!(again.ends_with("(0 changed)\n"));
}

#[test]
fn generate_reports_errors_and_keeps_valid_output() {
    let dir = project(&[("Service.cs", SERVICE), ("Broken.cs", BROKEN)]);
    let options = options(dir.path(), &[]);

    let (status, _, err) = capture(|console| generate(&options, console).unwrap());
    assert_eq!(status, Status::Failure);
    assert!(err.starts_with("error[RESGEN0003]: '1Bad' is not a valid result type name\n"));
    assert!(err.contains("Broken.cs:5:"));
    assert!(err.ends_with("error: aborting due to previous error\n"));
    assert!(dir.path().join("gen/GetPersonResult.g.cs").is_file());
}

#[test]
fn generate_to_stdout_writes_nothing() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let options = options(dir.path(), &["--stdout"]);

    let (status, out, _) = capture(|console| generate(&options, console).unwrap());
    assert_eq!(status, Status::Success);
    assert!(out.starts_with("// GetPersonResult.g.cs\n"));
    assert!(out.contains("public static @GetPersonResult @NotFound() => new(2);"));
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn check_flag_finds_stale_files() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let (status, _, _) = capture(|console| generate(&options(dir.path(), &["--check"]), console).unwrap());
    assert_eq!(status, Status::Failure);

    capture(|console| generate(&options(dir.path(), &[]), console).unwrap());
    let (status, out, _) = capture(|console| generate(&options(dir.path(), &["--check"]), console).unwrap());
    assert_eq!(status, Status::Success);
    assert_eq!(out, "");

    fs::write(dir.path().join("gen/GetPersonResult.g.cs"), "// edited\n").unwrap();
    let (status, out, _) = capture(|console| generate(&options(dir.path(), &["--check"]), console).unwrap());
    assert_eq!(status, Status::Failure);
    assert!(out.starts_with("out of date: "));
    assert!(out.ends_with("GetPersonResult.g.cs\n"));
}

#[test]
fn json_diagnostics_carry_the_file() {
    let dir = project(&[("Broken.cs", BROKEN)]);
    let options = options(dir.path(), &["--format=json"]);

    let (status, _, err) = capture(|console| check(&options, console).unwrap());
    assert_eq!(status, Status::Failure);
    assert!(err.starts_with("[\n  {\n    \"code\": \"RESGEN0003\",\n"));
    assert!(err.contains("Broken.cs\",\n"));
    assert!(err.ends_with("\n]\n"));
}

#[test]
fn check_reports_success() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let options = options(dir.path(), &[]);

    let (status, out, err) = capture(|console| check(&options, console).unwrap());
    assert_eq!(status, Status::Success);
    assert_eq!(out, "OK: 1 file, 1 result type\n");
    assert_eq!(err, "");
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn error_limit_is_mentioned() {
    let many = "using ResultGenerator; class C { [ReturnsResult(\"1\")] R A() => default; [ReturnsResult(\"2\")] R B() => default; }";
    let dir = project(&[("Many.cs", many)]);
    let options = options(dir.path(), &["--error-limit=1"]);

    let (_, _, err) = capture(|console| check(&options, console).unwrap());
    assert!(err.ends_with("note: 1 more diagnostic not shown (--error-limit=1)\n"));
}

#[test]
fn missing_inputs_fail_the_command() {
    let dir = tempdir().unwrap();
    let options = options(dir.path(), &[]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = generate(&options, &mut Console::new(&mut out, &mut err));
    assert!(matches!(result, Err(DriverError::NotFound { .. })));
}

#[test]
fn explain_known_and_unknown_codes() {
    let (status, out, _) = capture(|console| explain("resgen0003", console));
    assert_eq!(status, Status::Success);
    assert!(!out.is_empty());

    let (status, _, err) = capture(|console| explain("E0001", console));
    assert_eq!(status, Status::Failure);
    assert!(err.starts_with("Unknown diagnostic code: E0001\n"));

    let (status, _, err) = capture(|console| explain("RESGEN1004", console));
    assert_eq!(status, Status::Failure);
    assert!(err.contains("RESGEN1004: Invalid character"));
}

#[test]
fn lex_lists_tokens_and_errors() {
    let dir = project(&[("Lex.cs", "class `C")]);
    let path = dir.path().join("src/Lex.cs");

    let (status, out, _) = capture(|console| lex_file(&path, console).unwrap());
    assert_eq!(status, Status::Failure);
    assert!(out.contains("(4 tokens):\n"));
    assert!(out.contains(" @ 0..5 \"class\"\n"));
    assert!(out.ends_with("Errors:\n  6..7: unexpected character ```\n"));
}

#[test]
fn parse_lists_declarations() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let path = dir.path().join("src/Service.cs");

    let (status, out, _) = capture(|console| parse_file(&path, console).unwrap());
    assert_eq!(status, Status::Success);
    assert!(out.contains("  Usings: 1\n  Errors: 0\n"));
    assert!(out.contains(
        "  namespace App.Services\n    Record Person (0 members)\n    Class PersonService (1 members)\n      method GetPersonResult GetPerson(1 params, 2 attributes)\n"
    ));
}

#[test]
fn model_lists_variants() {
    let dir = project(&[("Service.cs", SERVICE)]);
    let path = dir.path().join("src/Service.cs");

    let (status, out, err) = capture(|console| model_file(&path, console).unwrap());
    assert_eq!(status, Status::Success);
    assert_eq!(err, "");
    assert!(out.ends_with(
        "GetPersonResult -> GetPersonResult.g.cs (method GetPerson at 11:36)\n  1 Ok(global::App.Services.Person value)\n  2 NotFound\n"
    ));
}
