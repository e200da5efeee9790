use std::path::PathBuf;

use pretty_assertions::assert_eq;
use resgen_diagnostic::ColorMode;

use super::{GenerateOptions, OutputFormat};
use crate::DriverError;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_string()).collect()
}

#[test]
fn defaults() {
    let options = GenerateOptions::parse(&args(&["src"])).unwrap();
    assert_eq!(
        options,
        GenerateOptions {
            inputs: vec![PathBuf::from("src")],
            ..GenerateOptions::default()
        }
    );
    assert!(options.parallel);
    assert_eq!(options.out_dir, PathBuf::from("."));
    assert_eq!(options.diagnostic_config().error_limit, 50);
}

#[test]
fn every_flag() {
    let options = GenerateOptions::parse(&args(&[
        "--out-dir=gen",
        "a.cs",
        "--format=json",
        "--color=never",
        "--no-parallel",
        "--error-limit=3",
        "--check",
        "dir",
    ]))
    .unwrap();

    assert_eq!(options.inputs, vec![PathBuf::from("a.cs"), PathBuf::from("dir")]);
    assert_eq!(options.out_dir, PathBuf::from("gen"));
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.color, ColorMode::Never);
    assert!(!options.parallel);
    assert!(options.check);
    assert!(!options.stdout);
    assert_eq!(options.diagnostic_config().error_limit, 3);
    assert!(options.diagnostic_config().deduplicate);
}

#[test]
fn bad_values_are_rejected() {
    let cases = [
        (vec!["--format=xml", "a.cs"], "invalid value 'xml' for --format"),
        (vec!["--color=maybe", "a.cs"], "invalid value 'maybe' for --color"),
        (vec!["--error-limit=-1", "a.cs"], "invalid value '-1' for --error-limit"),
        (vec!["--verbose", "a.cs"], "unknown option '--verbose'"),
        (vec!["--stdout", "--check", "a.cs"], "--stdout cannot be combined with --check"),
        (vec!["--stdout"], "missing input files"),
    ];
    for (list, message) in cases {
        let error = GenerateOptions::parse(&args(&list)).unwrap_err();
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn missing_inputs() {
    assert!(matches!(
        GenerateOptions::parse(&[]),
        Err(DriverError::MissingArgument(_))
    ));
}
