//! resgen CLI
//!
//! Generates C# result types for methods marked `[ReturnsResult]`.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use resgenc::commands::{check, explain, generate, lex_file, model_file, parse_file, Console, Status};
use resgenc::{init_tracing, DriverError, GenerateOptions};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut console = Console::stdio(&mut out, &mut err);

    let result = match command.as_str() {
        "generate" | "gen" => {
            GenerateOptions::parse(&args[2..]).and_then(|options| generate(&options, &mut console))
        }
        "check" => GenerateOptions::parse(&args[2..]).and_then(|options| check(&options, &mut console)),
        "model" | "parse" | "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: resgen {command} <file.cs>");
                return ExitCode::FAILURE;
            };
            let path = Path::new(path);
            match command.as_str() {
                "model" => model_file(path, &mut console),
                "parse" => parse_file(path, &mut console),
                _ => lex_file(path, &mut console),
            }
        }
        "--explain" | "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: resgen --explain <CODE>");
                eprintln!("Example: resgen --explain RESGEN0003");
                return ExitCode::FAILURE;
            };
            Ok(explain(code, &mut console))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Status::Success)
        }
        "version" | "--version" | "-V" => {
            println!("resgen {}", env!("CARGO_PKG_VERSION"));
            Ok(Status::Success)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Ok(Status::Failure)
        }
    };

    match result {
        Ok(status) => status.into(),
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(
                error,
                DriverError::UnknownOption(_)
                    | DriverError::InvalidValue { .. }
                    | DriverError::MissingArgument(_)
                    | DriverError::ConflictingOptions(..)
            ) {
                eprintln!();
                eprintln!("Usage: resgen {command} <files or directories...> [options]");
                eprintln!("Run `resgen help` for the list of options.");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("resgen: result types for C# methods marked [ReturnsResult]");
    println!();
    println!("Usage: resgen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <paths...>  Analyze sources and write {{Name}}.g.cs files");
    println!("  check <paths...>     Analyze sources and report diagnostics only");
    println!("  model <file.cs>      Display the result types built from a file");
    println!("  parse <file.cs>      Parse and display declarations");
    println!("  lex <file.cs>        Tokenize and display tokens");
    println!("  --explain <code>     Explain a diagnostic code (e.g., RESGEN0003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Generate and check options:");
    println!("  --out-dir=<dir>          Output directory (default: .)");
    println!("  --format=<fmt>           Diagnostics: terminal, json");
    println!("  --color=<when>           Colors: auto, always, never");
    println!("  --error-limit=<n>        Stop showing errors after n (0 = no limit)");
    println!("  --no-parallel            Analyze on a single thread");
    println!("  --stdout                 Print generated sources instead of writing them");
    println!("  --check                  Fail if generated files are missing or out of date");
    println!();
    println!("Set RESGEN_LOG (or RUST_LOG), e.g. RESGEN_LOG=resgen_analysis=debug, for tracing output.");
}
