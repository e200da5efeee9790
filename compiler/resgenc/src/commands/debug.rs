//! Debug commands: `lex`, `parse` and `model` for inspecting the pipeline.

use std::io::Write;
use std::path::Path;

use resgen_diagnostic::span_utils::offset_to_line_col;
use resgen_ir::ast::{MemberDecl, MemberKind, NamespaceMember, TypeDecl};
use resgen_ir::StringInterner;

use crate::input::SourceFile;
use crate::options::GenerateOptions;
use crate::pipeline::Session;
use crate::DriverError;

use super::{report, Console, Status};

/// Lex a file and display the token stream.
pub fn lex_file(path: &Path, console: &mut Console<'_>) -> Result<Status, DriverError> {
    let source = SourceFile::read(path)?;
    let interner = StringInterner::new();
    let lexed = resgen_lexer::lex(&source.text, &interner);

    let out = &mut *console.out;
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        source.display,
        lexed.tokens.len()
    );
    for token in lexed.tokens.iter() {
        let _ = writeln!(
            out,
            "  {:?} @ {} {:?}",
            token.kind,
            token.span,
            token.span.text(&source.text)
        );
    }

    if lexed.errors.is_empty() {
        return Ok(Status::Success);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Errors:");
    for error in &lexed.errors {
        let _ = writeln!(out, "  {}: {}", error.span, error.message());
    }
    Ok(Status::Failure)
}

/// Parse a file and display its declarations.
pub fn parse_file(path: &Path, console: &mut Console<'_>) -> Result<Status, DriverError> {
    let source = SourceFile::read(path)?;
    let interner = StringInterner::new();
    let lexed = resgen_lexer::lex(&source.text, &interner);
    let parsed = resgen_parse::parse(&lexed.tokens, &source.text, &interner);

    let out = &mut *console.out;
    let _ = writeln!(out, "Parse result for '{}':", source.display);
    let _ = writeln!(out, "  Usings: {}", parsed.unit.usings.len());
    let _ = writeln!(out, "  Errors: {}", parsed.errors.len() + lexed.errors.len());

    if !parsed.unit.members.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Declarations:");
        let mut printer = TreePrinter {
            out,
            text: &source.text,
            interner: &interner,
        };
        printer.namespace_members(&parsed.unit.members, 1);
    }

    if lexed.errors.is_empty() && parsed.errors.is_empty() {
        return Ok(Status::Success);
    }
    let out = &mut *console.out;
    let _ = writeln!(out);
    let _ = writeln!(out, "Errors:");
    for error in &lexed.errors {
        let _ = writeln!(out, "  {}: {}", error.span, error.message());
    }
    for error in &parsed.errors {
        let _ = writeln!(out, "  {}: {}", error.span, error.message);
    }
    Ok(Status::Failure)
}

struct TreePrinter<'a> {
    out: &'a mut dyn Write,
    text: &'a str,
    interner: &'a StringInterner,
}

impl TreePrinter<'_> {
    fn namespace_members(&mut self, members: &[NamespaceMember], depth: usize) {
        for member in members {
            match member {
                NamespaceMember::Namespace(ns) => {
                    let _ = writeln!(
                        self.out,
                        "{}namespace {}",
                        indent(depth),
                        ns.name.span.text(self.text)
                    );
                    self.namespace_members(&ns.members, depth + 1);
                }
                NamespaceMember::Type(decl) => self.type_decl(decl, depth),
            }
        }
    }

    fn type_decl(&mut self, decl: &TypeDecl, depth: usize) {
        let _ = writeln!(
            self.out,
            "{}{:?} {} ({} members)",
            indent(depth),
            decl.kind,
            self.interner.lookup(decl.name.name),
            decl.members.len()
        );
        for member in &decl.members {
            self.member(member, depth + 1);
        }
    }

    fn member(&mut self, member: &MemberDecl, depth: usize) {
        match &member.kind {
            MemberKind::Method(method) => {
                let attributes: usize = member.attributes.iter().map(|l| l.attributes.len()).sum();
                let _ = writeln!(
                    self.out,
                    "{}method {} {}({} params, {} attributes)",
                    indent(depth),
                    method.return_type.span.text(self.text),
                    self.interner.lookup(method.name.name),
                    method.params.len(),
                    attributes
                );
            }
            MemberKind::Type(decl) => self.type_decl(decl, depth),
            _ => {}
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Analyze a file and display the result-type models built from it.
pub fn model_file(path: &Path, console: &mut Console<'_>) -> Result<Status, DriverError> {
    let files = [SourceFile::read(path)?];
    let run = Session::default().parallel(false).run(&files)?;
    let options = GenerateOptions {
        inputs: vec![path.to_path_buf()],
        ..GenerateOptions::default()
    };

    let source = &files[0];
    let out = &mut *console.out;
    let _ = writeln!(
        out,
        "Models for '{}' ({} result types):",
        source.display,
        run.generated.len()
    );
    for generated in &run.generated {
        let origin = &generated.origin;
        let (line, column) = offset_to_line_col(&source.text, origin.method_span.start);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} -> {} (method {} at {line}:{column})",
            origin.model.name, generated.file_name, origin.method
        );
        for (discriminant, value) in origin.model.discriminants() {
            let parameters: Vec<String> = value
                .parameters
                .iter()
                .map(|p| format!("{} {}", p.ty.display(), p.name))
                .collect();
            if parameters.is_empty() {
                let _ = writeln!(out, "  {discriminant} {}", value.name);
            } else {
                let _ = writeln!(out, "  {discriminant} {}({})", value.name, parameters.join(", "));
            }
        }
    }

    report(&run, &files, &options, console);
    Ok(Status::of(&run))
}
