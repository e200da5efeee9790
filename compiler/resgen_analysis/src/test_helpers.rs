//! Fixtures shared by the analysis tests.
//!
//! A [`Fixture`] parses C# sources as separate files, builds the type table
//! with the marker registered, and runs the analyzer over them.

#![allow(clippy::unwrap_used)]

use resgen_diagnostic::{CollectingSink, Diagnostic, ErrorCode};
use resgen_ir::ast::{
    Attribute, CompilationUnit, MemberDecl, MemberKind, MethodDecl, NamespaceMember, TypeDecl,
};
use resgen_ir::{FileId, Span, StringInterner};
use resgen_types::{TableResolver, TypeTable};

use crate::{AnalysisContext, Analyzer, CancellationToken, Cancelled, GeneratedModel, SourceUnit};

/// Makes the unqualified marker visible.
pub(crate) const HEADER: &str = "using ResultGenerator;\n";

pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub sources: Vec<String>,
    pub units: Vec<CompilationUnit>,
    pub table: TypeTable,
    pub ctx: AnalysisContext,
}

/// Models and diagnostics of one run. Diagnostics are ordered by file and
/// position, ties in report order.
pub(crate) struct Outcome {
    pub models: Vec<GeneratedModel>,
    pub diagnostics: Vec<(FileId, Diagnostic)>,
}

impl Outcome {
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|(_, diag)| diag.code).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .map(|(_, diag)| diag.message.as_str())
            .collect()
    }
}

impl Fixture {
    pub fn new(sources: &[&str]) -> Self {
        Self::with_context(sources, AnalysisContext::default())
    }

    pub fn with_context(sources: &[&str], ctx: AnalysisContext) -> Self {
        let interner = StringInterner::new();
        let units: Vec<_> = sources
            .iter()
            .map(|source| {
                let tokens = resgen_lexer::lex(source, &interner).tokens;
                let output = resgen_parse::parse(&tokens, source, &interner);
                assert!(!output.has_errors(), "{:?}", output.errors);
                output.unit
            })
            .collect();

        let mut table = TypeTable::new();
        ctx.register_marker(&mut table);
        for unit in &units {
            table.add_unit(unit, &interner);
        }

        Fixture {
            interner,
            sources: sources.iter().map(|source| (*source).to_owned()).collect(),
            units,
            table,
            ctx,
        }
    }

    pub fn source_units(&self) -> Vec<SourceUnit<'_>> {
        (0u32..)
            .zip(self.sources.iter().zip(&self.units))
            .map(|(index, (source, unit))| SourceUnit {
                file: FileId::new(index),
                source,
                unit,
            })
            .collect()
    }

    pub fn run(&self, parallel: bool, cancel: CancellationToken) -> Result<Outcome, Cancelled> {
        let resolver = TableResolver::new(&self.table, &self.interner);
        let sink = CollectingSink::new();
        let models = Analyzer::new(&self.ctx, &self.table, &resolver, &self.interner, &sink)
            .with_cancellation(cancel)
            .parallel(parallel)
            .analyze(&self.source_units())?;

        let mut diagnostics = sink.into_inner();
        diagnostics.sort_by_key(|(file, diag)| (*file, diag.primary_span().map(|span| span.start)));
        Ok(Outcome {
            models,
            diagnostics,
        })
    }

    /// Sequential run.
    pub fn analyze(&self) -> Outcome {
        self.run(false, CancellationToken::new()).unwrap()
    }

    /// Source text under `span` in `file`.
    pub fn text(&self, file: FileId, span: Span) -> &str {
        span.text(&self.sources[file.index()])
    }

    /// Source text under each diagnostic's primary label.
    pub fn primary_texts<'a>(&'a self, outcome: &Outcome) -> Vec<&'a str> {
        outcome
            .diagnostics
            .iter()
            .map(|(file, diag)| self.text(*file, diag.primary_span().unwrap()))
            .collect()
    }

    /// First member named `name` in any file.
    pub fn member(&self, name: &str) -> &MemberDecl {
        let mut types = Vec::new();
        for unit in &self.units {
            collect_types(&unit.members, &mut types);
        }
        types
            .into_iter()
            .flat_map(|decl| &decl.members)
            .find(|member| match &member.kind {
                MemberKind::Method(method) => self.interner.lookup(method.name.name) == name,
                _ => false,
            })
            .unwrap()
    }

    pub fn method(&self, name: &str) -> &MethodDecl {
        match &self.member(name).kind {
            MemberKind::Method(method) => method,
            _ => unreachable!("member() only returns methods"),
        }
    }

    /// First attribute on method `name`.
    pub fn marker(&self, name: &str) -> &Attribute {
        &self.member(name).attributes[0].attributes[0]
    }
}

fn collect_types<'u>(members: &'u [NamespaceMember], out: &mut Vec<&'u TypeDecl>) {
    for member in members {
        match member {
            NamespaceMember::Namespace(ns) => collect_types(&ns.members, out),
            NamespaceMember::Type(decl) => {
                out.push(decl);
                for nested in &decl.members {
                    if let MemberKind::Type(inner) = &nested.kind {
                        out.push(inner);
                    }
                }
            }
        }
    }
}
