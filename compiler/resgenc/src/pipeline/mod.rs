//! The generator pipeline over a set of source files.
//!
//! ```text
//! SourceFile ─► lex ─► parse ─► TypeTable ─► Analyzer ─► RenderCache ─► GeneratedSource
//!                 │       │                      │
//!                 └───────┴──────────────────────┴──► DiagnosticQueue
//! ```
//!
//! All files of a run form one compilation: types declared in one file are
//! visible in every other, and partial method halves pair across files.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rayon::prelude::*;
use resgen_analysis::{AnalysisContext, Analyzer, CancellationToken, GeneratedModel, SourceUnit};
use resgen_diagnostic::{
    CollectingSink, Diagnostic, DiagnosticConfig, DiagnosticQueue, DiagnosticSink, ErrorCode,
    ErrorGuaranteed,
};
use resgen_ir::ast::CompilationUnit;
use resgen_ir::{FileId, StringInterner};
use resgen_types::{TableResolver, TypeTable};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::cache::RenderCache;
use crate::input::SourceFile;
use crate::output::SourceOutput;
use crate::DriverError;

/// A generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    /// `{TypeName}.g.cs`
    pub file_name: String,
    pub content: Arc<str>,
    /// The method and model it was generated from.
    pub origin: GeneratedModel,
}

/// Everything one run produced.
#[derive(Debug, Default)]
pub struct RunOutput {
    pub generated: Vec<GeneratedSource>,
    /// Sorted by file and position, deduplicated, cut at the error limit.
    pub diagnostics: Vec<(FileId, Diagnostic)>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Diagnostics dropped after the error limit was reached.
    pub suppressed: usize,
}

impl RunOutput {
    /// Proof of errors, if any were reported.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }
}

/// Settings and caches shared by consecutive runs.
pub struct Session {
    ctx: AnalysisContext,
    config: DiagnosticConfig,
    parallel: bool,
    cancel: CancellationToken,
    cache: RenderCache,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(AnalysisContext::default())
    }
}

impl Session {
    pub fn new(ctx: AnalysisContext) -> Self {
        Session {
            ctx,
            config: DiagnosticConfig::default(),
            parallel: true,
            cancel: CancellationToken::new(),
            cache: RenderCache::new(),
        }
    }

    #[must_use]
    pub fn with_diagnostic_config(mut self, config: DiagnosticConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Analyze `files` as one compilation and render every result type.
    ///
    /// Diagnostics never fail the run; only cancellation does.
    #[tracing::instrument(level = "info", skip_all, fields(files = files.len(), parallel = self.parallel))]
    pub fn run(&self, files: &[SourceFile]) -> Result<RunOutput, DriverError> {
        with_pool(self.parallel, |parallel| self.run_in(files, parallel))
    }

    /// Hand every generated source of `run` to `output`.
    pub fn publish(&self, run: &RunOutput, output: &dyn SourceOutput) -> Result<(), DriverError> {
        with_pool(self.parallel, |parallel| {
            let add = |source: &GeneratedSource| output.add_source(&source.file_name, &source.content);
            if parallel {
                run.generated.par_iter().try_for_each(add)
            } else {
                run.generated.iter().try_for_each(add)
            }
        })
    }

    fn run_in(&self, files: &[SourceFile], parallel: bool) -> Result<RunOutput, DriverError> {
        let interner = StringInterner::new();
        let sink = CollectingSink::new();
        let ids: Vec<FileId> = (0u32..).map(FileId::new).take(files.len()).collect();

        let parse = |(file, source): (&FileId, &SourceFile)| front_end(*file, source, &interner, &sink);
        let units: Vec<Option<CompilationUnit>> = if parallel {
            ids.par_iter().zip(files).map(parse).collect()
        } else {
            ids.iter().zip(files).map(parse).collect()
        };
        self.cancel.check()?;

        let mut table = TypeTable::new();
        self.ctx.register_marker(&mut table);
        for unit in units.iter().flatten() {
            table.add_unit(unit, &interner);
        }
        let resolver = TableResolver::new(&table, &interner);

        let sources: Vec<SourceUnit<'_>> = ids
            .iter()
            .zip(files)
            .zip(&units)
            .filter_map(|((file, source), unit)| {
                Some(SourceUnit {
                    file: *file,
                    source: &source.text,
                    unit: unit.as_ref()?,
                })
            })
            .collect();

        let models = Analyzer::new(&self.ctx, &table, &resolver, &interner, &sink)
            .with_cancellation(self.cancel.clone())
            .parallel(parallel)
            .analyze(&sources)?;
        debug!(models = models.len(), types = table.len(), "analyzed");

        let generated = self.render(models, parallel, &sink);
        Ok(self.queue(files, sink.into_inner(), generated))
    }

    /// Render each model, dropping those whose file name is already taken.
    fn render(
        &self,
        models: Vec<GeneratedModel>,
        parallel: bool,
        sink: &dyn DiagnosticSink,
    ) -> Vec<GeneratedSource> {
        let texts: Vec<Arc<str>> = if parallel {
            models
                .par_iter()
                .map(|generated| self.cache.get_or_render(&generated.model))
                .collect()
        } else {
            models
                .iter()
                .map(|generated| self.cache.get_or_render(&generated.model))
                .collect()
        };

        // File names are compared case-insensitively.
        let mut claimed: FxHashMap<String, usize> = FxHashMap::default();
        let mut generated: Vec<GeneratedSource> = Vec::with_capacity(models.len());
        for (origin, content) in models.into_iter().zip(texts) {
            let file_name = resgen_codegen::file_name(&origin.model);
            match claimed.entry(file_name.to_lowercase()) {
                Entry::Occupied(first) => {
                    let first = &generated[*first.get()].origin;
                    sink.report(origin.file, duplicate_result_type(&origin, first));
                }
                Entry::Vacant(slot) => {
                    slot.insert(generated.len());
                    generated.push(GeneratedSource {
                        file_name,
                        content,
                        origin,
                    });
                }
            }
        }
        generated
    }

    fn queue(
        &self,
        files: &[SourceFile],
        mut reported: Vec<(FileId, Diagnostic)>,
        generated: Vec<GeneratedSource>,
    ) -> RunOutput {
        // Worker scheduling decides report order; fix it before the error
        // limit and deduplication look at it.
        reported.sort_by(|(a_file, a), (b_file, b)| {
            a_file
                .cmp(b_file)
                .then_with(|| span_key(a).cmp(&span_key(b)))
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
                .then_with(|| a.message.cmp(&b.message))
        });

        let mut queue = DiagnosticQueue::with_config(self.config.clone());
        for (file, diagnostic) in reported {
            queue.add_with_source(file, diagnostic, &files[file.index()].text);
        }

        let error_count = queue.error_count();
        let warning_count = queue.warning_count();
        let suppressed = queue.suppressed_count();
        if suppressed > 0 {
            debug!(suppressed, "error limit reached");
        }
        RunOutput {
            generated,
            diagnostics: queue.flush(),
            error_count,
            warning_count,
            suppressed,
        }
    }
}

fn span_key(diagnostic: &Diagnostic) -> Option<(u32, u32)> {
    diagnostic.primary_span().map(|span| (span.start, span.end))
}

/// Lex and parse one file, reporting lexer and parser errors.
#[tracing::instrument(level = "debug", skip_all, fields(file = %source.display))]
fn front_end(
    file: FileId,
    source: &SourceFile,
    interner: &StringInterner,
    sink: &dyn DiagnosticSink,
) -> Option<CompilationUnit> {
    if u32::try_from(source.text.len()).is_err() {
        sink.report(
            file,
            Diagnostic::from_code(ErrorCode::SourceTooLarge).with_message(format!(
                "'{}' is too large to analyze ({} bytes)",
                source.display,
                source.text.len()
            )),
        );
        return None;
    }

    let lexed = resgen_lexer::lex(&source.text, interner);
    for error in &lexed.errors {
        sink.report(file, error.to_diagnostic());
    }
    let parsed = resgen_parse::parse(&lexed.tokens, &source.text, interner);
    for error in &parsed.errors {
        sink.report(file, error.to_diagnostic());
    }
    Some(parsed.unit)
}

fn duplicate_result_type(duplicate: &GeneratedModel, first: &GeneratedModel) -> Diagnostic {
    Diagnostic::from_code(ErrorCode::DuplicateResultType)
        .with_message(format!(
            "Result type '{}' is generated more than once",
            duplicate.model.name
        ))
        .with_label(duplicate.method_span, "generated again here")
        .with_note(format!(
            "'{}' is already generated for method '{}'",
            resgen_codegen::file_name(&first.model),
            first.method
        ))
}

/// Run `work` on a scoped rayon pool, or on the calling thread when
/// `parallel` is off or the pool cannot be built. `work` is told which.
fn with_pool<R: Send>(parallel: bool, work: impl Fn(bool) -> R + Sync) -> R {
    if !parallel {
        return work(false);
    }
    rayon::ThreadPoolBuilder::new()
        .thread_name(|index| format!("resgen-worker-{index}"))
        .build_scoped(rayon::ThreadBuilder::run, |pool| pool.install(|| work(true)))
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), running sequentially");
            work(false)
        })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
