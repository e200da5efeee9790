//! Analysis session over a set of parsed files.
//!
//! Methods are collected from every file first, so partial halves declared
//! in different files can be paired. Each marked method is then built on
//! its own; with `parallel` on, files and methods are spread over the
//! current rayon pool. Models come back in file and source order either
//! way.

use rayon::prelude::*;
use resgen_diagnostic::DiagnosticSink;
use resgen_ir::ast::Attribute;
use resgen_ir::{FileId, ResultTypeModel, Span, StringInterner};
use resgen_types::{TypeResolver, TypeTable};
use tracing::debug;

use crate::builder::{build_model, find_marker};
use crate::collect::{collect_methods, MethodSite, SourceUnit};
use crate::partial::PartialPairs;
use crate::{AnalysisContext, CancellationToken, Cancelled};

/// A result type built from one marked method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedModel {
    /// File declaring the marked method.
    pub file: FileId,
    pub method: String,
    /// Span of the method name.
    pub method_span: Span,
    pub model: ResultTypeModel,
}

pub struct Analyzer<'a> {
    ctx: &'a AnalysisContext,
    table: &'a TypeTable,
    resolver: &'a dyn TypeResolver,
    interner: &'a StringInterner,
    sink: &'a dyn DiagnosticSink,
    cancel: CancellationToken,
    parallel: bool,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        ctx: &'a AnalysisContext,
        table: &'a TypeTable,
        resolver: &'a dyn TypeResolver,
        interner: &'a StringInterner,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Analyzer {
            ctx,
            table,
            resolver,
            interner,
            sink,
            cancel: CancellationToken::new(),
            parallel: false,
        }
    }

    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub(crate) fn context(&self) -> &'a AnalysisContext {
        self.ctx
    }

    pub(crate) fn resolver(&self) -> &'a dyn TypeResolver {
        self.resolver
    }

    pub(crate) fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub(crate) fn sink(&self) -> &'a dyn DiagnosticSink {
        self.sink
    }

    pub(crate) fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Build the result type of every marked method in `units`.
    ///
    /// Diagnostics go to the sink as they are found. Cancellation discards
    /// the models built so far.
    #[tracing::instrument(level = "debug", skip_all, fields(files = units.len(), parallel = self.parallel))]
    pub fn analyze(&self, units: &[SourceUnit<'_>]) -> Result<Vec<GeneratedModel>, Cancelled> {
        self.cancel.check()?;

        let sites: Vec<MethodSite<'_>> = if self.parallel {
            units
                .par_iter()
                .flat_map_iter(|unit| collect_methods(*unit, self.table, self.interner))
                .collect()
        } else {
            units
                .iter()
                .flat_map(|unit| collect_methods(*unit, self.table, self.interner))
                .collect()
        };
        let pairs = PartialPairs::build(&sites, self.resolver, self.interner);

        let built: Vec<Option<GeneratedModel>> = if self.parallel {
            (0..sites.len())
                .into_par_iter()
                .map(|index| self.analyze_site(&sites, &pairs, index))
                .collect::<Result<_, _>>()?
        } else {
            (0..sites.len())
                .map(|index| self.analyze_site(&sites, &pairs, index))
                .collect::<Result<_, _>>()?
        };

        let models: Vec<_> = built.into_iter().flatten().collect();
        debug!(methods = sites.len(), models = models.len(), "analysis finished");
        Ok(models)
    }

    fn analyze_site(
        &self,
        sites: &[MethodSite<'_>],
        pairs: &PartialPairs,
        index: usize,
    ) -> Result<Option<GeneratedModel>, Cancelled> {
        self.cancel.check()?;
        let site = &sites[index];
        let Some(marker) = self.marker(site) else {
            return Ok(None);
        };

        let other_half = pairs.partner(index).map(|other| &sites[other]);
        // With the marker on both halves, the declaring half is analyzed.
        if let Some(other) = other_half {
            if !site.method.body.is_none() && self.marker(other).is_some() {
                return Ok(None);
            }
        }

        let model = build_model(self, site, marker, other_half)?;
        Ok(model.map(|model| GeneratedModel {
            file: site.file,
            method: site.name(self.interner).to_owned(),
            method_span: site.method.name.span,
            model,
        }))
    }

    fn marker<'s>(&self, site: &'s MethodSite<'_>) -> Option<&'s Attribute> {
        find_marker(
            site.member,
            &site.scope,
            self.ctx,
            self.resolver,
            self.interner,
        )
    }
}
