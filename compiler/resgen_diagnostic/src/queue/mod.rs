//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limit to keep output readable
//! - Deduplication of identical reports (same file, code, span and message)
//! - Stable ordering by file, line and column
//! - `ErrorGuaranteed` proof that errors were emitted

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use resgen_ir::FileId;

use crate::{Diagnostic, ErrorGuaranteed, Severity};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further diagnostics are dropped
    /// (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit, no deduplication.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    file: FileId,
    diagnostic: Diagnostic,
    /// 1-based position of the primary span, for sorting.
    line: u32,
    column: u32,
}

/// Identity used for deduplication.
fn identity_hash(file: FileId, diag: &Diagnostic) -> u64 {
    let mut hasher = DefaultHasher::new();
    file.hash(&mut hasher);
    diag.code.hash(&mut hasher);
    diag.primary_span().hash(&mut hasher);
    diag.message.hash(&mut hasher);
    hasher.finish()
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add_with_source(file, diagnostic, source);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    seen: HashSet<u64>,
    error_count: usize,
    warning_count: usize,
    /// Diagnostics dropped after the error limit was reached.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: HashSet::new(),
            error_count: 0,
            warning_count: 0,
            suppressed: 0,
            config,
        }
    }

    /// Add a diagnostic at a known position.
    ///
    /// Returns `true` if the diagnostic was queued, `false` if it was a
    /// duplicate or the error limit was reached.
    pub fn add(&mut self, file: FileId, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert(identity_hash(file, &diag)) {
            return false;
        }

        match diag.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Info => {}
        }

        self.diagnostics.push(QueuedDiagnostic {
            file,
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Add a diagnostic, computing its position from the file's source.
    pub fn add_with_source(&mut self, file: FileId, diag: Diagnostic, source: &str) -> bool {
        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            crate::span_utils::offset_to_line_col(source, span.start)
        });
        self.add(file, diag, line, column)
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// The proof holds even if the diagnostic itself was deduplicated or
    /// suppressed by the limit: an equivalent error is already on record.
    pub fn emit_error(
        &mut self,
        file: FileId,
        diag: Diagnostic,
        line: u32,
        column: u32,
    ) -> ErrorGuaranteed {
        let mut diag = diag;
        diag.severity = Severity::Error;
        self.add(file, diag, line, column);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Number of diagnostics dropped because of the error limit.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    /// Proof of errors, if any were queued.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort by file and position, and drain the queue.
    ///
    /// Diagnostics at the same position keep their report order.
    pub fn flush(&mut self) -> Vec<(FileId, Diagnostic)> {
        self.diagnostics
            .sort_by_key(|d| (d.file, d.line, d.column));

        let result = self
            .diagnostics
            .drain(..)
            .map(|d| (d.file, d.diagnostic))
            .collect();

        self.seen.clear();
        self.error_count = 0;
        self.warning_count = 0;
        self.suppressed = 0;

        result
    }
}
