//! Reporting seam between the analysis and whoever collects diagnostics.
//!
//! Analysis runs on worker threads, so sinks take `&self` and must be
//! `Sync`.

use parking_lot::Mutex;
use resgen_ir::FileId;

use crate::Diagnostic;

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink: Sync {
    fn report(&self, file: FileId, diagnostic: Diagnostic);
}

/// Sink that keeps every diagnostic in report order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<(FileId, Diagnostic)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected diagnostics.
    pub fn take(&self) -> Vec<(FileId, Diagnostic)> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    pub fn into_inner(self) -> Vec<(FileId, Diagnostic)> {
        self.diagnostics.into_inner()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, file: FileId, diagnostic: Diagnostic) {
        self.diagnostics.lock().push((file, diagnostic));
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, file: FileId, diagnostic: Diagnostic) {
        (**self).report(file, diagnostic);
    }
}
