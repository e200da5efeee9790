//! Diagnostic reporting bound to one file.

use resgen_diagnostic::{Diagnostic, DiagnosticSink};
use resgen_ir::FileId;

#[derive(Clone, Copy)]
pub(crate) struct Reporter<'a> {
    sink: &'a dyn DiagnosticSink,
    file: FileId,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink, file: FileId) -> Self {
        Reporter { sink, file }
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        tracing::trace!(file = ?self.file, code = %diagnostic.code, "diagnostic");
        self.sink.report(self.file, diagnostic);
    }
}
