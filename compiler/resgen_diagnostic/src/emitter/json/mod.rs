//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format. Each diagnostic carries
//! its file path when the driver sets one, so a single array can cover a
//! whole run.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    file: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            file: None,
        }
    }

    /// Set the file path recorded on following diagnostics.
    pub fn set_file(&mut self, path: impl Into<String>) {
        self.file = Some(path.into());
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(
            self.writer,
            "    \"title\": \"{}\",",
            escape_json(diagnostic.code.title())
        );
        let _ = writeln!(
            self.writer,
            "    \"category\": \"{}\",",
            diagnostic.code.category().as_str()
        );
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            diagnostic.severity.as_str()
        );
        if let Some(file) = &self.file {
            let _ = writeln!(self.writer, "    \"file\": \"{}\",", escape_json(file));
        }
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        // Labels
        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"start\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"end\": {},", label.span.end);
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        // Notes
        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        // Suggestions (text-only)
        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(
                self.writer,
                "      \"{}\"{}",
                escape_json(suggestion),
                comma
            );
        }
        let _ = writeln!(self.writer, "    ],");

        // Structured suggestions
        let _ = writeln!(self.writer, "    \"fixes\": [");
        for (i, suggestion) in diagnostic.structured_suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.structured_suggestions.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&suggestion.message)
            );
            let _ = writeln!(
                self.writer,
                "        \"applicability\": \"{}\",",
                suggestion.applicability.as_str()
            );
            let _ = writeln!(self.writer, "        \"edits\": [");
            for (j, sub) in suggestion.substitutions.iter().enumerate() {
                let comma = trailing_comma(j, suggestion.substitutions.len());
                let _ = writeln!(
                    self.writer,
                    "          {{ \"start\": {}, \"end\": {}, \"text\": \"{}\" }}{comma}",
                    sub.span.start,
                    sub.span.end,
                    escape_json(&sub.snippet)
                );
            }
            let _ = writeln!(self.writer, "        ]");
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}
