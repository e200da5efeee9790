//! Indentation-aware text writer.
//!
//! Text handed to [`CodeWriter::append`] may span several lines. Every line
//! after the first is indented to the current level, and so is the first
//! line when the writer sits at the start of a line. Blank lines inside an
//! indented region therefore keep their indentation.

const INDENT: &str = "    ";

/// Builds generated source text.
#[derive(Debug)]
pub struct CodeWriter {
    output: String,
    indent: usize,
    /// The last write ended with a newline.
    at_line_start: bool,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    /// Create an empty writer at indentation level zero.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write `text` without a trailing newline.
    pub fn append(&mut self, text: &str) {
        self.write(Some(text), false);
    }

    /// Write `text` followed by a newline.
    pub fn append_line(&mut self, text: &str) {
        self.write(Some(text), true);
    }

    /// Write a bare newline. No indentation is emitted.
    pub fn newline(&mut self) {
        self.write(None, true);
    }

    fn write(&mut self, text: Option<&str>, newline: bool) {
        if let Some(text) = text {
            for (i, line) in text.split('\n').enumerate() {
                if i != 0 {
                    self.output.push('\n');
                }
                if self.at_line_start || i != 0 {
                    self.write_indent();
                }
                self.output.push_str(line);
            }
        }
        if newline {
            self.output.push('\n');
        }
        self.at_line_start = newline;
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write `{`, the indented body and `}`, each brace on its own line.
    pub fn block(&mut self, body: impl FnOnce(&mut Self)) {
        self.append_line("{");
        self.indent();
        body(self);
        self.dedent();
        self.append_line("}");
    }

    /// Write each item with `separator` appended between consecutive items.
    pub fn sections<T>(
        &mut self,
        separator: &str,
        items: impl IntoIterator<Item = T>,
        mut section: impl FnMut(&mut Self, T),
    ) {
        for (i, item) in items.into_iter().enumerate() {
            if i != 0 {
                self.append(separator);
            }
            section(self, item);
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Take the generated output.
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests;
