//! Plain-text formatter.

use super::{FormatOptions, Formatter, IndentLevel, Layout};

/// Accumulates rendered output into a `String`.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    output: String,
    layout: Layout,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            output: String::new(),
            layout: Layout::new(options),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Formatter for TextFormatter {
    fn write(&mut self, text: &str) {
        if let Some(indent) = self.layout.take_indent(text) {
            self.output.push_str(&indent);
        }
        self.output.push_str(text);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
        self.layout.line_break();
    }

    fn write_indent(&mut self) {
        self.layout.indent();
    }

    fn write_outdent(&mut self) {
        self.layout.outdent();
    }

    fn indent_level(&self) -> IndentLevel {
        self.layout.level()
    }

    fn restore_indent(&mut self, level: IndentLevel) {
        self.layout.restore(level);
    }
}
