//! Output sinks for rendered text.
//!
//! A [`Formatter`] receives rendered tokens one at a time together with their
//! role (keyword, literal, reference, ...) and lays them out on indented
//! lines. Indentation is pending state: `write_indent` and `write_outdent`
//! change the level, and the new level is applied to the first token written
//! after the next line break. Text already written is never re-indented.
//!
//! Two sinks are provided:
//!
//! - [`TextFormatter`]: plain text, for tests and for hosts that only need
//!   the source.
//! - [`StyledFormatter`]: the same text split into styled spans that carry
//!   cross-reference targets, for hosts that colorize or hyperlink output.

mod options;
mod styled;
mod text;


pub use options::FormatOptions;
pub use styled::{Span, SpanStyle, StyledFormatter};
pub use text::TextFormatter;

use crate::model::ReferenceTarget;

/// A saved indentation level.
///
/// Returned by [`Formatter::indent_level`] and handed back to
/// [`Formatter::restore_indent`] to leave a block at exactly the depth it was
/// entered at, however the block's body ended.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndentLevel(usize);

impl IndentLevel {
    pub fn depth(self) -> usize {
        self.0
    }
}

/// An indentation-aware text sink.
///
/// Only `write`, `write_line` and the indentation methods are required; the
/// styled variants default to plain text.
pub trait Formatter {
    fn write(&mut self, text: &str);

    /// End the current line. The next token starts at the current indent.
    fn write_line(&mut self);

    fn write_indent(&mut self);

    fn write_outdent(&mut self);

    fn indent_level(&self) -> IndentLevel;

    fn restore_indent(&mut self, level: IndentLevel);

    /// The name being declared, optionally linked to its model entity.
    fn write_declaration(&mut self, text: &str, _target: Option<ReferenceTarget>) {
        self.write(text);
    }

    fn write_comment(&mut self, text: &str) {
        self.write(text);
    }

    fn write_literal(&mut self, text: &str) {
        self.write(text);
    }

    fn write_keyword(&mut self, text: &str) {
        self.write(text);
    }

    /// A use of a named entity; `tooltip` describes the target.
    fn write_reference(&mut self, text: &str, _tooltip: &str, _target: Option<ReferenceTarget>) {
        self.write(text);
    }

    /// One `name: value` line of a summary header.
    fn write_property(&mut self, name: &str, value: &str) {
        self.write(name);
        self.write(": ");
        self.write(value);
        self.write_line();
    }
}

// ============================================================================
// SHARED LAYOUT STATE
// ============================================================================

/// Indent level plus the pending-indent flag shared by both sinks.
#[derive(Debug, Clone)]
struct Layout {
    options: FormatOptions,
    level: usize,
    at_line_start: bool,
}

impl Layout {
    fn new(options: FormatOptions) -> Self {
        Self {
            options,
            level: 0,
            at_line_start: true,
        }
    }

    /// Indentation owed before `text`, if any. Clears the pending flag.
    fn take_indent(&mut self, text: &str) -> Option<String> {
        if text.is_empty() || !self.at_line_start {
            return None;
        }
        self.at_line_start = false;
        (self.level > 0).then(|| self.options.indent(self.level))
    }

    fn line_break(&mut self) {
        self.at_line_start = true;
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn outdent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    fn level(&self) -> IndentLevel {
        IndentLevel(self.level)
    }

    fn restore(&mut self, level: IndentLevel) {
        self.level = level.0;
    }
}
