//! Styled-span formatter.

use super::{FormatOptions, Formatter, IndentLevel, Layout};
use crate::model::ReferenceTarget;

/// The role of a span of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanStyle {
    Plain,
    Whitespace,
    Declaration,
    Comment,
    Literal,
    Keyword,
    Reference,
    Property,
    LineBreak,
}

/// A run of output text with a single style.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub style: SpanStyle,
    pub text: String,
    pub target: Option<ReferenceTarget>,
    pub tooltip: Option<String>,
}

impl Span {
    fn styled(style: SpanStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            target: None,
            tooltip: None,
        }
    }
}

/// Records output as a sequence of [`Span`]s.
///
/// Concatenating the span texts yields exactly what a [`TextFormatter`]
/// with the same options would produce.
///
/// [`TextFormatter`]: super::TextFormatter
#[derive(Debug, Clone)]
pub struct StyledFormatter {
    spans: Vec<Span>,
    layout: Layout,
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            spans: Vec::new(),
            layout: Layout::new(options),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// The plain text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Spans that link to a model entity.
    pub fn references(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|span| span.target.is_some())
    }

    fn push(&mut self, span: Span) {
        if let Some(indent) = self.layout.take_indent(&span.text) {
            self.spans.push(Span::styled(SpanStyle::Whitespace, indent));
        }
        if span.text.is_empty() {
            return;
        }
        // Adjacent plain runs merge into one span.
        if span.style == SpanStyle::Plain {
            if let Some(last) = self.spans.last_mut() {
                if last.style == SpanStyle::Plain {
                    last.text.push_str(&span.text);
                    return;
                }
            }
        }
        self.spans.push(span);
    }
}

impl Formatter for StyledFormatter {
    fn write(&mut self, text: &str) {
        self.push(Span::styled(SpanStyle::Plain, text));
    }

    fn write_line(&mut self) {
        self.spans.push(Span::styled(SpanStyle::LineBreak, "\n"));
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

    fn write_declaration(&mut self, text: &str, target: Option<ReferenceTarget>) {
        self.push(Span {
            target,
            ..Span::styled(SpanStyle::Declaration, text)
        });
    }

    fn write_comment(&mut self, text: &str) {
        self.push(Span::styled(SpanStyle::Comment, text));
    }

    fn write_literal(&mut self, text: &str) {
        self.push(Span::styled(SpanStyle::Literal, text));
    }

    fn write_keyword(&mut self, text: &str) {
        self.push(Span::styled(SpanStyle::Keyword, text));
    }

    fn write_reference(&mut self, text: &str, tooltip: &str, target: Option<ReferenceTarget>) {
        self.push(Span {
            target,
            tooltip: (!tooltip.is_empty()).then(|| tooltip.to_string()),
            ..Span::styled(SpanStyle::Reference, text)
        });
    }

    fn write_property(&mut self, name: &str, value: &str) {
        self.push(Span::styled(SpanStyle::Property, name));
        self.write(": ");
        self.write(value);
        self.write_line();
    }
}
