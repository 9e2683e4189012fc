//! Builder-pattern printer for rendering a parse error.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::ParseError;

/// Renders a [`ParseError`] with various options.
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = self.error.to_string();
        let range = clamp_range(self.error.span.into(), source.len());

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(&self.error.message),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        for related in &self.error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(clamp_range(related.span.into(), source.len()))
                    .label(&related.message),
            );
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// The error span may sit one past the final token (e.g. at EOF); keep it
/// inside the source so the renderer can place the caret.
fn clamp_range(range: Range<usize>, source_len: usize) -> Range<usize> {
    let start = range.start.min(source_len);
    let end = range.end.clamp(start, source_len);
    start..end
}
