use super::{ParseError, ParseErrorKind};
use crate::span::Span;

#[test]
fn display_uses_cpython_exception_names() {
    let err = ParseError::syntax("invalid syntax", Span::new(0, 1));
    assert_eq!(err.to_string(), "SyntaxError: invalid syntax");

    let err = ParseError::indentation("unexpected indent", Span::new(0, 4));
    assert_eq!(err.to_string(), "IndentationError: unexpected indent");

    let err = ParseError::new(
        ParseErrorKind::Tab,
        "inconsistent use of tabs and spaces in indentation",
        Span::new(0, 2),
    );
    assert!(err.to_string().starts_with("TabError"));

    // Version errors print as SyntaxError, matching CPython, but stay
    // distinguishable through the kind.
    let err = ParseError::new(ParseErrorKind::Version, "too new", Span::new(0, 2));
    assert_eq!(err.to_string(), "SyntaxError: too new");
    assert_eq!(err.kind, ParseErrorKind::Version);
}

#[test]
fn render_points_at_the_span() {
    let source = "if x\n";
    let err = ParseError::syntax("expected ':'", Span::new(4, 5));
    let rendered = err.render(source);
    assert!(rendered.contains("expected ':'"), "{rendered}");
    assert!(rendered.contains("if x"), "{rendered}");
}

#[test]
fn render_without_source_falls_back_to_display() {
    let err = ParseError::syntax("invalid syntax", Span::new(0, 1));
    assert_eq!(err.printer().render(), "SyntaxError: invalid syntax");
}

#[test]
fn related_info_is_rendered_as_context() {
    let source = "(1 + 2\n";
    let err = ParseError::syntax("'(' was never closed", Span::new(0, 1))
        .related_to("opened here", Span::new(0, 1));
    let rendered = err.render(source);
    assert!(rendered.contains("'(' was never closed"), "{rendered}");
}
