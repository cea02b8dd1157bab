//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use semgram_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_rule_name() {
    let err = Error::empty_rule_name(3);
    assert!(matches!(err.kind, ErrorKind::EmptyRuleName { line: 3 }));
    assert_eq!(format!("{err}"), "empty rule name on line 3");
}

#[test]
fn error_invalid_rule_name() {
    let err = Error::invalid_rule_name("two words", 7);
    assert!(matches!(err.kind, ErrorKind::InvalidRuleName { line: 7, .. }));
    let msg = format!("{err}");
    assert!(msg.contains("\"two words\""));
    assert!(msg.contains('7'));
}

#[test]
fn error_invalid_semantic_type() {
    let err = Error::invalid_semantic_type("foo", "missing marker");
    let msg = format!("{err}");
    assert!(msg.contains("\"foo\""));
    assert!(msg.contains("missing marker"));
}

#[test]
fn error_missing_empty_marker() {
    let err = Error::missing_empty_marker("prep_s_priloha", "PRILOHA");
    assert!(matches!(err.kind, ErrorKind::MissingEmptyMarker { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("prep_s_priloha"));
    assert!(msg.contains("PRILOHA"));
}

#[test]
fn error_generated_name_conflict() {
    let err = Error::generated_name_conflict("eps_foo");
    assert!(matches!(err.kind, ErrorKind::GeneratedNameConflict { ref name } if name == "eps_foo"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(ref m) if m.contains("no such file")));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::empty_rule_name(2)
        .with_context(ErrorContext::new().with_source("food.grammar").with_line(2));
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.source.as_deref(), Some("food.grammar"));
    assert_eq!(format!("{ctx}"), "at food.grammar:2");
}

#[test]
fn context_without_source_is_blank() {
    assert_eq!(format!("{}", ErrorContext::new().with_line(4)), "");
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::new(ErrorKind::Internal("x".to_string())));
}
