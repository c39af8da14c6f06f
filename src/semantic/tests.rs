use crate::lexer::{lexer::tokenize, tokens::ReservedWords};

use super::semantic::{check_undefined, check_undefined_with, ReportPolicy, SemanticChecker};

fn scan(source: &str) -> Vec<crate::lexer::tokens::Token> {
    tokenize(source, &ReservedWords::default())
}

#[test]
fn test_reports_first_occurrence_only() {
    let tokens = scan("x = y + x\ny = 2");

    assert_eq!(
        check_undefined(&tokens),
        vec!["x is not defined", "y is not defined"]
    );
}

#[test]
fn test_reports_every_occurrence() {
    let tokens = scan("x = y + x\ny = 2");

    assert_eq!(
        check_undefined_with(&tokens, ReportPolicy::EveryOccurrence),
        vec![
            "x is not defined",
            "y is not defined",
            "x is not defined",
            "y is not defined",
        ]
    );
}

#[test]
fn test_ignores_keywords_and_literals() {
    let tokens = scan("if True: return 'name' # comment x");

    assert!(check_undefined(&tokens).is_empty());
}

#[test]
fn test_empty_stream_has_no_diagnostics() {
    assert!(check_undefined(&[]).is_empty());
}

#[test]
fn test_checker_does_not_leak_between_runs() {
    let tokens = scan("a");

    assert_eq!(check_undefined(&tokens).len(), 1);
    assert_eq!(check_undefined(&tokens).len(), 1);
    assert!(!SemanticChecker::new(ReportPolicy::FirstOccurrence).is_defined("a"));
}
