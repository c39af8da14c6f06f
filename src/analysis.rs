//! One analysis request over one source text.
//!
//! The source is scanned once when the request is created; each pass then
//! reads the stored token stream. Nothing is shared between requests.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{
        ir::{generate_ir, Instruction},
        optimizer::optimize,
    },
    lexer::{
        lexer::tokenize,
        tokens::{ReservedWords, Token, TokenKind},
    },
    semantic::semantic::{check_undefined_with, ReportPolicy},
    syntax_tree::syntax_tree::{build_tree, SyntaxTree},
    Position,
};

pub const DEFAULT_PROGRAM_NAME: &str = "MyProgram";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub reserved_words: ReservedWords,
    pub program_name: String,
    pub report_policy: ReportPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            reserved_words: ReservedWords::default(),
            program_name: String::from(DEFAULT_PROGRAM_NAME),
            report_policy: ReportPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidConfig {
                    message: err.to_string(),
                },
                Position::null(),
            )
        })
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidConfig {
                    message: format!("{}: {}", path.display(), err),
                },
                Position::null(),
            )
        })?;

        Self::from_json(&json)
    }
}

/// Everything every pass produced, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub tokens: Vec<Token>,
    pub lexical_errors: Vec<String>,
    pub undefined_references: Vec<String>,
    pub syntax_tree: SyntaxTree,
    pub intermediate_code: Vec<String>,
    pub optimized_code: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    source: String,
    config: AnalysisConfig,
    tokens: Vec<Token>,
}

impl Analysis {
    /// Scans `source`, rejecting text that is empty or only whitespace.
    pub fn new(source: impl Into<String>, config: &AnalysisConfig) -> Result<Analysis, Error> {
        let source = source.into();

        if source.trim().is_empty() {
            return Err(Error::new(ErrorImpl::EmptySource, Position::null()));
        }

        let tokens = tokenize(&source, &config.reserved_words);

        Ok(Analysis {
            source,
            config: config.clone(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn lexical_errors(&self) -> Vec<Error> {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::LexicalError)
            .map(|token| {
                Error::new(
                    ErrorImpl::UnrecognisedCharacter {
                        character: token.value.clone(),
                    },
                    token.position,
                )
            })
            .collect()
    }

    pub fn undefined_references(&self) -> Vec<String> {
        check_undefined_with(&self.tokens, self.config.report_policy)
    }

    pub fn syntax_tree(&self) -> SyntaxTree {
        build_tree(&self.tokens, &self.config.program_name)
    }

    pub fn intermediate_code(&self) -> Vec<Instruction> {
        generate_ir(&self.tokens)
    }

    pub fn optimized_code(&self) -> Vec<Instruction> {
        optimize(self.intermediate_code())
    }

    pub fn report(&self) -> Report {
        let render = |ir: Vec<Instruction>| -> Vec<String> { ir.iter().map(ToString::to_string).collect() };

        Report {
            tokens: self.tokens.clone(),
            lexical_errors: self.lexical_errors().iter().map(ToString::to_string).collect(),
            undefined_references: self.undefined_references(),
            syntax_tree: self.syntax_tree(),
            intermediate_code: render(self.intermediate_code()),
            optimized_code: render(self.optimized_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_source() {
        let error = Analysis::new("  \n\t", &AnalysisConfig::default()).unwrap_err();

        assert_eq!(error.get_error_name(), "EmptySource");
    }

    #[test]
    fn test_runs_every_pass() {
        let analysis = Analysis::new("x = 0 ; y @", &AnalysisConfig::default()).unwrap();
        let report = analysis.report();

        assert_eq!(report.tokens.len(), 6);
        assert_eq!(report.lexical_errors, vec!["line 1: unrecognised character: \"@\""]);
        assert_eq!(report.undefined_references, vec!["x is not defined", "y is not defined"]);
        assert_eq!(report.syntax_tree.root().label, "Program: MyProgram");
        assert_eq!(report.intermediate_code, vec!["STORE x", "ASSIGN =", "LOAD 0", "STORE y"]);
        assert_eq!(report.optimized_code, vec!["STORE x", "ASSIGN =", "STORE y"]);
    }

    #[test]
    fn test_lexical_error_positions() {
        let analysis = Analysis::new("a\n  $", &AnalysisConfig::default()).unwrap();
        let errors = analysis.lexical_errors();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get_position().line, 2);
        assert_eq!(errors[0].get_position().offset, 4);
    }

    #[test]
    fn test_config_from_json() {
        let config = AnalysisConfig::from_json(
            r#"{"reserved_words": ["let"], "program_name": "Demo", "report_policy": "every_occurrence"}"#,
        )
        .unwrap();

        assert!(config.reserved_words.contains("let"));
        assert!(!config.reserved_words.contains("if"));
        assert_eq!(config.program_name, "Demo");
        assert_eq!(config.report_policy, ReportPolicy::EveryOccurrence);
    }

    #[test]
    fn test_config_defaults_missing_fields() {
        let config = AnalysisConfig::from_json(r#"{"program_name": "Demo"}"#).unwrap();

        assert_eq!(config.reserved_words, ReservedWords::python());
        assert_eq!(config.report_policy, ReportPolicy::FirstOccurrence);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let error = AnalysisConfig::from_json(r#"{"keywords": []}"#).unwrap_err();

        assert_eq!(error.get_error_name(), "InvalidConfig");
    }

    #[test]
    fn test_config_policy_reaches_semantic_pass() {
        let config = AnalysisConfig {
            report_policy: ReportPolicy::EveryOccurrence,
            ..AnalysisConfig::default()
        };
        let analysis = Analysis::new("a a", &config).unwrap();

        assert_eq!(analysis.undefined_references().len(), 2);
    }
}
