//! Undefined-reference check.
//!
//! Nothing in the token stream ever defines a symbol, so every identifier
//! is reported. [`ReportPolicy`] decides whether repeats are reported too.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPolicy {
    /// Report an identifier the first time it is seen, then treat it as known.
    #[default]
    FirstOccurrence,
    /// Report every occurrence of every identifier.
    EveryOccurrence,
}

pub struct SemanticChecker {
    symbols: HashSet<String>,
    policy: ReportPolicy,
}

impl SemanticChecker {
    pub fn new(policy: ReportPolicy) -> Self {
        SemanticChecker {
            symbols: HashSet::new(),
            policy,
        }
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    fn check(&mut self, token: &Token) -> Option<String> {
        if token.kind != TokenKind::Identifier || self.is_defined(&token.value) {
            return None;
        }

        if self.policy == ReportPolicy::FirstOccurrence {
            self.symbols.insert(token.value.clone());
        }

        Some(
            ErrorImpl::VariableNotDefined {
                variable: token.value.clone(),
            }
            .to_string(),
        )
    }

    pub fn run(mut self, tokens: &[Token]) -> Vec<String> {
        tokens.iter().filter_map(|token| self.check(token)).collect()
    }
}

pub fn check_undefined(tokens: &[Token]) -> Vec<String> {
    check_undefined_with(tokens, ReportPolicy::default())
}

pub fn check_undefined_with(tokens: &[Token], policy: ReportPolicy) -> Vec<String> {
    SemanticChecker::new(policy).run(tokens)
}
