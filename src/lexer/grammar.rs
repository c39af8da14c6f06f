//! The ordered lexical grammar.
//!
//! Rules are tried in declaration order at every position and the first one
//! that matches wins, even when a later rule would match a longer span.
//! Assignment is listed before arithmetic so `+=` stays a single token, and
//! the two-character comparisons come before `<` and `>` inside their
//! alternation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_RULE;

use super::{
    lexer::{default_handler, skip_handler, symbol_handler, Lexer},
    tokens::TokenKind,
};

pub type RuleHandler = fn(&mut Lexer, &Rule, &str);

pub struct Rule {
    /// `None` for input that is consumed without producing a token.
    pub kind: Option<TokenKind>,
    pub regex: Regex,
    pub handler: RuleHandler,
}

lazy_static! {
    pub static ref GRAMMAR: Vec<Rule> = vec![
        MK_RULE!(Some(TokenKind::LineComment), r"#[^\r\n]*", default_handler),
        MK_RULE!(Some(TokenKind::MultilineString), r#""""[\s\S]*?"""|'''[\s\S]*?'''"#, default_handler),
        MK_RULE!(Some(TokenKind::String), r#""[^"\r\n]*"|'[^'\r\n]*'"#, default_handler),
        MK_RULE!(Some(TokenKind::LogicalOperator), r"and|or|not|&&|\|\|", default_handler),
        MK_RULE!(Some(TokenKind::ComparisonOperator), r"==|!=|<=|>=|<|>", default_handler),
        MK_RULE!(Some(TokenKind::AssignmentOperator), r"[+\-*/]?=", default_handler),
        MK_RULE!(Some(TokenKind::ArithmeticOperator), r"[+\-*/%]", default_handler),
        MK_RULE!(Some(TokenKind::Punctuation), r"[;,(){}\[\].:]", default_handler),
        MK_RULE!(Some(TokenKind::Identifier), r"[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        // ASCII digits only; other Unicode digits fall through to LexicalError.
        MK_RULE!(Some(TokenKind::Number), r"[0-9]+(?:\.[0-9]+)?", default_handler),
        MK_RULE!(None, r"\s+", skip_handler),
    ];
}

/// Returns the first rule matching at the start of `input` with its match.
pub fn match_rule(input: &str) -> Option<(&'static Rule, &str)> {
    GRAMMAR.iter().find_map(|rule| {
        rule.regex
            .find(input)
            .filter(|found| !found.as_str().is_empty())
            .map(|found| (rule, found.as_str()))
    })
}
