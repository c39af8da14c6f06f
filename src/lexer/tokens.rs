use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    /// Python 3 keyword list, the default reserved-word set.
    pub static ref PYTHON_KEYWORDS: Vec<&'static str> = vec![
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    LineComment,
    MultilineString,
    String,
    LogicalOperator,
    ComparisonOperator,
    AssignmentOperator,
    ArithmeticOperator,
    Punctuation,
    Identifier,
    Keyword,
    Number,
    LexicalError,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {} -> {}", self.position.line, self.kind, self.value)
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }
}

/// The set of words that turn an `Identifier` into a `Keyword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedWords(HashSet<String>);

impl ReservedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedWords(words.into_iter().map(Into::into).collect())
    }

    pub fn python() -> Self {
        Self::new(PYTHON_KEYWORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::python()
    }
}
