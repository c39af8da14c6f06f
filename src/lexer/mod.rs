//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into an
//! ordered stream of classified tokens. It handles:
//!
//! - Matching an ordered table of regex rules, first match wins
//! - Reclassification of identifiers found in the reserved-word set
//! - Line tracking, including string literals spanning several lines
//! - Inline recovery from characters no rule accepts

pub mod grammar;
pub mod lexer;
pub mod tokens;
