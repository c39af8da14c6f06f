//! Output formatting for the command line.
//!
//! Text output prints one result per line. JSON serializes the same data
//! and DOT describes the syntax tree.

use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

use lexis::analysis::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Phase {
    Tokens,
    Tree,
    Semantic,
    Ir,
    Optimized,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Dot,
}

const NO_SEMANTIC_ERRORS: &str = "No semantic errors found.";

fn lines<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

fn semantic_text(analysis: &Analysis) -> String {
    let diagnostics = analysis.undefined_references();

    if diagnostics.is_empty() {
        format!("{}\n", NO_SEMANTIC_ERRORS)
    } else {
        lines(&diagnostics)
    }
}

pub fn format_text(analysis: &Analysis, phase: Phase) -> String {
    match phase {
        Phase::Tokens => lines(analysis.tokens()),
        Phase::Tree => analysis.syntax_tree().to_text(),
        Phase::Semantic => semantic_text(analysis),
        Phase::Ir => lines(&analysis.intermediate_code()),
        Phase::Optimized => lines(&analysis.optimized_code()),
        Phase::All => {
            let sections = [
                ("Lexical Analysis", Phase::Tokens),
                ("Syntax Tree", Phase::Tree),
                ("Semantic Analysis", Phase::Semantic),
                ("Intermediate Code", Phase::Ir),
                ("Optimized Code", Phase::Optimized),
            ];

            sections
                .iter()
                .map(|(title, phase)| format!("== {} ==\n{}", title, format_text(analysis, *phase)))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|json| json + "\n")
}

pub fn format_json(analysis: &Analysis, phase: Phase) -> serde_json::Result<String> {
    match phase {
        Phase::Tokens => to_json(&analysis.tokens()),
        Phase::Tree => to_json(&analysis.syntax_tree()),
        Phase::Semantic => to_json(&analysis.undefined_references()),
        Phase::Ir => to_json(&analysis.intermediate_code()),
        Phase::Optimized => to_json(&analysis.optimized_code()),
        Phase::All => to_json(&analysis.report()),
    }
}

pub fn format_dot(analysis: &Analysis) -> String {
    analysis.syntax_tree().to_dot()
}
