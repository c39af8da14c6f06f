#![allow(clippy::module_inception)]

use serde::Serialize;

use crate::errors::errors::{Error, ErrorTip};

pub mod analysis;
pub mod errors;
pub mod ir;
pub mod lexer;
pub mod macros;
pub mod semantic;
pub mod syntax_tree;

extern crate regex;

/// A place in the source: 1-indexed line and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 0, offset: 0 }
    }
}

/// Returns the line number, the line text and the column of `offset`.
///
/// `\r\n`, `\r` and `\n` each end a line, as they do for the scanner.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    let bytes = source.as_bytes();
    let mut start = 0;
    let mut line_number = 1;

    while start < bytes.len() {
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }

        let next = match bytes.get(end) {
            Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => end + 2,
            Some(_) => end + 1,
            None => end,
        };

        if (start..next).contains(&offset) {
            return Some((line_number, source[start..next].to_string(), offset - start));
        }

        start = next;
        line_number += 1;
    }

    None
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnrecognisedCharacter (`@` does not start any token, it was skipped)
        -> main.py
          |
        3 | x = @
          | ----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().offset)
    else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (trimmed, string.len() - trimmed.len())
}
