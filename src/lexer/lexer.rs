use crate::{Position, MK_TOKEN};

use super::{
    grammar::{match_rule, Rule},
    tokens::{ReservedWords, Token, TokenKind},
};

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    reserved: &'a ReservedWords,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, reserved: &'a ReservedWords) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            reserved,
            pos: 0,
            line: 1,
        }
    }

    /// Moves past `text`, counting the line breaks it spans.
    pub fn advance(&mut self, text: &str) {
        self.pos += text.len();
        self.line += count_line_breaks(text);
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.pos,
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Counts `\r\n`, `\r` and `\n` as one line break each.
pub fn count_line_breaks(text: &str) -> usize {
    text.matches(['\r', '\n']).count() - text.matches("\r\n").count()
}

pub fn skip_handler(lexer: &mut Lexer, _rule: &Rule, matched: &str) {
    lexer.advance(matched);
}

pub fn default_handler(lexer: &mut Lexer, rule: &Rule, matched: &str) {
    if let Some(kind) = rule.kind {
        let position = lexer.position();
        lexer.push(MK_TOKEN!(kind, matched.to_string(), position));
    }

    lexer.advance(matched);
}

pub fn symbol_handler(lexer: &mut Lexer, _rule: &Rule, matched: &str) {
    let kind = if lexer.reserved.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let position = lexer.position();
    lexer.push(MK_TOKEN!(kind, matched.to_string(), position));
    lexer.advance(matched);
}

/// Scans `source` into an ordered token stream.
///
/// Never fails: a character no rule accepts becomes a single-character
/// `LexicalError` token and scanning resumes right after it.
pub fn tokenize(source: &str, reserved: &ReservedWords) -> Vec<Token> {
    let mut lex = Lexer::new(source, reserved);

    while !lex.at_eof() {
        let remainder = lex.remainder();

        match match_rule(remainder) {
            Some((rule, matched)) => {
                log::trace!("line {}: {:?} matched {:?}", lex.line, rule.kind, matched);
                (rule.handler)(&mut lex, rule, matched);
            }
            None => {
                let width = remainder.chars().next().map_or(remainder.len(), char::len_utf8);
                let offending = &remainder[..width];
                let position = lex.position();

                log::warn!("line {}: unrecognised character {:?}", position.line, offending);
                lex.push(MK_TOKEN!(TokenKind::LexicalError, offending.to_string(), position));
                lex.advance(offending);
            }
        }
    }

    log::debug!("scanned {} tokens over {} lines", lex.tokens.len(), lex.line);
    lex.tokens
}
