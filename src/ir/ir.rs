use std::fmt::Display;

use serde::Serialize;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    Load,
    Store,
    Oper,
    Assign,
    Compare,
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Oper => "OPER",
            Opcode::Assign => "ASSIGN",
            Opcode::Compare => "COMPARE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: String,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: impl Into<String>) -> Self {
        Instruction {
            opcode,
            operand: operand.into(),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}

fn opcode_for(kind: TokenKind) -> Option<Opcode> {
    match kind {
        TokenKind::Number => Some(Opcode::Load),
        TokenKind::Identifier => Some(Opcode::Store),
        TokenKind::ArithmeticOperator => Some(Opcode::Oper),
        TokenKind::AssignmentOperator => Some(Opcode::Assign),
        TokenKind::ComparisonOperator => Some(Opcode::Compare),
        _ => None,
    }
}

/// Emits at most one instruction per token, in stream order.
pub fn generate_ir(tokens: &[Token]) -> Vec<Instruction> {
    tokens
        .iter()
        .filter_map(|token| {
            opcode_for(token.kind).map(|opcode| Instruction::new(opcode, token.value.as_str()))
        })
        .collect()
}
