//! Flat syntax-tree builder.
//!
//! Walks the token stream keeping a stack of insertion points. Keywords and
//! operators open a new level, numbers and identifiers hang off the current
//! level as leaves, and `;` closes one level. This is a nesting heuristic,
//! not a parse.

use std::fmt::Write;

use serde::Serialize;

use crate::lexer::tokens::{Token, TokenKind};

pub type NodeId = usize;

const ROOT_ID: NodeId = 1;

pub const MAX_INDENT_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    pub id: NodeId,
    pub label: String,
    pub parent: Option<NodeId>,
}

/// Nodes in creation order; node `n` lives at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    fn new(program_name: &str) -> Self {
        SyntaxTree {
            nodes: vec![SyntaxNode {
                id: ROOT_ID,
                label: format!("Program: {}", program_name),
                parent: None,
            }],
        }
    }

    fn add(&mut self, label: &str, parent: NodeId) -> NodeId {
        let id = self.nodes.len() + 1;
        self.nodes.push(SyntaxNode {
            id,
            label: label.to_string(),
            parent: Some(parent),
        });
        id
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode> {
        id.checked_sub(1).and_then(|index| self.nodes.get(index))
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.node(id)
            .and_then(|node| node.parent)
            .and_then(|parent| self.node(parent))
    }

    pub fn children(&self, id: NodeId) -> Vec<&SyntaxNode> {
        self.nodes
            .iter()
            .filter(|node| node.parent == Some(id))
            .collect()
    }

    /// Child ids of every node, indexed by parent id.
    fn child_lists(&self) -> Vec<Vec<NodeId>> {
        let mut lists = vec![Vec::new(); self.nodes.len() + 1];

        for node in &self.nodes {
            if let Some(parent) = node.parent {
                lists[parent].push(node.id);
            }
        }

        lists
    }

    /// Renders the tree as indented text, two spaces per level.
    ///
    /// Indentation stops growing at `MAX_INDENT_DEPTH`; deeper nodes carry
    /// their depth in brackets instead.
    pub fn to_text(&self) -> String {
        let children = self.child_lists();
        let mut result = String::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT_ID, 0)];

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };

            result.push_str(&"  ".repeat(depth.min(MAX_INDENT_DEPTH)));
            if depth > MAX_INDENT_DEPTH {
                let _ = write!(result, "[{}] ", depth);
            }
            result.push_str(&node.label);
            result.push('\n');

            stack.extend(children[id].iter().rev().map(|child| (*child, depth + 1)));
        }

        result
    }

    /// Describes the tree in Graphviz DOT for an external renderer.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph G {\n");

        for node in &self.nodes {
            let label = node.label.replace('\\', "\\\\").replace('"', "\\\"");
            let _ = if node.parent.is_none() {
                writeln!(
                    dot,
                    "    node{} [label=\"{}\", shape=rect, style=filled, fillcolor=\"#A0D3E8\"];",
                    node.id, label
                )
            } else {
                writeln!(dot, "    node{} [label=\"{}\"];", node.id, label)
            };
        }

        for node in &self.nodes {
            if let Some(parent) = node.parent {
                let _ = writeln!(dot, "    node{} -> node{};", parent, node.id);
            }
        }

        dot.push_str("}\n");
        dot
    }
}

pub fn build_tree(tokens: &[Token], program_name: &str) -> SyntaxTree {
    let mut tree = SyntaxTree::new(program_name);
    let mut stack: Vec<NodeId> = vec![ROOT_ID];

    for token in tokens {
        let current = *stack.last().unwrap_or(&ROOT_ID);

        match token.kind {
            TokenKind::Keyword
            | TokenKind::AssignmentOperator
            | TokenKind::ComparisonOperator
            | TokenKind::ArithmeticOperator => {
                let id = tree.add(&token.value, current);
                stack.push(id);
            }
            TokenKind::Number | TokenKind::Identifier => {
                tree.add(&token.value, current);
            }
            TokenKind::Punctuation if token.value == ";" => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            _ => {}
        }
    }

    log::debug!("built syntax tree with {} nodes", tree.len());
    tree
}
