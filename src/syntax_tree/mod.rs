//! Syntax tree module.
//!
//! Builds a rooted tree of labelled nodes from the token stream and
//! describes it for display. Drawing the tree is left to whoever consumes
//! the description.

pub mod syntax_tree;

#[cfg(test)]
mod tests;
