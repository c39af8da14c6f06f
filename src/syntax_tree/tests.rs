use crate::lexer::{
    lexer::tokenize,
    tokens::{ReservedWords, Token},
};

use super::syntax_tree::{build_tree, MAX_INDENT_DEPTH};

fn scan(source: &str) -> Vec<Token> {
    tokenize(source, &ReservedWords::default())
}

#[test]
fn test_root_only_for_empty_stream() {
    let tree = build_tree(&[], "Empty");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().id, 1);
    assert_eq!(tree.root().label, "Program: Empty");
    assert_eq!(tree.root().parent, None);
}

#[test]
fn test_keyword_nests_and_semicolon_pops() {
    let tree = build_tree(&scan("if x ; y"), "Main");

    let if_node = tree.node(2).unwrap();
    let x_node = tree.node(3).unwrap();
    let y_node = tree.node(4).unwrap();

    assert_eq!(if_node.label, "if");
    assert_eq!(if_node.parent, Some(1));
    assert_eq!(x_node.label, "x");
    assert_eq!(x_node.parent, Some(2));
    assert_eq!(y_node.label, "y");
    assert_eq!(y_node.parent, Some(1));
}

#[test]
fn test_operators_deepen_the_tree() {
    let tree = build_tree(&scan("x = a + 1"), "Main");
    let labels: Vec<(&str, Option<usize>)> = tree
        .nodes()
        .iter()
        .map(|node| (node.label.as_str(), node.parent))
        .collect();

    assert_eq!(
        labels,
        vec![
            ("Program: Main", None),
            ("x", Some(1)),
            ("=", Some(1)),
            ("a", Some(3)),
            ("+", Some(3)),
            ("1", Some(5)),
        ]
    );
}

#[test]
fn test_semicolon_never_pops_root() {
    let tree = build_tree(&scan("; ; x"), "Main");

    assert_eq!(tree.parent_of(2).unwrap().id, 1);
}

#[test]
fn test_other_tokens_are_ignored() {
    let tree = build_tree(&scan("'s' # c\n( ) , and"), "Main");

    assert_eq!(tree.len(), 1);
}

#[test]
fn test_children_and_parent_lookup() {
    let tree = build_tree(&scan("while a < b ; c"), "Main");

    let root_children: Vec<&str> = tree
        .children(1)
        .iter()
        .map(|node| node.label.as_str())
        .collect();
    assert_eq!(root_children, vec!["while"]);
    assert_eq!(tree.parent_of(5).unwrap().label, "<");
    assert!(tree.parent_of(1).is_none());
    assert!(tree.node(0).is_none());
    assert!(tree.node(99).is_none());
}

#[test]
fn test_text_rendering() {
    let tree = build_tree(&scan("if x ; y"), "Main");

    assert_eq!(tree.to_text(), "Program: Main\n  if\n    x\n  y\n");
}

#[test]
fn test_dot_description() {
    let tree = build_tree(&scan("x = \"q\" ; y"), "Demo \"1\"");
    let dot = tree.to_dot();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.contains("node1 [label=\"Program: Demo \\\"1\\\"\", shape=rect"));
    assert!(dot.contains("node1 -> node2;"));
    assert!(dot.contains("node1 -> node3;"));
    assert!(dot.contains("node1 -> node4;"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_text_rendering_caps_indentation() {
    let tree = build_tree(&scan(&"+ ".repeat(MAX_INDENT_DEPTH + 2)), "Main");
    let text = tree.to_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), MAX_INDENT_DEPTH + 3);
    assert_eq!(lines[MAX_INDENT_DEPTH], format!("{}+", "  ".repeat(MAX_INDENT_DEPTH)));
    assert_eq!(
        lines[MAX_INDENT_DEPTH + 1],
        format!("{}[{}] +", "  ".repeat(MAX_INDENT_DEPTH), MAX_INDENT_DEPTH + 1)
    );
}

#[test]
fn test_text_rendering_of_deeply_nested_operators() {
    let tree = build_tree(&scan(&"x + ".repeat(50_000)), "Main");
    let text = tree.to_text();

    assert_eq!(tree.len(), 100_001);
    assert_eq!(text.lines().count(), tree.len());
    assert!(text.len() < tree.len() * (2 * MAX_INDENT_DEPTH + 16));
    assert!(text.ends_with("[50000] +\n"));
}
