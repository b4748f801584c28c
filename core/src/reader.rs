//! Syntax tree → Value.

use crate::error::LispError;
use crate::syntax::{SyntaxNode, SyntaxTree, Tag};
use crate::value::Value;

/// Build a value tree from a parsed line. Total: malformed literals become
/// `Value::Error` in place rather than failing the read.
pub fn read(tree: &SyntaxTree) -> Value {
    read_node(tree, &tree.root)
}

fn read_node(tree: &SyntaxTree, node: &SyntaxNode) -> Value {
    match node.tag {
        Tag::Integer => read_integer(&node.contents),
        Tag::Float => read_float(tree.text_of(node)),
        Tag::Symbol => Value::Symbol(node.contents.clone()),
        Tag::Root | Tag::SExpr => Value::SExpr(read_children(tree, node)),
        Tag::QExpr => Value::QExpr(read_children(tree, node)),
        // Only reachable when handed trivia directly
        Tag::Punct | Tag::Meta => Value::sexpr(),
    }
}

fn read_children(tree: &SyntaxTree, node: &SyntaxNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !child.is_trivia())
        .map(|child| read_node(tree, child))
        .collect()
}

fn read_integer(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(e) => {
            tracing::debug!(literal = text, error = %e, "invalid integer literal");
            Value::Error(LispError::invalid_integer())
        }
    }
}

fn read_float(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Float(x),
        Ok(_) => {
            tracing::debug!(literal = text, "float literal overflows f64");
            Value::Error(LispError::invalid_float())
        }
        Err(e) => {
            tracing::debug!(literal = text, error = %e, "invalid float literal");
            Value::Error(LispError::invalid_float())
        }
    }
}
