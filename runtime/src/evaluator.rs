use bilisp::{LispError, Value};

use crate::builtins;

// ============================================================================
// Evaluator
// ============================================================================

/// Remaining stack below which a nested reduction switches to a fresh segment
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Reduce a value. Everything except an S-expression evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(children) => {
            stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || reduce(children))
        }
        other => other,
    }
}

/// Reduce the children of an S-expression.
///
/// Children are evaluated left to right first; the first error among the
/// results becomes the result of the whole expression.
pub fn reduce(children: Vec<Value>) -> Value {
    let mut children: Vec<Value> = children.into_iter().map(eval).collect();

    if let Some(index) = children.iter().position(Value::is_error) {
        return children.swap_remove(index);
    }

    match children.len() {
        0 => Value::SExpr(children),
        1 => children.remove(0),
        _ => apply_form(children),
    }
}

fn apply_form(children: Vec<Value>) -> Value {
    let mut children = children.into_iter();
    match children.next() {
        Some(Value::Symbol(name)) => builtins::apply(&name, children.collect()),
        _ => Value::Error(LispError::NotASymbol),
    }
}
