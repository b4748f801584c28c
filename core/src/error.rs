//! Error taxonomy.
//!
//! Evaluation errors are ordinary values: a `LispError` travels inside
//! `Value::Error` and renders as its message. Syntax errors are reported by
//! the grammar through `ParseError` and never reach the evaluator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LispError {
    /// Integer or float literal outside the representable range
    #[error("Invalid {kind}")]
    InvalidLiteral { kind: &'static str },

    #[error("Division by zero!")]
    DivisionByZero,

    #[error("Cannot operate on non-number!")]
    NonNumber,

    #[error("S-expression does not start with a symbol!")]
    NotASymbol,

    #[error("Invalid operator")]
    InvalidOperator,

    #[error("Function '{func}' passed {got} arguments, expected {expected}!")]
    WrongArity {
        func: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Function '{func}' passed {{}}!")]
    EmptyList { func: &'static str },

    #[error("Function '{func}' passed {got}, expected {expected}!")]
    TypeMismatch {
        func: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

impl LispError {
    pub fn invalid_integer() -> Self {
        LispError::InvalidLiteral { kind: "integer" }
    }

    pub fn invalid_float() -> Self {
        LispError::InvalidLiteral { kind: "float" }
    }
}

/// A syntax error produced while parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<stdin>:{line}:{column}: error: expected {expected}, found {found}")]
pub struct ParseError {
    /// Byte offset into the input
    pub position: usize,
    pub line: usize,
    pub column: usize,
    pub expected: String,
    pub found: String,
}

impl ParseError {
    pub fn new(input: &str, position: usize, expected: impl Into<String>) -> Self {
        let before = &input[..position];
        let line = before.matches('\n').count() + 1;
        let column = before.rfind('\n').map_or(position, |nl| position - nl - 1) + 1;
        let found = match input[position..].chars().next() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        };

        ParseError {
            position,
            line,
            column,
            expected: expected.into(),
            found,
        }
    }
}
