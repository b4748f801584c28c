use std::fmt;

use crate::error::LispError;

// ============================================================================
// Core Type System
// ============================================================================

/// A runtime datum.
///
/// List variants own their children outright, so a `Value` is always a tree:
/// dropping the root releases every node beneath it exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    /// Operator or function name
    Symbol(String),
    /// Evaluable list
    SExpr(Vec<Value>),
    /// Quoted list, never reduced by the evaluator
    QExpr(Vec<Value>),
    /// Terminal result; propagates unchanged
    Error(LispError),
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    pub fn error(err: LispError) -> Self {
        Value::Error(err)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Short name used in type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Error(_) => "Error",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<LispError> for Value {
    fn from(err: LispError) -> Self {
        Value::Error(err)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn write_children(
    f: &mut fmt::Formatter,
    open: char,
    children: &[Value],
    close: char,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            // printf spelling for NaN; infinities already print as `inf`
            Value::Float(x) if x.is_nan() => {
                write!(f, "{}", if x.is_sign_negative() { "-nan" } else { "nan" })
            }
            Value::Float(x) => write!(f, "{x:.6}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::SExpr(children) => write_children(f, '(', children, ')'),
            Value::QExpr(children) => write_children(f, '{', children, '}'),
            Value::Error(err) => write!(f, "{err}"),
        }
    }
}

/// Canonical textual form of a value.
pub fn render(value: &Value) -> String {
    value.to_string()
}
