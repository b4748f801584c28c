//! Builtin dispatcher
//!
//! Arithmetic folds and list primitives. Every builtin consumes its operands
//! and returns `Result`; `apply` turns a failure into an error value.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use bilisp::{LispError, Value};

use crate::evaluator;

pub type Builtin = fn(Vec<Value>) -> Result<Value, LispError>;

static BUILTINS: Lazy<FxHashMap<&'static str, Builtin>> = Lazy::new(|| {
    let mut table: FxHashMap<&'static str, Builtin> = FxHashMap::default();

    table.insert("+", |args| arithmetic(Operator::Add, args));
    table.insert("-", |args| arithmetic(Operator::Sub, args));
    table.insert("*", |args| arithmetic(Operator::Mul, args));
    table.insert("/", |args| arithmetic(Operator::Div, args));
    table.insert("%", |args| arithmetic(Operator::Rem, args));
    table.insert("^", unsupported);
    table.insert("max", |args| arithmetic(Operator::Max, args));
    table.insert("min", |args| arithmetic(Operator::Min, args));

    table.insert("list", list);
    table.insert("head", head);
    table.insert("tail", tail);
    table.insert("join", join);
    table.insert("eval", eval);

    table
});

/// Apply the builtin named `name` to `operands`.
pub fn apply(name: &str, operands: Vec<Value>) -> Value {
    tracing::trace!(builtin = name, argc = operands.len(), "apply");

    let result = match BUILTINS.get(name) {
        Some(builtin) => builtin(operands),
        None => Err(LispError::InvalidOperator),
    };

    result.unwrap_or_else(Value::Error)
}

// ============================================================================
// Arithmetic
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Max,
    Min,
}

impl Operator {
    fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Max => "max",
            Operator::Min => "min",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    fn negate(self) -> Self {
        match self {
            Number::Int(n) => Number::Int(n.wrapping_neg()),
            Number::Float(x) => Number::Float(-x),
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = LispError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(Number::Int(n)),
            Value::Float(x) => Ok(Number::Float(x)),
            _ => Err(LispError::NonNumber),
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Value::Integer(n),
            Number::Float(x) => Value::Float(x),
        }
    }
}

/// Every operand as a number, or `NonNumber` at the first one that is not
fn as_numbers(operands: Vec<Value>) -> Result<Vec<Number>, LispError> {
    operands.into_iter().map(Number::try_from).collect()
}

fn arithmetic(op: Operator, operands: Vec<Value>) -> Result<Value, LispError> {
    let mut numbers = as_numbers(operands)?.into_iter();
    let Some(mut x) = numbers.next() else {
        return Err(LispError::WrongArity {
            func: op.name(),
            expected: 1,
            got: 0,
        });
    };

    if op == Operator::Sub && numbers.len() == 0 {
        return Ok(x.negate().into());
    }

    for y in numbers {
        x = match (x, y) {
            (Number::Int(a), Number::Int(b)) => integer_op(op, a, b)?,
            _ => Number::Float(float_op(op, x.to_f64(), y.to_f64())?),
        };
    }

    Ok(x.into())
}

fn integer_op(op: Operator, a: i64, b: i64) -> Result<Number, LispError> {
    let result = match op {
        Operator::Add => Number::Int(a.wrapping_add(b)),
        Operator::Sub => Number::Int(a.wrapping_sub(b)),
        Operator::Mul => Number::Int(a.wrapping_mul(b)),
        Operator::Div => {
            if b == 0 {
                return Err(LispError::DivisionByZero);
            }
            if a.wrapping_rem(b) == 0 {
                Number::Int(a.wrapping_div(b))
            } else {
                Number::Float(a as f64 / b as f64)
            }
        }
        Operator::Rem => {
            if b == 0 {
                return Err(LispError::DivisionByZero);
            }
            Number::Int(a.wrapping_rem(b))
        }
        Operator::Max => Number::Int(if b > a { b } else { a }),
        Operator::Min => Number::Int(if b < a { b } else { a }),
    };
    Ok(result)
}

fn float_op(op: Operator, a: f64, b: f64) -> Result<f64, LispError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(LispError::DivisionByZero),
        Operator::Div => Ok(a / b),
        Operator::Max => Ok(if b > a { b } else { a }),
        Operator::Min => Ok(if b < a { b } else { a }),
        // Modulo has no float form
        Operator::Rem => Err(LispError::InvalidOperator),
    }
}

/// `^` is in the grammar's vocabulary but has no arithmetic defined for it.
/// Operands are still checked so a non-number is reported first.
fn unsupported(operands: Vec<Value>) -> Result<Value, LispError> {
    as_numbers(operands)?;
    Err(LispError::InvalidOperator)
}

// ============================================================================
// List Primitives
// ============================================================================

const QEXPR: &str = "Q-Expression";

/// The contents of the sole Q-expression operand
fn single_qexpr(func: &'static str, mut operands: Vec<Value>) -> Result<Vec<Value>, LispError> {
    let got = operands.len();
    match operands.pop() {
        Some(Value::QExpr(items)) if got == 1 => Ok(items),
        Some(other) if got == 1 => Err(LispError::TypeMismatch {
            func,
            expected: QEXPR,
            got: other.type_name(),
        }),
        _ => Err(LispError::WrongArity {
            func,
            expected: 1,
            got,
        }),
    }
}

/// `(list a b ...)` => `{a b ...}`
fn list(operands: Vec<Value>) -> Result<Value, LispError> {
    Ok(Value::QExpr(operands))
}

/// `(head {a b ...})` => `{a}`
fn head(operands: Vec<Value>) -> Result<Value, LispError> {
    let mut items = single_qexpr("head", operands)?;
    if items.is_empty() {
        return Err(LispError::EmptyList { func: "head" });
    }
    items.truncate(1);
    Ok(Value::QExpr(items))
}

/// `(tail {a b ...})` => `{b ...}`
fn tail(operands: Vec<Value>) -> Result<Value, LispError> {
    let mut items = single_qexpr("tail", operands)?;
    if items.is_empty() {
        return Err(LispError::EmptyList { func: "tail" });
    }
    items.remove(0);
    Ok(Value::QExpr(items))
}

/// `(join {a} {b c} ...)` => `{a b c ...}`
fn join(operands: Vec<Value>) -> Result<Value, LispError> {
    if let Some(bad) = operands.iter().find(|v| !matches!(v, Value::QExpr(_))) {
        return Err(LispError::TypeMismatch {
            func: "join",
            expected: QEXPR,
            got: bad.type_name(),
        });
    }

    let mut joined = Vec::new();
    for operand in operands {
        if let Value::QExpr(items) = operand {
            joined.extend(items);
        }
    }
    Ok(Value::QExpr(joined))
}

/// `(eval {+ 1 2})` => `3`
fn eval(operands: Vec<Value>) -> Result<Value, LispError> {
    let items = single_qexpr("eval", operands)?;
    Ok(evaluator::eval(Value::SExpr(items)))
}
