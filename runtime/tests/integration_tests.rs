use bilisp::{LispError, Value, render};
use bilisp_runtime::eval_str;
use pretty_assertions::assert_eq;

fn eval_expr(expr: &str) -> String {
    match eval_str(expr) {
        Ok(result) => render(&result),
        Err(e) => format!("Parse error: {e}"),
    }
}

fn eval_value(expr: &str) -> Value {
    eval_str(expr).expect("input should parse")
}

#[test]
fn test_addition() {
    assert_eq!(eval_value("(+ 1 2)"), Value::Integer(3));
    assert_eq!(eval_value("+ 1 2 3 4"), Value::Integer(10));
    assert_eq!(eval_expr("(+ 1 (* 2 3) (- 10 4))"), "13");
}

#[test]
fn test_inexact_division_promotes() {
    assert_eq!(eval_value("(/ 1 2)"), Value::Float(0.5));
    assert_eq!(eval_value("(/ 10 2)"), Value::Integer(5));
    assert_eq!(eval_expr("(/ 1 2)"), "0.500000");
}

#[test]
fn test_division_by_zero_propagates() {
    assert_eq!(
        eval_value("(+ 1 (/ 1 0))"),
        Value::Error(LispError::DivisionByZero)
    );
    assert_eq!(eval_expr("(* 2 (+ 1 (/ 1 0)))"), "Division by zero!");
    assert_eq!(eval_expr("(/ 1.5 0)"), "Division by zero!");
    assert_eq!(eval_expr("(% 7 0)"), "Division by zero!");
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval_value("(- 5)"), Value::Integer(-5));
    assert_eq!(eval_value("(- -2.5)"), Value::Float(2.5));
    assert_eq!(eval_value("(- 10 3 2)"), Value::Integer(5));
}

#[test]
fn test_float_promotion_is_sticky() {
    assert_eq!(eval_value("(+ 1 2.5 3)"), Value::Float(6.5));
    assert_eq!(eval_value("(* 2.0 3)"), Value::Float(6.0));
    assert_eq!(eval_value("(max 1 2.0 7)"), Value::Float(7.0));
}

#[test]
fn test_modulo() {
    assert_eq!(eval_value("(% 10 3)"), Value::Integer(1));
    assert_eq!(eval_value("(% -7 2)"), Value::Integer(-1));
    assert_eq!(eval_expr("(% 10.0 3)"), "Invalid operator");
}

#[test]
fn test_caret_is_invalid_operator() {
    assert_eq!(eval_expr("(^ 2 3)"), "Invalid operator");
    assert_eq!(eval_expr("(^ 2.0 3)"), "Invalid operator");
    assert_eq!(eval_expr("(^ 2)"), "Invalid operator");
    assert_eq!(eval_expr("(^ 2 {3})"), "Cannot operate on non-number!");
}

#[test]
fn test_max_min() {
    assert_eq!(eval_value("(max 3 9 4)"), Value::Integer(9));
    assert_eq!(eval_value("(min 3 9 -4)"), Value::Integer(-4));
    assert_eq!(eval_value("(min 1.5 2)"), Value::Float(1.5));
}

#[test]
fn test_max_min_ties_keep_accumulator() {
    assert_eq!(eval_expr("(max 0.0 -0.0)"), "0.000000");
    assert_eq!(eval_expr("(max -0.0 0.0)"), "-0.000000");
    assert_eq!(eval_expr("(min 0.0 -0.0)"), "0.000000");
    assert_eq!(eval_expr("(min -0.0 0.0)"), "-0.000000");
}

#[test]
fn test_list_primitives() {
    assert_eq!(eval_expr("(list 1 2 3)"), "{1 2 3}");
    assert_eq!(eval_expr("(head {1 2 3})"), "{1}");
    assert_eq!(eval_expr("(tail {1 2 3})"), "{2 3}");
    assert_eq!(eval_expr("(join {1 2} {3} {})"), "{1 2 3}");
    assert_eq!(eval_expr("(head (tail (list 1 2 3)))"), "{2}");
}

#[test]
fn test_qexpr_is_data() {
    assert_eq!(eval_expr("{+ 1 (/ 1 0)}"), "{+ 1 (/ 1 0)}");
    assert_eq!(eval_expr("(list {1 2} (+ 1 1))"), "{{1 2} 2}");
}

#[test]
fn test_eval() {
    assert_eq!(eval_value("(eval (list + 1 2))"), Value::Integer(3));
    assert_eq!(eval_value("(eval {* 2 (+ 1 2)})"), Value::Integer(6));
    assert_eq!(eval_expr("(eval (head {(+ 1 2) (+ 10 20)}))"), "3");
    assert_eq!(eval_expr("(eval {})"), "()");
}

#[test]
fn test_empty_and_singleton_expressions() {
    assert_eq!(eval_expr("()"), "()");
    assert_eq!(eval_expr(""), "()");
    assert_eq!(eval_expr("(5)"), "5");
    assert_eq!(eval_expr("((((7))))"), "7");
    assert_eq!(eval_expr("{}"), "{}");
}

#[test]
fn test_bad_operator() {
    assert_eq!(
        eval_expr("(1 2 3)"),
        "S-expression does not start with a symbol!"
    );
    assert_eq!(eval_expr("({+} 1)"), "S-expression does not start with a symbol!");
}

#[test]
fn test_non_number_operands() {
    assert_eq!(eval_expr("(+ 1 {2})"), "Cannot operate on non-number!");
    assert_eq!(eval_expr("(* max 2)"), "Cannot operate on non-number!");
}

#[test]
fn test_list_errors() {
    assert_eq!(eval_expr("(head {})"), "Function 'head' passed {}!");
    assert_eq!(eval_expr("(tail {})"), "Function 'tail' passed {}!");
    assert_eq!(
        eval_expr("(head {1} {2})"),
        "Function 'head' passed 2 arguments, expected 1!"
    );
    assert_eq!(
        eval_expr("(tail 1)"),
        "Function 'tail' passed Integer, expected Q-Expression!"
    );
    assert_eq!(
        eval_expr("(join {1} (+ 1 1))"),
        "Function 'join' passed Integer, expected Q-Expression!"
    );
    assert_eq!(
        eval_expr("(eval 3)"),
        "Function 'eval' passed Integer, expected Q-Expression!"
    );
}

#[test]
fn test_invalid_literals() {
    assert_eq!(eval_expr("(+ 1 99999999999999999999)"), "Invalid integer");
    let huge = format!("(+ 1 {}.5)", "9".repeat(400));
    assert_eq!(eval_expr(&huge), "Invalid float");
}

#[test]
fn test_parse_errors_do_not_reach_evaluator() {
    assert!(eval_str("(+ 1 2").is_err());
    assert!(eval_str("(car {1})").is_err());
    assert!(eval_expr("(+ 1 2").starts_with("Parse error: <stdin>:1:7:"));
}

#[test]
fn test_deep_nesting() {
    let mut expr = String::from("1");
    for _ in 0..500 {
        expr = format!("(+ {expr} 1)");
    }
    assert_eq!(eval_value(&expr), Value::Integer(501));
}
