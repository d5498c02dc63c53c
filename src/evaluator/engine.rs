//! Two-stack shunting-yard evaluation.

use super::lexer::{BinOp, Token, tokenize};
use super::{EvalError, EvalOptions};

/// Operator-stack slot: either a pending binary operator or an open paren
/// acting as a precedence floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Op(BinOp),
    OpenParen,
}

/// Evaluate an expression with default options (`%` disabled).
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    evaluate_with(input, &EvalOptions::default())
}

/// Evaluate an expression.
///
/// Classic two-stack pass: numbers go on a value stack, operators wait on
/// an operator stack and are applied whenever a tighter-or-equal-binding
/// operator is already on top (equal precedence pops too, which gives
/// left-associativity). A `-` in unary position is rewritten as `0 - x` by
/// pushing an implicit zero; it otherwise shares binary subtraction's
/// precedence.
pub fn evaluate_with(input: &str, options: &EvalOptions) -> Result<f64, EvalError> {
    let tokens = tokenize(input, options)?;

    let mut ops: Vec<StackOp> = Vec::new();
    let mut values: Vec<f64> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Number(n) => values.push(n),
            Token::OpenParen => ops.push(StackOp::OpenParen),
            Token::CloseParen => loop {
                match ops.pop() {
                    Some(StackOp::OpenParen) => break,
                    Some(StackOp::Op(op)) => apply(op, &mut values)?,
                    None => {
                        return Err(EvalError::InvalidExpression(
                            "unbalanced parentheses".to_string(),
                        ));
                    }
                }
            },
            Token::Op(op) => {
                if op == BinOp::Sub && is_unary_position(&tokens, i) {
                    values.push(0.0);
                }
                while let Some(&StackOp::Op(top)) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        ops.pop();
                        apply(top, &mut values)?;
                    } else {
                        break;
                    }
                }
                ops.push(StackOp::Op(op));
            }
        }
    }

    while let Some(slot) = ops.pop() {
        match slot {
            StackOp::OpenParen => {
                return Err(EvalError::InvalidExpression("unbalanced parentheses".to_string()));
            }
            StackOp::Op(op) => apply(op, &mut values)?,
        }
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(EvalError::InvalidExpression(
            "expression does not reduce to a single value".to_string(),
        )),
    }
}

/// A `-` is unary when nothing could supply its left operand: at the start
/// of the expression, or right after `(` or another operator.
fn is_unary_position(tokens: &[Token], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    matches!(tokens[index - 1], Token::OpenParen | Token::Op(_))
}

/// Pop the top two values and push the operator's result.
fn apply(op: BinOp, values: &mut Vec<f64>) -> Result<(), EvalError> {
    let b = values.pop();
    let a = values.pop();
    let (Some(a), Some(b)) = (a, b) else {
        return Err(EvalError::InvalidExpression(format!(
            "operator '{}' is missing an operand",
            op.symbol()
        )));
    };
    let result = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        BinOp::Percent => a * (b / 100.0),
    };
    values.push(result);
    Ok(())
}
