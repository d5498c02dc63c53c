//! Tokenizer for the arithmetic expression language.
//!
//! Input is normalized first (whitespace stripped, `×`/`÷` folded to their
//! ASCII forms), then scanned left to right into [`Token`]s. The scan is
//! strict: any character that is not part of a number or in the operator
//! set fails with [`EvalError::InvalidExpression`].

use super::{EvalError, EvalOptions};

/// Binary operators accepted by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `a % b` = `a * (b / 100)`, not modulo. Only lexed when
    /// [`EvalOptions::enable_percent`] is set.
    Percent,
}

impl BinOp {
    /// Precedence tiers: `+ -` bind loosest, `* / %` tightest. All
    /// operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div | BinOp::Percent => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Percent => '%',
        }
    }
}

/// A lexed element of the expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(BinOp),
    OpenParen,
    CloseParen,
}

/// Strip whitespace and fold the display glyphs for multiply/divide to
/// their canonical ASCII operators.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Tokenize an expression string.
///
/// Numbers are a maximal run of digits optionally followed by `.` and at
/// least one more digit; a dangling `.` is rejected. An empty token
/// sequence is rejected so that `evaluate("")` fails rather than producing
/// a phantom value.
pub fn tokenize(input: &str, options: &EvalOptions) -> Result<Vec<Token>, EvalError> {
    let normalized = normalize(input);
    let mut tokens = Vec::new();
    let mut chars = normalized.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            '0'..='9' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if chars.peek() == Some(&'.') {
                    literal.push('.');
                    chars.next();
                    let mut saw_fraction = false;
                    while let Some(&d) = chars.peek() {
                        if d.is_ascii_digit() {
                            literal.push(d);
                            chars.next();
                            saw_fraction = true;
                        } else {
                            break;
                        }
                    }
                    if !saw_fraction {
                        return Err(EvalError::InvalidExpression(format!(
                            "number '{literal}' is missing digits after the decimal point"
                        )));
                    }
                }
                let value = literal.parse::<f64>().map_err(|_| {
                    EvalError::InvalidExpression(format!("unparseable number '{literal}'"))
                })?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                tokens.push(Token::Op(BinOp::Add));
                chars.next();
            }
            '-' => {
                tokens.push(Token::Op(BinOp::Sub));
                chars.next();
            }
            '*' => {
                tokens.push(Token::Op(BinOp::Mul));
                chars.next();
            }
            '/' => {
                tokens.push(Token::Op(BinOp::Div));
                chars.next();
            }
            '%' if options.enable_percent => {
                tokens.push(Token::Op(BinOp::Percent));
                chars.next();
            }
            '(' => {
                tokens.push(Token::OpenParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::CloseParen);
                chars.next();
            }
            other => {
                return Err(EvalError::InvalidExpression(format!(
                    "disallowed character '{other}'"
                )));
            }
        }
    }

    if tokens.is_empty() {
        return Err(EvalError::InvalidExpression("empty expression".to_string()));
    }

    Ok(tokens)
}
