//! Sanitizing and tokenizing keypad input.
//!
//! Input is cut immediately before and after every operator character, so an
//! operator at either end leaves an empty operand behind. Runs of operators
//! are kept as separate operator tokens with nothing between them.

use std::fmt;

use super::error::EvalError;

/// A binary operator from the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a keypad character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single unit of a tokenized expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// Check if a character survives sanitizing.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || Operator::from_char(c).is_some()
}

/// Strip every character outside `0-9 . + - * /`, keeping order.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&c| is_allowed(c)).collect()
}

/// Split sanitized input into numbers and operators.
///
/// Fails on the first operand that is empty or not a decimal number.
pub fn tokenize(sanitized: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut operand_start = 0;

    for (offset, c) in sanitized.char_indices() {
        let Some(op) = Operator::from_char(c) else {
            continue;
        };

        // Adjacent operators have no operand between them, but a leading
        // operator still leaves an empty one in front.
        if offset > operand_start || offset == 0 {
            tokens.push(parse_operand(&sanitized[operand_start..offset], operand_start)?);
        }
        tokens.push(Token::Operator(op));
        operand_start = offset + c.len_utf8();
    }

    // Always present: the trailing run, or an empty operand after a final
    // operator (or for empty input).
    tokens.push(parse_operand(&sanitized[operand_start..], operand_start)?);

    Ok(tokens)
}

fn parse_operand(text: &str, offset: usize) -> Result<Token, EvalError> {
    if text.is_empty() {
        return Err(EvalError::EmptyOperand { offset });
    }

    let malformed = || EvalError::MalformedNumber {
        text: text.to_string(),
    };

    let mut digits = 0;
    let mut dots = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(malformed()),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(malformed());
    }

    text.parse().map(Token::Number).map_err(|_| malformed())
}
