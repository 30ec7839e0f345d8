//! Expression evaluation for keypad input.
//!
//! Two containment layers sit between the caller and a failure:
//! - the inner layer ([`evaluate_expression`]) turns any tokenizing or
//!   reduction error into `0.0`;
//! - the outer layer ([`calculate_result`]) turns any remaining error into
//!   the [`ERROR_MARKER`].
//!
//! Operators are applied strictly left to right with no precedence.

use tracing::{debug, trace, warn};

use super::error::EvalError;
use super::format::write_number;
use super::number::parse_plain_number;
use super::tokens::{Operator, Token, sanitize, tokenize};

/// Text shown instead of a number when the outer layer fails.
pub const ERROR_MARKER: &str = "Error";

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Evaluation produced a number, including infinities and NaN.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// The value formatted for display.
        display: String,
    },
    /// Evaluation failed at the outer boundary.
    Error {
        /// The original expression.
        expression: String,
        /// Always [`ERROR_MARKER`].
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error marker).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate keypad input and return the text to display.
pub fn calculate(input: &str) -> String {
    calculate_result(input).display().to_string()
}

/// Evaluate keypad input, containing every failure as [`CalcResult::Error`].
pub fn calculate_result(input: &str) -> CalcResult {
    let expression = input.to_string();

    match try_calculate(input) {
        Ok((value, display)) => CalcResult::Success {
            expression,
            value,
            display,
        },
        Err(err) => {
            // The inner layer already absorbs evaluation errors, so only a
            // formatting failure can land here.
            warn!(%expression, error = %err, "calculation failed");
            CalcResult::Error {
                expression,
                message: ERROR_MARKER.to_string(),
            }
        }
    }
}

fn try_calculate(input: &str) -> Result<(f64, String), EvalError> {
    let value = match parse_plain_number(input) {
        Some(value) => {
            trace!(input, value, "plain number");
            value
        }
        None => evaluate_expression(input),
    };

    let mut display = String::new();
    write_number(&mut display, value)?;
    Ok((value, display))
}

/// Evaluate an expression, falling back to `0.0` on any error.
pub fn evaluate_expression(input: &str) -> f64 {
    try_evaluate_expression(input).unwrap_or_else(|err| {
        debug!(input, error = %err, "expression rejected, using 0");
        0.0
    })
}

/// Sanitize, tokenize and reduce an expression.
pub fn try_evaluate_expression(input: &str) -> Result<f64, EvalError> {
    let sanitized = sanitize(input);
    let tokens = tokenize(&sanitized)?;
    reduce(&tokens)
}

/// Fold tokens left to right.
///
/// A number with no pending operator is skipped.
fn reduce(tokens: &[Token]) -> Result<f64, EvalError> {
    let (mut acc, rest) = match tokens.split_first() {
        Some((Token::Number(first), rest)) => (*first, rest),
        _ => return Err(EvalError::MissingLeadingOperand),
    };

    let mut pending: Option<Operator> = None;
    for token in rest {
        match *token {
            Token::Operator(op) => pending = Some(op),
            Token::Number(rhs) => {
                if let Some(op) = pending {
                    acc = op.apply(acc, rhs);
                }
            }
        }
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(calculate("5"), "5.0");
        assert_eq!(calculate("2+3"), "5.0");
        assert_eq!(calculate("10-4"), "6.0");
        assert_eq!(calculate("1.5*4"), "6.0");
        assert_eq!(calculate("7/2"), "3.5");
    }

    #[test]
    fn test_no_operator_precedence() {
        assert_eq!(calculate("2+3*4"), "20.0");
        assert_eq!(calculate("10-2/4"), "2.0");
        assert_eq!(calculate("1+1+1*0"), "0.0");
    }

    #[test]
    fn test_division_by_zero() {
        let result = calculate_result("5/0");
        assert!(result.is_success());
        assert_eq!(result.display(), "Infinity");
        assert_eq!(result.value(), Some(f64::INFINITY));

        assert_eq!(calculate("0/0"), "NaN");
        assert_eq!(calculate("5-10/0"), "-Infinity");
    }

    #[test]
    fn test_invalid_input_falls_back_to_zero() {
        assert_eq!(calculate("abc"), "0.0");
        assert_eq!(calculate(""), "0.0");
        assert_eq!(calculate("2+"), "0.0");
        assert_eq!(calculate("1.2.3+4"), "0.0");
        assert_eq!(calculate("2+3.5.1"), "0.0");
    }

    #[test]
    fn test_no_unary_minus() {
        assert_eq!(calculate("-5"), "-5.0");
        assert_eq!(calculate("-5+3"), "0.0");
    }

    #[test]
    fn test_extraneous_characters_stripped() {
        assert_eq!(calculate("1 + 2"), "3.0");
        assert_eq!(calculate("(2+3)*4"), "20.0");
        assert_eq!(calculate("12kg+3"), "15.0");
    }

    #[test]
    fn test_repeated_operator_uses_last() {
        assert_eq!(calculate("2+*3"), "6.0");
        assert_eq!(calculate("8*/2"), "4.0");
    }

    #[test]
    fn test_plain_number_fast_path() {
        assert_eq!(calculate(" 42 "), "42.0");
        assert_eq!(calculate("2e3"), "2000.0");
        assert_eq!(calculate("Infinity"), "Infinity");
        // Not a plain number: letters are stripped and the rest evaluated.
        assert_eq!(calculate("2e3+1"), "24.0");
    }

    #[test]
    fn test_result_round_trips_through_fast_path() {
        for input in ["5", "2+3*4", "7/2", "5/0", "0/0", "abc", "99999*999", "1/3"] {
            let first = calculate(input);
            assert_eq!(calculate(&first), first, "input {input}");
        }
    }

    #[test]
    fn test_result_accessors() {
        let result = calculate_result("2+3");
        assert_eq!(result.expression(), "2+3");
        assert!(result.is_success());
        assert_eq!(result.value(), Some(5.0));
        assert_eq!(result.display(), "5.0");

        let error = CalcResult::Error {
            expression: "2+3".to_string(),
            message: ERROR_MARKER.to_string(),
        };
        assert_eq!(error.expression(), "2+3");
        assert!(!error.is_success());
        assert_eq!(error.value(), None);
        assert_eq!(error.display(), "Error");
    }

    #[test]
    fn test_inner_layer_errors() {
        assert_eq!(try_evaluate_expression("2+3"), Ok(5.0));
        assert_eq!(
            try_evaluate_expression("abc"),
            Err(EvalError::EmptyOperand { offset: 0 })
        );
        assert_eq!(evaluate_expression("abc"), 0.0);
    }

    #[test]
    fn test_reduce_skips_number_without_operator() {
        let tokens = [Token::Number(2.0), Token::Number(9.0)];
        assert_eq!(reduce(&tokens), Ok(2.0));
    }

    #[test]
    fn test_reduce_requires_leading_number() {
        assert_eq!(reduce(&[]), Err(EvalError::MissingLeadingOperand));
        assert_eq!(
            reduce(&[Token::Operator(Operator::Add), Token::Number(1.0)]),
            Err(EvalError::MissingLeadingOperand)
        );
    }
}
