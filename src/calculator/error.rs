//! Errors raised while turning calculator input into a number.

use thiserror::Error;

/// Failure inside the evaluator.
///
/// None of these reach the caller of [`calculate`](super::calculate): the
/// inner layer turns them into `0.0` and the outer layer into the error
/// marker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operand slot between operators (or at either end) was empty.
    #[error("empty operand at offset {offset}")]
    EmptyOperand { offset: usize },

    /// An operand contained digits and dots that do not form a number.
    #[error("malformed number '{text}'")]
    MalformedNumber { text: String },

    /// The token sequence did not start with a number.
    #[error("expression does not start with a number")]
    MissingLeadingOperand,

    /// Writing the result text failed.
    #[error("failed to format result")]
    Format(#[from] std::fmt::Error),
}
