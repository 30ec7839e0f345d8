//! Calculator module for evaluating keypad expressions.
//!
//! This module provides functionality to:
//! - Detect input that is already a plain number
//! - Sanitize and tokenize keypad input
//! - Reduce tokens left to right into a number
//! - Format results the way keypad displays expect

mod error;
mod evaluation;
mod format;
mod number;
mod tokens;

pub use error::EvalError;
pub use evaluation::{
    CalcResult, ERROR_MARKER, calculate, calculate_result, evaluate_expression,
    try_evaluate_expression,
};
pub use format::{format_number, write_number};
pub use number::parse_plain_number;
pub use tokens::{Operator, Token, is_allowed, sanitize, tokenize};
