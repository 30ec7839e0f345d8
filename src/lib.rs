//! Left-to-right arithmetic for button-driven calculators.
//!
//! ```
//! assert_eq!(keycalc::calculate("2+3*4"), "20.0");
//! assert_eq!(keycalc::calculate("5/0"), "Infinity");
//! ```

pub mod calculator;
pub mod config;

pub use calculator::{CalcResult, EvalError, calculate, calculate_result};
