//! Swap parameter calculation: raw amounts, slippage floor and deadline.

pub mod builder;
pub mod calc;

pub use builder::build_quote;
pub use calc::{
    amount_from_f64, compute_deadline, compute_min_output, compute_raw_amount,
    compute_raw_amount_f64, minimum_output, slippage_from_f64, to_decimal, validate_slippage,
};
