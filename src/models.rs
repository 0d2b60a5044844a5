//! Shared data structures used throughout the application.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::Serialize;

/// Human-readable inputs for a single swap quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuoteRequest {
    /// Amount of the input token (e.g. 100.5 USDT).
    pub amount_in: BigDecimal,
    /// Expected amount of the output token before slippage.
    pub amount_out: BigDecimal,
    /// Slippage tolerance as a fraction, 0.01 = 1%.
    pub slippage: BigDecimal,
    /// Input token decimals (e.g. 6 for USDT)
    pub decimals_in: u8,
    /// Output token decimals
    pub decimals_out: u8,
    /// Minutes from now until the transaction expires.
    pub deadline_minutes: i64,
}

impl SwapQuoteRequest {
    pub fn new(
        amount_in: BigDecimal,
        amount_out: BigDecimal,
        slippage: BigDecimal,
        decimals_in: u8,
        decimals_out: u8,
        deadline_minutes: i64,
    ) -> Self {
        Self {
            amount_in,
            amount_out,
            slippage,
            decimals_in,
            decimals_out,
            deadline_minutes,
        }
    }

    /// Request for the common case where only the expected output is known.
    /// The input side is zero and shares the output token's decimals.
    pub fn single_sided(
        amount_out: BigDecimal,
        slippage: BigDecimal,
        decimals: u8,
        deadline_minutes: i64,
    ) -> Self {
        Self::new(
            BigDecimal::from(0u32),
            amount_out,
            slippage,
            decimals,
            decimals,
            deadline_minutes,
        )
    }
}

/// Computed swap parameters, ready to be passed to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuoteResult {
    /// `amount_in` in the input token's smallest unit.
    pub amount_in_raw: BigInt,
    /// Minimum acceptable output in the output token's smallest unit.
    pub amount_out_min_raw: BigInt,
    /// Unix timestamp (seconds).
    pub deadline: i64,
    pub slippage_percent: BigDecimal,
    pub expected_output: BigDecimal,
    pub minimum_output: BigDecimal,
}

/// JSON view of a [`SwapQuoteResult`]. Big numbers are rendered as strings
/// so no precision is lost by JSON consumers.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub amount_in: String,
    pub amount_out_min: String,
    pub deadline: i64,
    pub slippage_percent: String,
    pub expected_output: String,
    pub minimum_output: String,
}
