//! Command-line arguments.

use crate::config::QuoteDefaults;
use crate::errors::Result;
use crate::models::SwapQuoteRequest;
use crate::quote::{amount_from_f64, slippage_from_f64};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Validate and prepare DEX swap parameters")]
pub struct Args {
    /// Expected output amount (e.g., 385 for 385 TRX)
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Slippage tolerance (0.01 for 1%)
    #[arg(long, default_value_t = QuoteDefaults::SLIPPAGE, allow_negative_numbers = true)]
    pub slippage: f64,

    /// Token decimals of the output token
    #[arg(long, default_value_t = QuoteDefaults::DECIMALS)]
    pub decimals: u8,

    /// Deadline in minutes from now
    #[arg(long, default_value_t = QuoteDefaults::DEADLINE_MINUTES, allow_negative_numbers = true)]
    pub deadline_minutes: i64,

    /// Input amount to convert to its raw form as well
    #[arg(long, allow_negative_numbers = true)]
    pub amount_in: Option<f64>,

    /// Token decimals of the input token (defaults to --decimals)
    #[arg(long)]
    pub decimals_in: Option<u8>,

    /// Print the quote as a single JSON object
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Validate the numeric flags and turn them into a quote request.
    pub fn to_request(&self) -> Result<SwapQuoteRequest> {
        let slippage = slippage_from_f64(self.slippage)?;
        let amount_out = amount_from_f64(self.amount)?;

        let request = match self.amount_in {
            Some(amount_in) => SwapQuoteRequest::new(
                amount_from_f64(amount_in)?,
                amount_out,
                slippage,
                self.decimals_in.unwrap_or(self.decimals),
                self.decimals,
                self.deadline_minutes,
            ),
            None => SwapQuoteRequest::single_sided(
                amount_out,
                slippage,
                self.decimals,
                self.deadline_minutes,
            ),
        };
        Ok(request)
    }
}
