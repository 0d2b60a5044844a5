//! Output formats for a computed quote.

use crate::errors::Result;
use crate::models::{QuoteReport, SwapQuoteResult};
use crate::utils::{format_decimal, format_local_timestamp};

impl From<&SwapQuoteResult> for QuoteReport {
    fn from(result: &SwapQuoteResult) -> Self {
        Self {
            amount_in: result.amount_in_raw.to_string(),
            amount_out_min: result.amount_out_min_raw.to_string(),
            deadline: result.deadline,
            slippage_percent: format_decimal(&result.slippage_percent),
            expected_output: format_decimal(&result.expected_output),
            minimum_output: format_decimal(&result.minimum_output),
        }
    }
}

/// Text report with the deadline shown in local time.
pub fn text_report(result: &SwapQuoteResult, show_amount_in: bool) -> Result<String> {
    let readable = format_local_timestamp(result.deadline)?;
    Ok(render_text(result, show_amount_in, &readable))
}

/// Line-oriented report. The raw input amount line is only present when the
/// caller supplied an input amount.
pub fn render_text(result: &SwapQuoteResult, show_amount_in: bool, readable_deadline: &str) -> String {
    let mut lines = vec![
        format!("Expected output: {}", format_decimal(&result.expected_output)),
        format!("Slippage: {}%", format_decimal(&result.slippage_percent)),
        format!("Minimum output: {}", format_decimal(&result.minimum_output)),
        "---".to_string(),
        format!("Minimum amount (raw): {}", result.amount_out_min_raw),
    ];
    if show_amount_in {
        lines.push(format!("Amount in (raw): {}", result.amount_in_raw));
    }
    lines.push(format!("Deadline: {}", result.deadline));
    lines.push(format!("Deadline (readable): {readable_deadline}"));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Single-line JSON report.
pub fn json_report(result: &SwapQuoteResult) -> Result<String> {
    Ok(serde_json::to_string(&QuoteReport::from(result))?)
}
