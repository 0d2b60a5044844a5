use super::calc::{compute_deadline, compute_raw_amount, minimum_output, validate_slippage};
use crate::errors::Result;
use crate::models::{SwapQuoteRequest, SwapQuoteResult};
use crate::utils::format_decimal;
use bigdecimal::BigDecimal;
use tracing::debug;

/// Build every swap parameter for `request`, with `now` as the current Unix time.
///
/// Pure: the same request and `now` always give the same result.
pub fn build_quote(request: &SwapQuoteRequest, now: i64) -> Result<SwapQuoteResult> {
    validate_slippage(&request.slippage)?;

    let amount_in_raw = compute_raw_amount(&request.amount_in, request.decimals_in)?;
    let minimum = minimum_output(&request.amount_out, &request.slippage)?;
    let amount_out_min_raw = compute_raw_amount(&minimum, request.decimals_out)?;
    let deadline = compute_deadline(now, request.deadline_minutes)?;

    let slippage_percent = &request.slippage * BigDecimal::from(100u32);

    debug!(
        amount_in_raw = %amount_in_raw,
        amount_out_min_raw = %amount_out_min_raw,
        deadline,
        slippage_percent = %format_decimal(&slippage_percent),
        "[QUOTE] built"
    );

    Ok(SwapQuoteResult {
        amount_in_raw,
        amount_out_min_raw,
        deadline,
        slippage_percent,
        expected_output: request.amount_out.clone(),
        minimum_output: minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use num_bigint::BigInt;
    use std::str::FromStr;

    const NOW: i64 = 1_700_000_000;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn request(amount_in: &str, amount_out: &str, slippage: &str) -> SwapQuoteRequest {
        SwapQuoteRequest::new(dec(amount_in), dec(amount_out), dec(slippage), 6, 6, 5)
    }

    #[test]
    fn builds_full_quote() {
        let quote = build_quote(&request("100.5", "385", "0.01"), NOW).unwrap();

        assert_eq!(quote.amount_in_raw, BigInt::from(100_500_000u64));
        assert_eq!(quote.amount_out_min_raw, BigInt::from(381_150_000u64));
        assert_eq!(quote.deadline, NOW + 300);
        assert_eq!(quote.slippage_percent, dec("1"));
        assert_eq!(quote.expected_output, dec("385"));
        assert_eq!(quote.minimum_output, dec("381.15"));
    }

    #[test]
    fn uses_separate_decimals_per_side() {
        let req = SwapQuoteRequest::new(dec("1.5"), dec("2500"), dec("0.005"), 18, 6, 20);
        let quote = build_quote(&req, NOW).unwrap();

        assert_eq!(
            quote.amount_in_raw,
            BigInt::from_str("1500000000000000000").unwrap()
        );
        // 2500 * 0.995 = 2487.5
        assert_eq!(quote.amount_out_min_raw, BigInt::from(2_487_500_000u64));
        assert_eq!(quote.deadline, NOW + 1200);
    }

    #[test]
    fn single_sided_request_has_zero_input() {
        let req = SwapQuoteRequest::single_sided(dec("385"), dec("0.01"), 9, 5);
        let quote = build_quote(&req, NOW).unwrap();

        assert_eq!(quote.amount_in_raw, BigInt::from(0u32));
        assert_eq!(
            quote.amount_out_min_raw,
            BigInt::from_str("381150000000").unwrap()
        );
    }

    #[test]
    fn identical_inputs_give_identical_quotes() {
        let req = request("7.25", "13.333333", "0.03");
        let first = build_quote(&req, NOW).unwrap();
        let second = build_quote(&req, NOW).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_invalid_slippage() {
        let err = build_quote(&request("1", "385", "1.5"), NOW).unwrap_err();
        assert!(matches!(err, AppError::InvalidSlippage(_)));
    }

    #[test]
    fn rejects_zero_deadline() {
        let mut req = request("1", "385", "0.01");
        req.deadline_minutes = 0;
        let err = build_quote(&req, NOW).unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration(0)));
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = build_quote(&request("-1", "385", "0.01"), NOW).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));

        let err = build_quote(&request("1", "-385", "0.01"), NOW).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
    }

    #[test]
    fn slippage_checked_before_amounts() {
        let err = build_quote(&request("-1", "-385", "2"), NOW).unwrap_err();
        assert!(matches!(err, AppError::InvalidSlippage(_)));
    }
}
