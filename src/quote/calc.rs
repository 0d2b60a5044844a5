use crate::errors::{AppError, Result};
use crate::utils::format_decimal;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed};
use std::str::FromStr;
use tracing::debug;

/// Convert a binary float into an exact decimal through its shortest
/// round-trip rendering, so `0.1` becomes exactly `0.1` rather than
/// `0.1000000000000000055511151231257827`.
///
/// Returns `None` for NaN and infinities.
pub fn to_decimal(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    // f64 Display never uses exponent notation, BigDecimal parses it directly
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Parse a token amount given as a float. Rejects non-finite and negative values.
pub fn amount_from_f64(value: f64) -> Result<BigDecimal> {
    let amount = to_decimal(value).ok_or_else(|| {
        debug!(value, "[QUOTE] non-finite amount rejected");
        AppError::InvalidAmount(format!("{value} is not a finite number"))
    })?;
    ensure_non_negative(&amount)?;
    Ok(amount)
}

/// Parse a slippage fraction given as a float. Rejects values outside [0, 1].
pub fn slippage_from_f64(value: f64) -> Result<BigDecimal> {
    let slippage = to_decimal(value).ok_or_else(|| {
        debug!(value, "[QUOTE] non-finite slippage rejected");
        AppError::InvalidSlippage(value.to_string())
    })?;
    validate_slippage(&slippage)?;
    Ok(slippage)
}

pub fn validate_slippage(slippage: &BigDecimal) -> Result<()> {
    if slippage.is_negative() || *slippage > BigDecimal::one() {
        let shown = format_decimal(slippage);
        debug!(slippage = %shown, "[QUOTE] slippage outside [0, 1]");
        return Err(AppError::InvalidSlippage(shown));
    }
    Ok(())
}

fn ensure_non_negative(amount: &BigDecimal) -> Result<()> {
    if amount.is_negative() {
        let shown = format_decimal(amount);
        debug!(amount = %shown, "[QUOTE] negative amount rejected");
        return Err(AppError::InvalidAmount(format!("{shown} is negative")));
    }
    Ok(())
}

/// 10^decimals as an exact decimal.
fn pow10(decimals: u8) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -i64::from(decimals))
}

/// Convert a human-readable amount into the token's smallest unit:
/// `amount * 10^decimals`, truncated toward zero.
///
/// # Arguments
/// * `amount` - Amount in whole tokens (e.g. 100.5)
/// * `decimals` - Token decimals (e.g. 6 for USDT)
///
/// # Returns
/// The raw integer amount, e.g. `100500000` for the example above.
pub fn compute_raw_amount(amount: &BigDecimal, decimals: u8) -> Result<BigInt> {
    ensure_non_negative(amount)?;
    let scaled = amount * &pow10(decimals);
    // with_scale(0) drops fractional digits, i.e. truncates toward zero
    let (raw, _) = scaled.with_scale(0).as_bigint_and_exponent();
    Ok(raw)
}

/// Same as [`compute_raw_amount`] for float input, normalized through [`to_decimal`].
pub fn compute_raw_amount_f64(amount: f64, decimals: u8) -> Result<BigInt> {
    let amount = amount_from_f64(amount)?;
    compute_raw_amount(&amount, decimals)
}

/// `expected * (1 - slippage)` in whole tokens.
pub fn minimum_output(expected: &BigDecimal, slippage: &BigDecimal) -> Result<BigDecimal> {
    validate_slippage(slippage)?;
    ensure_non_negative(expected)?;
    Ok(expected * (BigDecimal::one() - slippage))
}

/// Minimum acceptable output in raw units after applying slippage protection.
pub fn compute_min_output(
    expected: &BigDecimal,
    slippage: &BigDecimal,
    decimals: u8,
) -> Result<BigInt> {
    let minimum = minimum_output(expected, slippage)?;
    let raw = compute_raw_amount(&minimum, decimals)?;
    debug!(minimum = %format_decimal(&minimum), %raw, decimals, "[QUOTE] minimum output");
    Ok(raw)
}

/// Unix deadline `minutes_ahead` minutes after `now_seconds`.
pub fn compute_deadline(now_seconds: i64, minutes_ahead: i64) -> Result<i64> {
    if minutes_ahead <= 0 {
        debug!(minutes_ahead, "[QUOTE] non-positive deadline rejected");
        return Err(AppError::InvalidDuration(minutes_ahead));
    }
    minutes_ahead
        .checked_mul(60)
        .and_then(|secs| now_seconds.checked_add(secs))
        .ok_or(AppError::InvalidDuration(minutes_ahead))
}
