//! Miscellaneous helper utilities.

use crate::errors::{AppError, Result};
use bigdecimal::BigDecimal;
use chrono::{Local, TimeZone, Utc};
use tracing_subscriber::{EnvFilter, fmt};

/// Layout used for the human-readable deadline.
pub const READABLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `warn` level. Logs go to stderr so
/// the report on stdout can be piped as-is.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Current wall-clock time as Unix seconds.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Render a Unix timestamp in the local time zone, e.g. `2024-05-01 13:05:00`.
pub fn format_local_timestamp(timestamp: i64) -> Result<String> {
    let local = Local
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or(AppError::InvalidTimestamp(timestamp))?;
    Ok(local.format(READABLE_TIME_FORMAT).to_string())
}

/// Plain (never scientific) rendering of a decimal with trailing fractional
/// zeros removed: `381.150000` -> `381.15`, `1E+2` -> `100`.
pub fn format_decimal(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn format_decimal_trims_trailing_zeros() {
        assert_eq!(format_decimal(&dec("381.150000")), "381.15");
        assert_eq!(format_decimal(&dec("385.0")), "385");
        assert_eq!(format_decimal(&dec("0.0")), "0");
    }

    #[test]
    fn format_decimal_pads_small_fractions() {
        assert_eq!(format_decimal(&dec("0.000001")), "0.000001");
        assert_eq!(format_decimal(&dec("-0.05")), "-0.05");
    }

    #[test]
    fn format_decimal_expands_negative_scale() {
        assert_eq!(format_decimal(&dec("1E+2")), "100");
        assert_eq!(format_decimal(&dec("12e3")), "12000");
        assert_eq!(format_decimal(&dec("1.00")), "1");
    }

    #[test]
    fn local_timestamp_has_expected_shape() {
        let s = format_local_timestamp(1_700_000_000).unwrap();
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
        assert_eq!(&s[13..14], ":");
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let err = format_local_timestamp(i64::MAX).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp(_)));
    }
}
