//! Configuration defaults and environment loading.

use std::path::PathBuf;

/// Default values for the command-line flags.
#[derive(Debug, Clone, Copy)]
pub struct QuoteDefaults;

impl QuoteDefaults {
    /// Slippage tolerance as a fraction (0.01 = 1%).
    pub const SLIPPAGE: f64 = 0.01;
    /// Token decimals (6 for USDT/TRX-style tokens).
    pub const DECIMALS: u8 = 6;
    /// Minutes until the transaction expires.
    pub const DEADLINE_MINUTES: i64 = 5;
}

/// Load a `.env` file from the working directory, if there is one.
///
/// Only ambient settings such as `RUST_LOG` are read from the environment;
/// quote inputs always come from the command line. Call before
/// `utils::init_logging` so the filter sees the loaded values.
pub fn load_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
