use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid slippage: {0} (expected a fraction between 0 and 1)")]
    InvalidSlippage(String),

    #[error("Invalid deadline duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Deadline {0} cannot be shown in local time")]
    InvalidTimestamp(i64),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
