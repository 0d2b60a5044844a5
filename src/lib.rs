//! Core library for the swap-params tool.
//!
//! Computes the parameters a DEX swap transaction needs (raw input amount,
//! slippage-protected minimum output, deadline) from human-readable inputs.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod quote;
pub mod report;
pub mod utils;
