//! Core error types used across the system

use rust_decimal::Decimal;
use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid discount rate: {0} (expected a fraction between 0 and 1)")]
    InvalidRate(Decimal),

    #[error("Invalid timestamp: '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),
}
