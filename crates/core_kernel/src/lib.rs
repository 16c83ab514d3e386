//! Core Kernel - Foundational types shared by the customer registry
//!
//! This crate provides the building blocks used across the workspace:
//! - Discount rates with precise decimal arithmetic
//! - A clock abstraction and the timestamp layout used by logs and reports

pub mod rate;
pub mod temporal;
pub mod error;

pub use rate::DiscountRate;
pub use temporal::{Clock, SystemClock, FixedClock, format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
pub use error::CoreError;
