//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! customer registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built customers, CSV inputs and instants
//! - `builders`: Builder for customers with sensible defaults
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
