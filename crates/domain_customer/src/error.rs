//! Customer domain errors
//!
//! This module defines the error types of the customer domain: field
//! validation failures raised by constructors and validators, and the
//! collection errors used by call sites that need to distinguish
//! "not found" from "no-op".

use thiserror::Error;

use crate::validation::PointsOperation;

/// A field failed its format rule
///
/// Each variant carries the offending (trimmed) value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email does not match `user@domain.tld`
    #[error("Invalid email: '{0}'. Expected format user@domain.com")]
    InvalidEmail(String),

    /// Phone has disallowed characters or a digit count outside 8..=15
    #[error("Invalid phone: '{0}'. Must contain between 8 and 15 digits")]
    InvalidPhone(String),

    /// Name is too short, has disallowed characters, or is purely numeric
    #[error("Invalid name: '{0}'. Must contain at least 2 alphabetic characters")]
    InvalidName(String),

    /// Address is too short or has disallowed characters
    #[error("Invalid address: '{0}'. Must contain at least 5 characters")]
    InvalidAddress(String),

    /// Tax identifier (RUT) does not match `XX.XXX.XXX-X`
    #[error("Invalid RUT: '{0}'. Expected format XX.XXX.XXX-X")]
    InvalidTaxId(String),

    /// A loyalty point operation was rejected
    #[error("{}", points_message(.points, .available, .operation))]
    InvalidPoints {
        points: i64,
        available: u64,
        operation: PointsOperation,
    },
}

fn points_message(points: &i64, available: &u64, operation: &PointsOperation) -> String {
    match operation {
        PointsOperation::Redeem => {
            format!("Cannot redeem {} points. Available: {}", points, available)
        }
        PointsOperation::Add => {
            format!("Cannot add {} points. Points must be positive", points)
        }
    }
}

impl ValidationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail(_) => "VAL001",
            ValidationError::InvalidPhone(_) => "VAL002",
            ValidationError::InvalidName(_) => "VAL003",
            ValidationError::InvalidAddress(_) => "VAL004",
            ValidationError::InvalidTaxId(_) => "VAL005",
            ValidationError::InvalidPoints { .. } => "VAL006",
        }
    }

    /// Returns the rejected value as text
    pub fn value(&self) -> String {
        match self {
            ValidationError::InvalidEmail(v)
            | ValidationError::InvalidPhone(v)
            | ValidationError::InvalidName(v)
            | ValidationError::InvalidAddress(v)
            | ValidationError::InvalidTaxId(v) => v.clone(),
            ValidationError::InvalidPoints { points, .. } => points.to_string(),
        }
    }
}

/// Errors raised by registry operations that report failures as values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// A customer with this email is already registered
    #[error("A customer is already registered with email '{0}'")]
    AlreadyExists(String),

    /// No customer matches the email
    #[error("No customer found with email '{0}'")]
    NotFound(String),

    /// The registry holds no customers
    #[error("No customers are registered")]
    EmptyCollection,

    /// Field validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CustomerError {
    /// Creates a NotFound error for an email
    pub fn not_found(email: impl Into<String>) -> Self {
        CustomerError::NotFound(email.into())
    }

    /// Creates an AlreadyExists error for an email
    pub fn already_exists(email: impl Into<String>) -> Self {
        CustomerError::AlreadyExists(email.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CustomerError::AlreadyExists(_) => "CLI001",
            CustomerError::NotFound(_) => "CLI002",
            CustomerError::EmptyCollection => "CLI003",
            CustomerError::Validation(inner) => inner.code(),
        }
    }

    /// Checks if this error indicates a missing customer
    pub fn is_not_found(&self) -> bool {
        matches!(self, CustomerError::NotFound(_))
    }
}
