//! Contact details shared by every customer variant

use serde::Serialize;

use crate::error::ValidationError;
use crate::validation::validate_customer_data;

/// Validated contact fields of a customer
///
/// The email is stored lowercased and acts as the customer's identity;
/// it cannot be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    name: String,
    email: String,
    phone: String,
    address: String,
}

impl ContactDetails {
    /// Validates and normalizes contact fields
    ///
    /// # Errors
    ///
    /// Returns the first failing rule in the order name, email, phone, address
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        validate_customer_data(name, email, phone, address)
    }

    pub(crate) fn from_normalized(
        name: String,
        email: String,
        phone: String,
        address: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces the name without re-validating it (value is trimmed)
    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    /// Replaces the phone without re-validating it (value is trimmed)
    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.trim().to_string();
    }

    /// Replaces the address without re-validating it (value is trimmed)
    pub fn set_address(&mut self, address: &str) {
        self.address = address.trim().to_string();
    }

    /// Case-insensitive comparison against an email
    pub fn matches_email(&self, email: &str) -> bool {
        self.email == email.trim().to_lowercase()
    }
}
