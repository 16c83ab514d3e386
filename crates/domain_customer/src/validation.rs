//! Customer field validation rules
//!
//! Every validator trims its input before testing it and fails with the
//! matching [`ValidationError`] variant, carrying the trimmed value.
//!
//! # Validation Rules
//!
//! ## Name
//! - At least 2 characters, at most 100
//! - Letters (accented forms included), whitespace and hyphens only
//! - At least two alphabetic characters, never purely numeric
//!
//! ## Email
//! - `local@domain.tld`, local part of letters, digits and `._%+-`
//! - Domain of letters, digits, `.` and `-`, final label of 2+ letters
//!
//! ## Phone
//! - Digits, whitespace, `-`, `(`, `)` and `+` only, 8 to 20 characters
//! - Between 8 and 15 digits once separators are ignored
//!
//! ## Address
//! - 5 to 200 word characters, whitespace and `. , # - °`
//!
//! ## Tax identifier (RUT)
//! - `XX.XXX.XXX-X` or `XXXXXXXX-X`, check character a digit or `K`
//!
//! ## Loyalty points
//! - Additions must be positive
//! - Redemptions must be positive and no larger than the available balance

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::contact::ContactDetails;
use crate::error::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s()+-]{8,20}$").expect("phone pattern compiles"));

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s-]{2,100}$").expect("name pattern compiles")
});

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s.,#°-]{5,200}$").expect("address pattern compiles"));

static TAX_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.?[0-9]{3}\.?[0-9]{3}-[0-9kK]$").expect("tax id pattern compiles")
});

const MIN_PHONE_DIGITS: usize = 8;
const MAX_PHONE_DIGITS: usize = 15;

/// Kind of loyalty point operation being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointsOperation {
    /// Crediting points to a balance
    Add,
    /// Spending points from a balance
    Redeem,
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Validates a person's name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    let letters = name.chars().filter(|c| c.is_alphabetic()).count();

    if name.chars().count() < 2 || !NAME_PATTERN.is_match(name) || is_numeric(name) || letters < 2 {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates an email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validates a phone number
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

/// Validates a postal address
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    let address = address.trim();
    if address.chars().count() < 5 || !ADDRESS_PATTERN.is_match(address) {
        return Err(ValidationError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

/// Validates a Chilean tax identifier (RUT)
pub fn validate_tax_id(tax_id: &str) -> Result<(), ValidationError> {
    let tax_id = tax_id.trim().to_uppercase();
    if !TAX_ID_PATTERN.is_match(&tax_id) {
        return Err(ValidationError::InvalidTaxId(tax_id));
    }
    Ok(())
}

/// Validates a company name
///
/// Company names may carry punctuation (`TechCorp S.A.`), so only length and
/// the purely-numeric rule apply.
pub fn validate_company_name(company_name: &str) -> Result<(), ValidationError> {
    let company_name = company_name.trim();
    if company_name.chars().count() < 2 || is_numeric(company_name) {
        return Err(ValidationError::InvalidName(company_name.to_string()));
    }
    Ok(())
}

/// Validates a loyalty point operation
///
/// # Arguments
///
/// * `points` - Quantity being added or redeemed
/// * `operation` - Whether points are being added or redeemed
/// * `available` - Current balance, only consulted for redemptions
pub fn validate_points(
    points: i64,
    operation: PointsOperation,
    available: u64,
) -> Result<(), ValidationError> {
    let rejected = match operation {
        PointsOperation::Add => points <= 0,
        PointsOperation::Redeem => points <= 0 || points.unsigned_abs() > available,
    };

    if rejected {
        return Err(ValidationError::InvalidPoints {
            points,
            available: match operation {
                PointsOperation::Add => 0,
                PointsOperation::Redeem => available,
            },
            operation,
        });
    }
    Ok(())
}

/// Runs every contact validator in order (name, email, phone, address)
///
/// # Returns
///
/// The normalized contact details: fields trimmed and the email lowercased
///
/// # Errors
///
/// Fails with the first field that violates its rule
pub fn validate_customer_data(
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<ContactDetails, ValidationError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    validate_address(address)?;

    Ok(ContactDetails::from_normalized(
        name.trim().to_string(),
        email.trim().to_lowercase(),
        phone.trim().to_string(),
        address.trim().to_string(),
    ))
}

/// Validates the extra data of a corporate customer
///
/// # Returns
///
/// The trimmed company name and the uppercased tax identifier
pub fn validate_corporate_data(
    company_name: &str,
    tax_id: &str,
) -> Result<(String, String), ValidationError> {
    validate_company_name(company_name)?;
    validate_tax_id(tax_id)?;

    Ok((company_name.trim().to_string(), tax_id.trim().to_uppercase()))
}
