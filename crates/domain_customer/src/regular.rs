//! Regular customers

use std::fmt;

use serde::Serialize;

use crate::contact::ContactDetails;
use crate::customer::CustomerProfile;
use crate::error::ValidationError;
use crate::kind::CustomerKind;

/// A customer with no discount and no extra data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegularCustomer {
    #[serde(flatten)]
    contact: ContactDetails,
}

impl RegularCustomer {
    /// Creates a regular customer from raw contact fields
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_contact(ContactDetails::new(name, email, phone, address)?))
    }

    /// Wraps already validated contact details
    pub fn from_contact(contact: ContactDetails) -> Self {
        Self { contact }
    }
}

impl CustomerProfile for RegularCustomer {
    fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    fn contact_mut(&mut self) -> &mut ContactDetails {
        &mut self.contact
    }

    fn kind(&self) -> CustomerKind {
        CustomerKind::Regular
    }

    fn exclusive_benefit(&self) -> String {
        "Access to promotions and special offers for regular customers.".to_string()
    }
}

impl fmt::Display for RegularCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.kind(), self.name(), self.email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_regular_has_no_discount() {
        let customer =
            RegularCustomer::new("Juan", "juan@x.com", "987654321", "Av 1234 Iquique").unwrap();
        assert_eq!(customer.discount(dec!(1000)), dec!(0));
        assert_eq!(customer.discount(dec!(-50)), dec!(0));
        assert!(customer.exclusive_benefit().contains("promotions"));
    }

    #[test]
    fn test_regular_record_has_no_extras() {
        let record = RegularCustomer::new("Juan", "juan@x.com", "987654321", "Av 1234 Iquique")
            .unwrap()
            .to_record();
        assert_eq!(record.kind, CustomerKind::Regular);
        assert_eq!(record.points, None);
        assert_eq!(record.company_name, None);
        assert_eq!(record.tax_id, None);
    }
}
