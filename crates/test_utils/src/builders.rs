//! Test Data Builders
//!
//! Provides a builder for customers so tests only spell out the fields
//! they care about.

use domain_customer::{Customer, CustomerKind, CustomerRecord, ValidationError};

/// Builder for constructing test customers
///
/// Defaults to a valid regular customer.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    kind: CustomerKind,
    name: String,
    email: String,
    phone: String,
    address: String,
    points: u64,
    company_name: String,
    tax_id: String,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            kind: CustomerKind::Regular,
            name: "Cliente Prueba".to_string(),
            email: "cliente@x.com".to_string(),
            phone: "987654321".to_string(),
            address: "Av 1234 Iquique".to_string(),
            points: 0,
            company_name: "Empresa Prueba".to_string(),
            tax_id: "76.543.210-K".to_string(),
        }
    }

    pub fn regular() -> Self {
        Self::new()
    }

    pub fn premium(points: u64) -> Self {
        Self::new().with_kind(CustomerKind::Premium).with_points(points)
    }

    pub fn corporate() -> Self {
        Self::new().with_kind(CustomerKind::Corporate)
    }

    pub fn with_kind(mut self, kind: CustomerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    pub fn with_company(mut self, company_name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self.tax_id = tax_id.into();
        self
    }

    /// Builds the customer, running every validator
    pub fn try_build(&self) -> Result<Customer, ValidationError> {
        match self.kind {
            CustomerKind::Regular => {
                Customer::regular(&self.name, &self.email, &self.phone, &self.address)
            }
            CustomerKind::Premium => Customer::premium(
                &self.name,
                &self.email,
                &self.phone,
                &self.address,
                self.points,
            ),
            CustomerKind::Corporate => Customer::corporate(
                &self.name,
                &self.email,
                &self.phone,
                &self.address,
                &self.company_name,
                &self.tax_id,
            ),
        }
    }

    /// Builds the customer
    ///
    /// # Panics
    ///
    /// Panics if a field fails validation
    pub fn build(&self) -> Customer {
        match self.try_build() {
            Ok(customer) => customer,
            Err(error) => panic!("CustomerBuilder produced an invalid customer: {}", error),
        }
    }

    /// Builds the flat record without validating anything
    pub fn build_record(&self) -> CustomerRecord {
        let premium = self.kind == CustomerKind::Premium;
        let corporate = self.kind == CustomerKind::Corporate;
        CustomerRecord {
            kind: self.kind,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            discount_rate: self.kind.discount_rate(),
            points: premium.then_some(self.points),
            company_name: corporate.then(|| self.company_name.clone()),
            tax_id: corporate.then(|| self.tax_id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::CustomerProfile;

    #[test]
    fn test_defaults_build_valid_customers() {
        assert_eq!(CustomerBuilder::regular().build().kind(), CustomerKind::Regular);
        assert_eq!(
            CustomerBuilder::premium(10).build().as_premium().map(|p| p.points()),
            Some(10)
        );
        assert!(CustomerBuilder::corporate().build().as_corporate().is_some());
    }

    #[test]
    fn test_try_build_reports_invalid_fields() {
        let result = CustomerBuilder::new().with_phone("12").try_build();
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_build_record_matches_built_customer() {
        let builder = CustomerBuilder::corporate().with_email("rosa@x.com");
        assert_eq!(builder.build_record(), builder.build().to_record());
    }
}
