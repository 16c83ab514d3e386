//! Corporate customers

use std::fmt;

use serde::Serialize;

use crate::contact::ContactDetails;
use crate::customer::CustomerProfile;
use crate::error::ValidationError;
use crate::kind::CustomerKind;
use crate::record::CustomerRecord;
use crate::validation::validate_corporate_data;

/// Billing data of a corporate customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceInfo {
    pub company_name: String,
    pub tax_id: String,
    pub address: String,
    pub contact_name: String,
    pub email: String,
}

/// A customer buying on behalf of a company, with a 25% discount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorporateCustomer {
    #[serde(flatten)]
    contact: ContactDetails,
    company_name: String,
    tax_id: String,
}

impl CorporateCustomer {
    /// Creates a corporate customer
    ///
    /// Contact fields are validated first, then the company name and the
    /// tax identifier. The tax identifier is stored uppercased.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        company_name: &str,
        tax_id: &str,
    ) -> Result<Self, ValidationError> {
        let contact = ContactDetails::new(name, email, phone, address)?;
        let (company_name, tax_id) = validate_corporate_data(company_name, tax_id)?;

        Ok(Self {
            contact,
            company_name,
            tax_id,
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Data needed to issue an invoice to the company
    pub fn invoice_info(&self) -> InvoiceInfo {
        InvoiceInfo {
            company_name: self.company_name.clone(),
            tax_id: self.tax_id.clone(),
            address: self.contact.address().to_string(),
            contact_name: self.contact.name().to_string(),
            email: self.contact.email().to_string(),
        }
    }
}

impl CustomerProfile for CorporateCustomer {
    fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    fn contact_mut(&mut self) -> &mut ContactDetails {
        &mut self.contact
    }

    fn kind(&self) -> CustomerKind {
        CustomerKind::Corporate
    }

    fn exclusive_benefit(&self) -> String {
        format!(
            "{} discount for {} on every corporate purchase.",
            self.discount_rate(),
            self.company_name
        )
    }

    fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            kind: self.kind(),
            name: self.contact.name().to_string(),
            email: self.contact.email().to_string(),
            phone: self.contact.phone().to_string(),
            address: self.contact.address().to_string(),
            discount_rate: self.discount_rate(),
            points: None,
            company_name: Some(self.company_name.clone()),
            tax_id: Some(self.tax_id.clone()),
        }
    }
}

impl fmt::Display for CorporateCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({})",
            self.kind(),
            self.name(),
            self.email(),
            self.company_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn carlos() -> CorporateCustomer {
        CorporateCustomer::new(
            "Carlos",
            "carlos@x.com",
            "912345678",
            "Av 3 Stgo",
            "TechCorp S.A.",
            "76.543.210-k",
        )
        .unwrap()
    }

    #[test]
    fn test_corporate_discount() {
        assert_eq!(carlos().discount(dec!(1000)), dec!(250));
        assert_eq!(carlos().discount(dec!(0)), dec!(0));
    }

    #[test]
    fn test_tax_id_uppercased() {
        assert_eq!(carlos().tax_id(), "76.543.210-K");
    }

    #[test]
    fn test_invalid_tax_id_rejected() {
        let result = CorporateCustomer::new(
            "Carlos",
            "carlos@x.com",
            "912345678",
            "Av 3 Stgo",
            "TechCorp",
            "123",
        );
        assert!(matches!(result, Err(ValidationError::InvalidTaxId(_))));
    }

    #[test]
    fn test_contact_errors_come_first() {
        let result =
            CorporateCustomer::new("Carlos", "bad", "912345678", "Av 3 Stgo", "", "123");
        assert!(matches!(result, Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_invoice_info() {
        let info = carlos().invoice_info();
        assert_eq!(info.company_name, "TechCorp S.A.");
        assert_eq!(info.tax_id, "76.543.210-K");
        assert_eq!(info.address, "Av 3 Stgo");
        assert_eq!(info.contact_name, "Carlos");
        assert_eq!(info.email, "carlos@x.com");
    }

    #[test]
    fn test_benefit_and_display() {
        let customer = carlos();
        let benefit = customer.exclusive_benefit();
        assert!(benefit.contains("25%"));
        assert!(benefit.contains("TechCorp S.A."));
        assert_eq!(
            customer.to_string(),
            "[Corporativo] Carlos - carlos@x.com (TechCorp S.A.)"
        );
    }
}
