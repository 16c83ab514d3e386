//! The customer family
//!
//! Each variant is its own struct implementing [`CustomerProfile`]; the
//! [`Customer`] sum type owns one of them and delegates every profile
//! operation, so collections can hold mixed variants without inspecting
//! types at runtime.
//!
//! # Variants
//!
//! | Variant | Tag | Discount | Extra data |
//! |---|---|---|---|
//! | [`RegularCustomer`] | `Regular` | 0% | none |
//! | [`PremiumCustomer`] | `Premium` | 15% | loyalty points |
//! | [`CorporateCustomer`] | `Corporativo` | 25% | company name, RUT |

use std::fmt;

use core_kernel::DiscountRate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::contact::ContactDetails;
use crate::corporate::CorporateCustomer;
use crate::error::ValidationError;
use crate::kind::CustomerKind;
use crate::premium::PremiumCustomer;
use crate::record::CustomerRecord;
use crate::regular::RegularCustomer;

/// Behavior shared by every customer variant
pub trait CustomerProfile {
    /// Validated contact fields
    fn contact(&self) -> &ContactDetails;

    /// Mutable access to the contact fields
    fn contact_mut(&mut self) -> &mut ContactDetails;

    /// The variant discriminator
    fn kind(&self) -> CustomerKind;

    /// Human-readable description of the variant's perks
    fn exclusive_benefit(&self) -> String;

    fn discount_rate(&self) -> DiscountRate {
        self.kind().discount_rate()
    }

    /// Discount granted on a purchase amount
    ///
    /// The amount is not validated: zero yields zero and negative amounts
    /// scale linearly.
    fn discount(&self, amount: Decimal) -> Decimal {
        self.discount_rate().apply(amount)
    }

    /// Flattens the customer into a record
    fn to_record(&self) -> CustomerRecord {
        let contact = self.contact();
        CustomerRecord {
            kind: self.kind(),
            name: contact.name().to_string(),
            email: contact.email().to_string(),
            phone: contact.phone().to_string(),
            address: contact.address().to_string(),
            discount_rate: self.discount_rate(),
            points: None,
            company_name: None,
            tax_id: None,
        }
    }

    fn name(&self) -> &str {
        self.contact().name()
    }

    fn email(&self) -> &str {
        self.contact().email()
    }

    fn phone(&self) -> &str {
        self.contact().phone()
    }

    fn address(&self) -> &str {
        self.contact().address()
    }
}

/// A customer of any variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Customer {
    Regular(RegularCustomer),
    Premium(PremiumCustomer),
    #[serde(rename = "Corporativo")]
    Corporate(CorporateCustomer),
}

impl Customer {
    /// Creates a validated regular customer
    pub fn regular(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        RegularCustomer::new(name, email, phone, address).map(Customer::Regular)
    }

    /// Creates a validated premium customer with an opening balance
    pub fn premium(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        points: u64,
    ) -> Result<Self, ValidationError> {
        PremiumCustomer::new(name, email, phone, address, points).map(Customer::Premium)
    }

    /// Creates a validated corporate customer
    pub fn corporate(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        company_name: &str,
        tax_id: &str,
    ) -> Result<Self, ValidationError> {
        CorporateCustomer::new(name, email, phone, address, company_name, tax_id)
            .map(Customer::Corporate)
    }

    fn profile(&self) -> &dyn CustomerProfile {
        match self {
            Customer::Regular(c) => c,
            Customer::Premium(c) => c,
            Customer::Corporate(c) => c,
        }
    }

    fn profile_mut(&mut self) -> &mut dyn CustomerProfile {
        match self {
            Customer::Regular(c) => c,
            Customer::Premium(c) => c,
            Customer::Corporate(c) => c,
        }
    }

    /// Case-insensitive identity check
    pub fn matches_email(&self, email: &str) -> bool {
        self.contact().matches_email(email)
    }

    pub fn as_premium(&self) -> Option<&PremiumCustomer> {
        match self {
            Customer::Premium(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_premium_mut(&mut self) -> Option<&mut PremiumCustomer> {
        match self {
            Customer::Premium(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_corporate(&self) -> Option<&CorporateCustomer> {
        match self {
            Customer::Corporate(c) => Some(c),
            _ => None,
        }
    }
}

impl CustomerProfile for Customer {
    fn contact(&self) -> &ContactDetails {
        self.profile().contact()
    }

    fn contact_mut(&mut self) -> &mut ContactDetails {
        self.profile_mut().contact_mut()
    }

    fn kind(&self) -> CustomerKind {
        self.profile().kind()
    }

    fn exclusive_benefit(&self) -> String {
        self.profile().exclusive_benefit()
    }

    fn discount_rate(&self) -> DiscountRate {
        self.profile().discount_rate()
    }

    fn to_record(&self) -> CustomerRecord {
        self.profile().to_record()
    }
}

impl From<RegularCustomer> for Customer {
    fn from(customer: RegularCustomer) -> Self {
        Customer::Regular(customer)
    }
}

impl From<PremiumCustomer> for Customer {
    fn from(customer: PremiumCustomer) -> Self {
        Customer::Premium(customer)
    }
}

impl From<CorporateCustomer> for Customer {
    fn from(customer: CorporateCustomer) -> Self {
        Customer::Corporate(customer)
    }
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ValidationError;

    /// Rebuilds a customer from its flat record
    ///
    /// A missing points balance means zero. Missing corporate fields fail
    /// the same way blank ones do.
    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        let CustomerRecord {
            kind,
            name,
            email,
            phone,
            address,
            points,
            company_name,
            tax_id,
            ..
        } = record;

        match kind {
            CustomerKind::Regular => Customer::regular(&name, &email, &phone, &address),
            CustomerKind::Premium => {
                Customer::premium(&name, &email, &phone, &address, points.unwrap_or(0))
            }
            CustomerKind::Corporate => Customer::corporate(
                &name,
                &email,
                &phone,
                &address,
                company_name.as_deref().unwrap_or_default(),
                tax_id.as_deref().unwrap_or_default(),
            ),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Customer::Regular(c) => fmt::Display::fmt(c, f),
            Customer::Premium(c) => fmt::Display::fmt(c, f),
            Customer::Corporate(c) => fmt::Display::fmt(c, f),
        }
    }
}
