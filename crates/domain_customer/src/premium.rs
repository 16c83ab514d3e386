//! Premium customers and their loyalty points

use std::fmt;

use serde::Serialize;

use crate::contact::ContactDetails;
use crate::customer::CustomerProfile;
use crate::error::ValidationError;
use crate::kind::CustomerKind;
use crate::record::CustomerRecord;
use crate::validation::{validate_points, PointsOperation};

/// A customer with a 15% discount and a loyalty point balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumCustomer {
    #[serde(flatten)]
    contact: ContactDetails,
    points: u64,
}

impl PremiumCustomer {
    /// Creates a premium customer with an opening balance
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        points: u64,
    ) -> Result<Self, ValidationError> {
        let contact = ContactDetails::new(name, email, phone, address)?;
        Ok(Self { contact, points })
    }

    /// Current loyalty balance
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Credits points; non-positive quantities leave the balance unchanged
    pub fn add_points(&mut self, points: i64) {
        if points > 0 {
            self.points = self.points.saturating_add(points.unsigned_abs());
        }
    }

    /// Spends points
    ///
    /// Returns false, leaving the balance unchanged, when the quantity is
    /// not positive or exceeds the balance.
    pub fn redeem_points(&mut self, points: i64) -> bool {
        self.try_redeem_points(points).is_ok()
    }

    /// Credits points, rejecting non-positive quantities
    ///
    /// # Returns
    ///
    /// The new balance
    pub fn try_add_points(&mut self, points: i64) -> Result<u64, ValidationError> {
        validate_points(points, PointsOperation::Add, self.points)?;
        self.add_points(points);
        Ok(self.points)
    }

    /// Spends points, rejecting quantities the balance cannot cover
    ///
    /// # Returns
    ///
    /// The new balance
    pub fn try_redeem_points(&mut self, points: i64) -> Result<u64, ValidationError> {
        validate_points(points, PointsOperation::Redeem, self.points)?;
        self.points -= points.unsigned_abs();
        Ok(self.points)
    }
}

impl CustomerProfile for PremiumCustomer {
    fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    fn contact_mut(&mut self) -> &mut ContactDetails {
        &mut self.contact
    }

    fn kind(&self) -> CustomerKind {
        CustomerKind::Premium
    }

    fn exclusive_benefit(&self) -> String {
        format!(
            "{} discount on every purchase and {} points accumulated.",
            self.discount_rate(),
            self.points
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
            points: Some(self.points),
            company_name: None,
            tax_id: None,
        }
    }
}

impl fmt::Display for PremiumCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({} pts)",
            self.kind(),
            self.name(),
            self.email(),
            self.points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn maria(points: u64) -> PremiumCustomer {
        PremiumCustomer::new("Maria", "maria@x.com", "987654321", "Av 2 Valpo", points).unwrap()
    }

    #[test]
    fn test_premium_discount() {
        assert_eq!(maria(0).discount(dec!(1000)), dec!(150));
    }

    #[test]
    fn test_add_points_ignores_non_positive() {
        let mut customer = maria(100);
        customer.add_points(0);
        customer.add_points(-20);
        assert_eq!(customer.points(), 100);
        customer.add_points(50);
        assert_eq!(customer.points(), 150);
    }

    #[test]
    fn test_redeem_points() {
        let mut customer = maria(200);
        assert!(!customer.redeem_points(500));
        assert_eq!(customer.points(), 200);
        assert!(!customer.redeem_points(0));
        assert!(customer.redeem_points(200));
        assert_eq!(customer.points(), 0);
    }

    #[test]
    fn test_try_operations_report_errors() {
        let mut customer = maria(10);
        assert_eq!(customer.try_add_points(5), Ok(15));
        assert!(matches!(
            customer.try_redeem_points(16),
            Err(ValidationError::InvalidPoints { available: 15, .. })
        ));
        assert_eq!(customer.try_redeem_points(15), Ok(0));
    }

    #[test]
    fn test_benefit_and_display() {
        let customer = maria(1500);
        let benefit = customer.exclusive_benefit();
        assert!(benefit.contains("15%"));
        assert!(benefit.contains("1500"));
        assert_eq!(customer.to_string(), "[Premium] Maria - maria@x.com (1500 pts)");
    }

    #[test]
    fn test_record_carries_points() {
        assert_eq!(maria(42).to_record().points, Some(42));
    }
}
