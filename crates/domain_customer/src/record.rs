//! Flat customer record used for serialization

use core_kernel::DiscountRate;
use serde::{Deserialize, Serialize};

use crate::kind::CustomerKind;

/// Every customer field in one flat structure
///
/// Fields that do not apply to the record's kind are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub kind: CustomerKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub discount_rate: DiscountRate,
    /// Loyalty balance (Premium only)
    pub points: Option<u64>,
    /// Company name (Corporate only)
    pub company_name: Option<String>,
    /// Tax identifier (Corporate only)
    pub tax_id: Option<String>,
}
