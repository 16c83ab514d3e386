//! Customer kind discriminator

use std::fmt;
use std::str::FromStr;

use core_kernel::DiscountRate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The variant a customer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerKind {
    #[serde(rename = "Regular")]
    Regular,
    #[serde(rename = "Premium")]
    Premium,
    #[serde(rename = "Corporativo")]
    Corporate,
}

/// A kind tag that names no known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown customer kind: '{0}'")]
pub struct UnknownKind(pub String);

impl CustomerKind {
    /// All kinds in display order
    pub fn all() -> [CustomerKind; 3] {
        [
            CustomerKind::Regular,
            CustomerKind::Premium,
            CustomerKind::Corporate,
        ]
    }

    /// The tag used in records, files and reports
    pub fn tag(&self) -> &'static str {
        match self {
            CustomerKind::Regular => "Regular",
            CustomerKind::Premium => "Premium",
            CustomerKind::Corporate => "Corporativo",
        }
    }

    /// Fixed discount rate of the kind
    pub fn discount_rate(&self) -> DiscountRate {
        match self {
            CustomerKind::Regular => DiscountRate::zero(),
            CustomerKind::Premium => DiscountRate::from_percent(15),
            CustomerKind::Corporate => DiscountRate::from_percent(25),
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CustomerKind {
    type Err = UnknownKind;

    /// Parses an exact tag: `Regular`, `Premium` or `Corporativo`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerKind::all()
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
