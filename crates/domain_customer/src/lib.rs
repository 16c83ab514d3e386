//! Customer Domain
//!
//! This crate manages customer records: validation of free-text contact
//! data, the three customer variants and the in-memory registry that keys
//! them by email.
//!
//! # Customer Variants
//!
//! - **Regular**: contact details only, no discount
//! - **Premium**: 15% discount and a loyalty point balance
//! - **Corporate**: 25% discount, billed to a company identified by its RUT
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::{Customer, CustomerProfile, CustomerRegistry, CustomerUpdate};
//! use rust_decimal_macros::dec;
//!
//! let mut registry = CustomerRegistry::new();
//!
//! let ana = Customer::premium("Ana", "ANA@x.com", "987654321", "Av 2 Valpo", 100).unwrap();
//! assert_eq!(ana.discount(dec!(1000)), dec!(150));
//! assert!(registry.add(ana));
//!
//! assert!(registry.update("ana@x.com", CustomerUpdate::new().with_name("Ana B.")));
//! assert_eq!(registry.find("ana@X.COM").unwrap().name(), "Ana B.");
//! ```

pub mod contact;
pub mod corporate;
pub mod customer;
pub mod error;
pub mod kind;
pub mod ports;
pub mod premium;
pub mod record;
pub mod registry;
pub mod regular;
pub mod validation;

pub use contact::ContactDetails;
pub use corporate::{CorporateCustomer, InvoiceInfo};
pub use customer::{Customer, CustomerProfile};
pub use error::{CustomerError, ValidationError};
pub use kind::{CustomerKind, UnknownKind};
pub use ports::{AuditError, AuditEvent, AuditLevel, AuditSink};
pub use premium::PremiumCustomer;
pub use record::CustomerRecord;
pub use registry::{CustomerRegistry, CustomerUpdate, KindStats};
pub use regular::RegularCustomer;
pub use validation::PointsOperation;
