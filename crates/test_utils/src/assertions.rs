//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::collections::BTreeMap;

use domain_customer::{Customer, CustomerProfile, CustomerRecord, CustomerRegistry};

/// Asserts that two customer lists hold the same records, in any order
pub fn assert_same_customers(actual: &[Customer], expected: &[Customer]) {
    let key = |customers: &[Customer]| -> BTreeMap<String, CustomerRecord> {
        customers
            .iter()
            .map(|c| (c.email().to_string(), c.to_record()))
            .collect()
    };

    assert_eq!(
        actual.len(),
        expected.len(),
        "Customer counts differ: actual={}, expected={}",
        actual.len(),
        expected.len()
    );
    assert_eq!(key(actual), key(expected), "Customer records differ");
}

/// Asserts that the registry holds exactly the given emails, in order
pub fn assert_registry_emails(registry: &CustomerRegistry, expected: &[&str]) {
    let actual: Vec<&str> = registry.customers().iter().map(|c| c.email()).collect();
    assert_eq!(actual, expected, "Registry emails differ");
}
