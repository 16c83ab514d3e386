//! Property-Based Test Generators
//!
//! Provides proptest strategies producing inputs that pass validation, so
//! properties can be checked over many valid customers.

use domain_customer::{Customer, CustomerKind, CustomerProfile};
use proptest::prelude::*;

/// Strategy for names of two or three alphabetic words
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-zñáéíóú]{1,10}", 1..=3).prop_map(|words| words.join(" "))
}

/// Strategy for emails matching the validation pattern (lowercase)
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._]{0,12}", "[a-z]{2,10}", "(com|cl|org|net)")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Strategy for phones of 8 to 15 digits, sometimes with a leading `+`
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{8,15}").prop_map(|(plus, digits)| {
        if plus {
            format!("+{}", digits)
        } else {
            digits
        }
    })
}

/// Strategy for street addresses
pub fn address_strategy() -> impl Strategy<Value = String> {
    ("(Av|Calle|Pasaje)", "[A-Z][a-z]{2,12}", 1u32..9999)
        .prop_map(|(street, name, number)| format!("{} {} {}", street, name, number))
}

/// Strategy for RUTs in dotted form
pub fn tax_id_strategy() -> impl Strategy<Value = String> {
    (1u32..99, 0u32..1000, 0u32..1000, "[0-9K]").prop_map(|(a, b, c, check)| {
        format!("{}.{:03}.{:03}-{}", a, b, c, check)
    })
}

pub fn kind_strategy() -> impl Strategy<Value = CustomerKind> {
    prop_oneof![
        Just(CustomerKind::Regular),
        Just(CustomerKind::Premium),
        Just(CustomerKind::Corporate),
    ]
}

/// Strategy for valid customers of any kind
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        kind_strategy(),
        name_strategy(),
        email_strategy(),
        phone_strategy(),
        address_strategy(),
        0u64..100_000,
        name_strategy(),
        tax_id_strategy(),
    )
        .prop_map(|(kind, name, email, phone, address, points, company, tax_id)| {
            let built = match kind {
                CustomerKind::Regular => Customer::regular(&name, &email, &phone, &address),
                CustomerKind::Premium => Customer::premium(&name, &email, &phone, &address, points),
                CustomerKind::Corporate => {
                    Customer::corporate(&name, &email, &phone, &address, &company, &tax_id)
                }
            };
            built.expect("generated customer data is valid")
        })
}

/// Strategy for customer lists with pairwise distinct emails
pub fn unique_customers_strategy(max: usize) -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec(customer_strategy(), 0..=max).prop_map(|customers| {
        let mut seen = std::collections::HashSet::new();
        customers
            .into_iter()
            .filter(|c| seen.insert(c.email().to_string()))
            .collect()
    })
}
