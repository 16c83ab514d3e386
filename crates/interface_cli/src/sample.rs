//! Demo data set loaded by `gic seed`

use domain_customer::{Customer, ValidationError};

/// Two customers of each kind
pub fn demo_customers() -> Result<Vec<Customer>, ValidationError> {
    Ok(vec![
        Customer::regular(
            "Juan Perez Garcia",
            "juan.perez@email.com",
            "+56912345678",
            "Av. Libertador 1234, Iquique",
        )?,
        Customer::regular(
            "Ana Munoz Soto",
            "ana.munoz@email.com",
            "+56911112222",
            "Calle Los Aromos 456, Antofagasta",
        )?,
        Customer::premium(
            "Maria Gonzalez Lopez",
            "maria.gonzalez@empresa.cl",
            "+56987654321",
            "Calle Principal 567, Valparaiso",
            1500,
        )?,
        Customer::premium(
            "Pedro Silva Ramirez",
            "pedro.silva@premium.cl",
            "+56933334444",
            "Av. Marina 789, Vina del Mar",
            3200,
        )?,
        Customer::corporate(
            "Carlos Rodriguez Soto",
            "carlos.rodriguez@techcorp.com",
            "+56956781234",
            "Paseo Ahumada 890, Santiago",
            "TechCorp S.A.",
            "76.543.210-K",
        )?,
        Customer::corporate(
            "Laura Fernandez Diaz",
            "laura.fernandez@innovatech.cl",
            "+56955556666",
            "Av. Apoquindo 4500, Las Condes",
            "InnovaTech SpA",
            "77.888.999-1",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::{CustomerKind, CustomerRegistry};

    #[test]
    fn test_demo_set_is_valid_and_balanced() {
        let mut registry = CustomerRegistry::new();
        for customer in demo_customers().unwrap() {
            assert!(registry.add(customer));
        }

        let stats = registry.stats();
        assert_eq!(stats.total(), 6);
        for kind in CustomerKind::all() {
            assert_eq!(stats.count(kind), 2);
        }
    }
}
