//! Pre-built Test Fixtures
//!
//! Provides ready-to-use customers, CSV inputs and instants. Every fixture
//! is valid unless its name says otherwise.

use chrono::NaiveDateTime;
use core_kernel::{Clock, FixedClock};
use domain_customer::{Customer, CustomerRegistry};

/// Fixture for the three-customer scenario (one of each kind)
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Regular customer `juan@x.com`
    pub fn juan() -> Customer {
        Customer::regular("Juan", "juan@x.com", "987654321", "Av 1234 Iquique")
            .expect("juan fixture is valid")
    }

    /// Premium customer `ana@x.com` with 200 points
    pub fn ana() -> Customer {
        Customer::premium("Ana", "ana@x.com", "987654322", "Av 2 Valpo", 200)
            .expect("ana fixture is valid")
    }

    /// Corporate customer `carlos@x.com` of TechCorp S.A.
    pub fn carlos() -> Customer {
        Customer::corporate(
            "Carlos",
            "carlos@x.com",
            "912345678",
            "Av 3 Stgo",
            "TechCorp S.A.",
            "76.543.210-K",
        )
        .expect("carlos fixture is valid")
    }

    /// Juan, Ana and Carlos, in that order
    pub fn scenario() -> Vec<Customer> {
        vec![Self::juan(), Self::ana(), Self::carlos()]
    }

    /// A registry holding the scenario customers
    pub fn scenario_registry() -> CustomerRegistry {
        let mut registry = CustomerRegistry::new();
        for customer in Self::scenario() {
            registry.add(customer);
        }
        registry
    }
}

/// Fixture for CSV file contents
pub struct CsvFixtures;

impl CsvFixtures {
    /// Export header
    pub fn header() -> &'static str {
        "tipo,nombre,email,telefono,direccion,puntos,empresa,rut"
    }

    /// The scenario customers as an import file
    pub fn scenario_input() -> String {
        format!(
            "{}\n\
             Regular,Juan,juan@x.com,987654321,Av 1234 Iquique,,,\n\
             Premium,Ana,ana@x.com,987654322,Av 2 Valpo,200,,\n\
             Corporativo,Carlos,carlos@x.com,912345678,Av 3 Stgo,,TechCorp S.A.,76.543.210-K\n",
            Self::header()
        )
    }

    /// Two valid rows around three invalid ones (lines 3, 4 and 5)
    pub fn mixed_input() -> String {
        format!(
            "{}\n\
             Regular,Juan,juan@x.com,987654321,Av 1234 Iquique,,,\n\
             Gold,Pia,pia@x.com,987654323,Av 1234 Iquique,,,\n\
             Premium,Luis,luis@x.com,987654324,Av 9 Arica,muchos,,\n\
             Corporativo,Rosa,rosa@x.com,987654325,Av 9 Arica,,Rosa Ltda,123\n\
             Premium,Ana,ana@x.com,987654322,Av 2 Valpo,200,,\n",
            Self::header()
        )
    }

    /// A file lacking the phone and address columns
    pub fn missing_columns_input() -> &'static str {
        "tipo,nombre,email\nRegular,Juan,juan@x.com\n"
    }
}

/// Fixture for instants used in logs and reports
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-03-15 09:30:05
    pub fn clock() -> FixedClock {
        FixedClock::at(2024, 3, 15, 9, 30, 5).expect("fixture instant is valid")
    }

    pub fn report_time() -> NaiveDateTime {
        Self::clock().now()
    }
}
