//! Integration tests for the file infrastructure

use std::fs;
use std::sync::Arc;

use proptest::prelude::*;

use domain_customer::{AuditLevel, CustomerProfile, CustomerRegistry, CustomerUpdate};
use infra_files::{
    export_customers, read_customers, CustomerFiles, FileLogSink, ImportSummary, LogEntry,
    StorageConfig,
};
use test_utils::{
    assert_registry_emails, assert_same_customers, unique_customers_strategy, CsvFixtures,
    CustomerFixtures, TemporalFixtures,
};

fn files_in(dir: &std::path::Path) -> CustomerFiles {
    CustomerFiles::new(StorageConfig::rooted_at(dir)).with_clock(Arc::new(TemporalFixtures::clock()))
}

// ============================================================================
// CSV Round Trip Tests
// ============================================================================

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_scenario_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientes.csv");
        let customers = CustomerFixtures::scenario();

        export_customers(&customers, &path).unwrap();
        let parsed = read_customers(&path).unwrap();

        assert!(parsed.errors.is_empty());
        assert_same_customers(&parsed.customers, &customers);
    }

    #[test]
    fn test_fixture_input_matches_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientes.csv");

        export_customers(&CustomerFixtures::scenario(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CsvFixtures::scenario_input());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn export_then_import_reproduces_records(customers in unique_customers_strategy(8)) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("clientes.csv");

            export_customers(&customers, &path).unwrap();
            let parsed = read_customers(&path).unwrap();

            prop_assert!(parsed.errors.is_empty());
            prop_assert_eq!(parsed.customers, customers);
        }
    }
}

// ============================================================================
// Import Tests
// ============================================================================

mod import_tests {
    use super::*;

    #[test]
    fn test_mixed_input_keeps_valid_rows() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        files.config().ensure_directories().unwrap();
        fs::write(files.config().import_path(), CsvFixtures::mixed_input()).unwrap();

        let mut registry = CustomerRegistry::new();
        let summary = files.import_into(&mut registry, None).unwrap();

        assert_eq!(summary.imported, 2);
        let lines: Vec<u64> = summary.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert_registry_emails(&registry, &["juan@x.com", "ana@x.com"]);

        let log = files.log().tail(10).unwrap();
        assert!(log.iter().any(|l| l.contains("IMPORT: 2 customers imported")));
        assert!(log.iter().any(|l| l.contains("[WARNING] IMPORT: 3 errors during import")));
    }

    #[test]
    fn test_missing_columns_are_reported_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        let path = dir.path().join("in.csv");
        fs::write(&path, CsvFixtures::missing_columns_input()).unwrap();

        let error = files
            .import_into(&mut CustomerRegistry::new(), Some(&path))
            .unwrap_err();

        assert_eq!(error.code(), "ARC003");
        let log = files.log().tail_entries(1).unwrap();
        assert_eq!(log[0].level, AuditLevel::Error);
        assert!(log[0].message.starts_with("ERROR in import:"));
    }

    #[test]
    fn test_missing_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = files_in(dir.path())
            .import_into(&mut CustomerRegistry::new(), None)
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_kind_tags_are_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            format!(
                "{}\nregular,Juan,juan@x.com,987654321,Av 1234 Iquique,,,\n\
                 premium,Ana,ana@x.com,987654322,Av 2 Valpo,200,,\n\
                 Regular,Pia,pia@x.com,987654323,Av 1234 Iquique,,,\n",
                CsvFixtures::header()
            ),
        )
        .unwrap();

        let parsed = read_customers(&path).unwrap();

        assert_eq!(parsed.customers.len(), 1);
        assert_eq!(parsed.customers[0].email(), "pia@x.com");
        let lines: Vec<u64> = parsed.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert!(parsed.errors[0].message.contains("Unknown customer kind: 'regular'"));
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        let path = dir.path().join("in.csv");
        fs::write(&path, CsvFixtures::scenario_input()).unwrap();

        let mut registry = CustomerFixtures::scenario_registry();
        let summary = files.import_into(&mut registry, Some(&path)).unwrap();

        assert_eq!(summary.imported, 0);
        assert_eq!(summary.duplicates_skipped, 3);
        assert_eq!(registry.len(), 3);
    }
}

// ============================================================================
// Persistence and Audit Tests
// ============================================================================

mod persistence_tests {
    use super::*;

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());

        let exported = files.export(&CustomerFixtures::scenario(), None).unwrap();
        assert_eq!(exported, files.config().customers_path());

        let mut registry = CustomerRegistry::new();
        assert_eq!(files.load(&mut registry).unwrap().imported, 3);
        assert_same_customers(registry.customers(), &CustomerFixtures::scenario());
    }

    #[test]
    fn test_load_reports_rejected_rows() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        files.config().ensure_directories().unwrap();
        fs::write(files.config().customers_path(), CsvFixtures::mixed_input()).unwrap();

        let mut registry = CustomerRegistry::new();
        let summary = files.load(&mut registry).unwrap();

        assert_eq!(summary.imported, 2);
        assert!(summary.has_errors());
        assert_eq!(summary.errors.len(), 3);
        let warnings = files.log().tail_entries(10).unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|e| e.level == AuditLevel::Warning));
    }

    #[test]
    fn test_permissive_update_does_not_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        let mut registry = CustomerFixtures::scenario_registry();
        assert!(registry.update("ana@x.com", CustomerUpdate::new().with_name("Ana B.")));

        files.save(registry.customers()).unwrap();
        let parsed = read_customers(&files.config().customers_path()).unwrap();

        assert_eq!(parsed.customers.len(), 2);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].line, 3);
        assert!(parsed.errors[0].message.contains("Invalid name: 'Ana B.'"));
    }

    #[test]
    fn test_save_is_not_audited() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());

        let path = files.save(&CustomerFixtures::scenario()).unwrap();

        assert_eq!(path, files.config().customers_path());
        assert!(files.log().tail(10).unwrap().is_empty());
    }

    #[test]
    fn test_failed_save_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let config = StorageConfig::new(
            blocker.join("datos"),
            dir.path().join("reportes"),
            dir.path().join("logs"),
        );
        let files = CustomerFiles::new(config).with_clock(Arc::new(TemporalFixtures::clock()));

        assert!(files.save(&CustomerFixtures::scenario()).is_err());

        let entries = files.log().tail_entries(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, AuditLevel::Error);
        assert!(entries[0].message.starts_with("ERROR in save:"));
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = CustomerRegistry::new();
        assert_eq!(files_in(dir.path()).load(&mut registry).unwrap(), ImportSummary::default());
    }

    #[test]
    fn test_registry_audit_goes_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());
        let mut registry = CustomerRegistry::new().with_audit(files.audit_sink());

        registry.add(CustomerFixtures::ana());
        registry.update("ana@x.com", CustomerUpdate::new().with_address("Av 5 Valpo"));
        registry.remove("ana@x.com");

        let entries = files.log().tail_entries(10).unwrap();
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "ADDED: new customer 'Ana' (Premium) - email: ana@x.com",
                "MODIFIED: customer 'Ana' - fields: address",
                "REMOVED: customer 'Ana' (Premium) - email: ana@x.com",
            ]
        );
        assert!(entries.iter().all(|e| e.timestamp == TemporalFixtures::report_time()));
    }

    #[test]
    fn test_report_is_written_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(dir.path());

        let path = files.write_report(&CustomerFixtures::scenario(), None).unwrap();

        let report = fs::read_to_string(path).unwrap();
        assert!(report.contains("Generated at: 2024-03-15 09:30:05"));
        assert!(report.contains("Total customers: 3"));
        let last = files.log().tail(1).unwrap();
        assert!(last[0].contains("REPORT: report written to"));
    }

    #[test]
    fn test_log_helpers() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileLogSink::new(dir.path().join("app.log"))
            .with_clock(Arc::new(TemporalFixtures::clock()));

        assert!(sink.log_customer_added(&CustomerFixtures::juan()));
        assert!(sink.log_customer_modified(&CustomerFixtures::juan(), &["name", "phone"]));
        assert!(sink.log_customer_removed(&CustomerFixtures::juan()));
        assert!(sink.log_error("", "disk full"));

        let lines = sink.tail(4).unwrap();
        assert_eq!(lines[1], "[2024-03-15 09:30:05] [INFO] MODIFIED: customer 'Juan' - fields: name, phone");
        assert_eq!(
            LogEntry::parse(&lines[3]).map(|e| e.message),
            Some("ERROR: disk full".to_string())
        );
    }
}
