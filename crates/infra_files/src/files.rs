//! Customer file operations bound to a storage configuration
//!
//! [`CustomerFiles`] resolves default paths from a [`StorageConfig`] and
//! records every export, import and report in the audit log.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use core_kernel::{Clock, SystemClock};
use domain_customer::{AuditLevel, AuditSink, Customer, CustomerRegistry};
use tracing::debug;

use crate::config::StorageConfig;
use crate::csv_store::{self, ImportSummary};
use crate::error::FileError;
use crate::log_sink::FileLogSink;
use crate::report;

/// Entry point for every file the application reads or writes
#[derive(Clone)]
pub struct CustomerFiles {
    config: StorageConfig,
    log: FileLogSink,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for CustomerFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerFiles")
            .field("config", &self.config)
            .field("log", &self.log)
            .finish()
    }
}

impl CustomerFiles {
    pub fn new(config: StorageConfig) -> Self {
        let log = FileLogSink::new(config.log_path());
        Self {
            config,
            log,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for log entries and report timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.log = self.log.with_clock(clock.clone());
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// The audit log
    pub fn log(&self) -> &FileLogSink {
        &self.log
    }

    /// The audit log as a sink for a registry
    pub fn audit_sink(&self) -> Arc<dyn AuditSink> {
        Arc::new(self.log.clone())
    }

    /// Loads the customers file into `registry` without auditing
    ///
    /// A missing file loads nothing. Invalid rows are skipped and reported
    /// in the summary; callers must not overwrite the file while it holds
    /// rejected rows.
    pub fn load(&self, registry: &mut CustomerRegistry) -> Result<ImportSummary, FileError> {
        let path = self.config.customers_path();
        if !path.exists() {
            debug!(path = %path.display(), "No customers file to load");
            return Ok(ImportSummary::default());
        }

        let summary = match csv_store::import_into(registry, &path) {
            Ok(summary) => summary,
            Err(error) => {
                self.log.log_error("load", &error);
                return Err(error);
            }
        };
        for error in &summary.errors {
            self.log.log(AuditLevel::Warning, &format!("LOAD: skipped {}", error));
        }
        Ok(summary)
    }

    /// Writes `customers` to the customers file without an audit entry
    ///
    /// Failures are still recorded in the log.
    pub fn save(&self, customers: &[Customer]) -> Result<PathBuf, FileError> {
        let path = self.config.customers_path();
        match csv_store::export_customers(customers, &path) {
            Ok(count) => {
                debug!(count, path = %path.display(), "Customers saved");
                Ok(path)
            }
            Err(error) => {
                self.log.log_error("save", &error);
                Err(error)
            }
        }
    }

    /// Exports to `path`, or to the customers file when `None`
    pub fn export(&self, customers: &[Customer], path: Option<&Path>) -> Result<PathBuf, FileError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.config.customers_path());

        match csv_store::export_customers(customers, &path) {
            Ok(count) => {
                self.log.info(&format!(
                    "EXPORT: {} customers exported to {}",
                    count,
                    path.display()
                ));
                Ok(path)
            }
            Err(error) => {
                self.log.log_error("export", &error);
                Err(error)
            }
        }
    }

    /// Imports from `path`, or from the import file when `None`
    pub fn import_into(
        &self,
        registry: &mut CustomerRegistry,
        path: Option<&Path>,
    ) -> Result<ImportSummary, FileError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.config.import_path());

        let summary = match csv_store::import_into(registry, &path) {
            Ok(summary) => summary,
            Err(error) => {
                self.log.log_error("import", &error);
                return Err(error);
            }
        };

        self.log.info(&format!(
            "IMPORT: {} customers imported from {}",
            summary.imported,
            path.display()
        ));
        if summary.duplicates_skipped > 0 {
            self.log.log(
                AuditLevel::Warning,
                &format!("IMPORT: {} duplicate customers skipped", summary.duplicates_skipped),
            );
        }
        if summary.has_errors() {
            self.log.log(
                AuditLevel::Warning,
                &format!("IMPORT: {} errors during import", summary.errors.len()),
            );
        }
        Ok(summary)
    }

    /// Writes the report to `path`, or to the report file when `None`
    pub fn write_report(
        &self,
        customers: &[Customer],
        path: Option<&Path>,
    ) -> Result<PathBuf, FileError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.config.report_path());

        match report::write_report(customers, &path, &self.clock.now()) {
            Ok(()) => {
                self.log.info(&format!("REPORT: report written to {}", path.display()));
                Ok(path)
            }
            Err(error) => {
                self.log.log_error("report", &error);
                Err(error)
            }
        }
    }
}
