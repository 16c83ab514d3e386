//! Application context shared by every command

use anyhow::{bail, Context, Result};
use domain_customer::CustomerRegistry;
use infra_files::{CustomerFiles, RowError};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Registry loaded from disk plus the file layer that persists it
pub struct AppContext {
    pub files: CustomerFiles,
    pub registry: CustomerRegistry,
    rejected_rows: Vec<RowError>,
}

impl AppContext {
    /// Creates the storage directories and loads the saved customers
    ///
    /// Loading happens before the audit sink is attached so restoring the
    /// saved state does not add entries to the log.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let files = CustomerFiles::new(config.storage());
        Self::with_files(files)
    }

    pub fn with_files(files: CustomerFiles) -> Result<Self> {
        files
            .config()
            .ensure_directories()
            .context("Failed to create storage directories")?;

        let mut registry = CustomerRegistry::new();
        let summary = files
            .load(&mut registry)
            .context("Failed to load saved customers")?;
        if summary.has_errors() {
            warn!(rejected = summary.errors.len(), "Customers file has rejected rows");
        }
        info!(loaded = summary.imported, "Customer registry ready");

        registry.set_audit(files.audit_sink());
        Ok(Self {
            files,
            registry,
            rejected_rows: summary.errors,
        })
    }

    /// Rows of the customers file that failed to load
    pub fn rejected_rows(&self) -> &[RowError] {
        &self.rejected_rows
    }

    /// Fails when writing the customers file would drop rejected rows
    pub fn ensure_saveable(&self) -> Result<()> {
        if let Some(first) = self.rejected_rows.first() {
            bail!(
                "{} has {} invalid row(s) ({}); fix the file before running commands that save",
                self.files.config().customers_path().display(),
                self.rejected_rows.len(),
                first
            );
        }
        Ok(())
    }

    /// Writes the registry back to the customers file
    pub fn save(&self) -> Result<()> {
        self.ensure_saveable()?;
        let path = self.files.save(self.registry.customers())?;
        debug!(count = self.registry.len(), path = %path.display(), "Registry saved");
        Ok(())
    }
}
