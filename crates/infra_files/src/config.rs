//! Storage locations
//!
//! Every file path the application touches is derived from a
//! [`StorageConfig`], passed explicitly to whoever needs it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FileError, FileOperation};

/// Directories and file names used for customer data, reports and logs
///
/// # Example
///
/// ```rust
/// use infra_files::StorageConfig;
///
/// let config = StorageConfig::rooted_at("/tmp/gic")
///     .customers_file("export.csv")
///     .report_file("summary.txt");
///
/// assert!(config.customers_path().ends_with("datos/export.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the CSV files
    pub data_dir: PathBuf,
    /// Directory receiving generated reports
    pub reports_dir: PathBuf,
    /// Directory holding the audit log
    pub logs_dir: PathBuf,
    /// Export target and startup source, inside `data_dir`
    pub customers_file: String,
    /// Default import source, inside `data_dir`
    pub import_file: String,
    /// Default report target, inside `reports_dir`
    pub report_file: String,
    /// Audit log, inside `logs_dir`
    pub log_file: String,
}

impl StorageConfig {
    /// Creates a configuration with the default file names
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Directory for `clientes.csv` and `clientes_entrada.csv`
    /// * `reports_dir` - Directory for `resumen.txt`
    /// * `logs_dir` - Directory for `app.log`
    pub fn new(
        data_dir: impl Into<PathBuf>,
        reports_dir: impl Into<PathBuf>,
        logs_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            reports_dir: reports_dir.into(),
            logs_dir: logs_dir.into(),
            customers_file: "clientes.csv".to_string(),
            import_file: "clientes_entrada.csv".to_string(),
            report_file: "resumen.txt".to_string(),
            log_file: "app.log".to_string(),
        }
    }

    /// Places the three default directories under `base`
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self::new(base.join("datos"), base.join("reportes"), base.join("logs"))
    }

    /// Sets the export file name (default: `clientes.csv`)
    pub fn customers_file(mut self, name: impl Into<String>) -> Self {
        self.customers_file = name.into();
        self
    }

    /// Sets the import file name (default: `clientes_entrada.csv`)
    pub fn import_file(mut self, name: impl Into<String>) -> Self {
        self.import_file = name.into();
        self
    }

    /// Sets the report file name (default: `resumen.txt`)
    pub fn report_file(mut self, name: impl Into<String>) -> Self {
        self.report_file = name.into();
        self
    }

    /// Sets the log file name (default: `app.log`)
    pub fn log_file(mut self, name: impl Into<String>) -> Self {
        self.log_file = name.into();
        self
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn import_path(&self) -> PathBuf {
        self.data_dir.join(&self.import_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.reports_dir.join(&self.report_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.logs_dir.join(&self.log_file)
    }

    /// Creates the data, reports and logs directories if missing
    pub fn ensure_directories(&self) -> Result<(), FileError> {
        for dir in [&self.data_dir, &self.reports_dir, &self.logs_dir] {
            fs::create_dir_all(dir)
                .map_err(|e| FileError::from_io(dir, FileOperation::Write, e))?;
            debug!(dir = %dir.display(), "Directory ready");
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new("datos", "reportes", "logs")
    }
}

/// Creates the parent directory of `path` if it has one
pub(crate) fn ensure_parent(path: &Path) -> Result<(), FileError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| FileError::from_io(parent, FileOperation::Write, e)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StorageConfig::default();
        assert_eq!(config.customers_path(), PathBuf::from("datos/clientes.csv"));
        assert_eq!(config.import_path(), PathBuf::from("datos/clientes_entrada.csv"));
        assert_eq!(config.report_path(), PathBuf::from("reportes/resumen.txt"));
        assert_eq!(config.log_path(), PathBuf::from("logs/app.log"));
    }

    #[test]
    fn test_ensure_directories_creates_tree() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::rooted_at(dir.path());

        config.ensure_directories().unwrap();

        assert!(config.data_dir.is_dir());
        assert!(config.reports_dir.is_dir());
        assert!(config.logs_dir.is_dir());
    }
}
