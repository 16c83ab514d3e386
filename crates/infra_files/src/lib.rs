//! File Infrastructure Layer
//!
//! This crate stores customer data in flat files: CSV import and export,
//! the plain-text summary report and the append-only audit log.
//!
//! # Layout
//!
//! All paths come from a [`StorageConfig`]:
//!
//! ```text
//! datos/clientes.csv          export target, loaded at startup
//! datos/clientes_entrada.csv  default import source
//! reportes/resumen.txt        summary report
//! logs/app.log                audit log
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_files::{CustomerFiles, StorageConfig};
//! use domain_customer::CustomerRegistry;
//!
//! let files = CustomerFiles::new(StorageConfig::default());
//! let mut registry = CustomerRegistry::new();
//! let summary = files.load(&mut registry)?;
//! let registry = registry.with_audit(files.audit_sink());
//! files.export(registry.customers(), None)?;
//! ```

pub mod config;
pub mod csv_store;
pub mod error;
pub mod files;
pub mod log_sink;
pub mod report;

pub use config::StorageConfig;
pub use csv_store::{export_customers, import_into, read_customers, ImportSummary, ParsedCustomers, RowError};
pub use error::{FileError, FileOperation};
pub use files::CustomerFiles;
pub use log_sink::{FileLogSink, LogEntry};
pub use report::{render_report, write_report};
