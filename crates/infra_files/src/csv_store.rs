//! CSV import and export of customer records
//!
//! # File Layout
//!
//! ```text
//! tipo,nombre,email,telefono,direccion,puntos,empresa,rut
//! Premium,Ana,ana@x.com,987654321,Av 2 Valpo,1500,,
//! Corporativo,Carlos,carlos@x.com,912345678,Av 3 Stgo,,TechCorp S.A.,76.543.210-K
//! ```
//!
//! Columns that do not apply to a record's kind are left empty. Imports
//! only require the first five columns; header names are matched
//! case-insensitively after trimming.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

use domain_customer::{
    Customer, CustomerKind, CustomerProfile, CustomerRecord, CustomerRegistry, UnknownKind,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ensure_parent;
use crate::error::{FileError, FileOperation};

/// Column names written on export
pub const HEADER: [&str; 8] = [
    "tipo", "nombre", "email", "telefono", "direccion", "puntos", "empresa", "rut",
];

const REQUIRED_COLUMNS: [&str; 5] = ["tipo", "nombre", "email", "telefono", "direccion"];

#[derive(Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    address: &'a str,
    points: Option<u64>,
    company_name: Option<&'a str>,
    tax_id: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a CustomerRecord) -> Self {
        Self {
            kind: record.kind.tag(),
            name: &record.name,
            email: &record.email,
            phone: &record.phone,
            address: &record.address,
            points: record.points,
            company_name: record.company_name.as_deref(),
            tax_id: record.tax_id.as_deref(),
        }
    }
}

/// A data row that could not be turned into a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file (the header is line 1)
    pub line: u64,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Customers read from a file together with the rows that failed
#[derive(Debug, Clone, Default)]
pub struct ParsedCustomers {
    pub customers: Vec<Customer>,
    pub errors: Vec<RowError>,
}

/// Outcome of importing a file into a registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Customers added to the registry
    pub imported: usize,
    /// Valid rows whose email was already registered
    pub duplicates_skipped: usize,
    /// Rows rejected by validation or parsing
    pub errors: Vec<RowError>,
}

impl ImportSummary {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Writes every customer to `path`, replacing any previous contents
///
/// # Returns
///
/// The number of data rows written
pub fn export_customers(customers: &[Customer], path: &Path) -> Result<usize, FileError> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| FileError::from_io(path, FileOperation::Write, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(HEADER)?;

    for customer in customers {
        let record = customer.to_record();
        writer.serialize(CsvRow::from_record(&record))?;
    }
    writer
        .flush()
        .map_err(|e| FileError::from_io(path, FileOperation::Write, e))?;

    info!(path = %path.display(), count = customers.len(), "Customers exported");
    Ok(customers.len())
}

/// Reads customers from `path`
///
/// Rows failing validation, naming an unknown kind or carrying a
/// non-numeric point balance are collected as [`RowError`]s; the valid
/// rows are still returned.
///
/// # Errors
///
/// * `FileError::NotFound` - the file does not exist
/// * `FileError::PermissionDenied` - the file cannot be read
/// * `FileError::MalformedFormat` - a required column is missing
pub fn read_customers(path: &Path) -> Result<ParsedCustomers, FileError> {
    let file = File::open(path).map_err(|e| FileError::from_io(path, FileOperation::Read, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.contains_key(*c))
        .collect();
    if !missing.is_empty() {
        return Err(FileError::malformed(
            path,
            format!("missing required columns: {}", missing.join(", ")),
        ));
    }

    let mut parsed = ParsedCustomers::default();
    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 2;
        let row = match result {
            Ok(row) => row,
            Err(error) => {
                let line = error.position().map(|p| p.line()).unwrap_or(fallback_line);
                parsed.errors.push(RowError { line, message: error.to_string() });
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);

        match customer_from_row(&columns, &row) {
            Ok(customer) => parsed.customers.push(customer),
            Err(message) => {
                debug!(line, error = %message, "Row rejected");
                parsed.errors.push(RowError { line, message });
            }
        }
    }

    if !parsed.errors.is_empty() {
        warn!(path = %path.display(), errors = parsed.errors.len(), "Rows rejected during import");
    }
    Ok(parsed)
}

fn column<'r>(columns: &HashMap<String, usize>, row: &'r csv::StringRecord, name: &str) -> &'r str {
    columns
        .get(name)
        .and_then(|i| row.get(*i))
        .map(str::trim)
        .unwrap_or("")
}

fn optional_column(
    columns: &HashMap<String, usize>,
    row: &csv::StringRecord,
    name: &str,
) -> Option<String> {
    Some(column(columns, row, name))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn customer_from_row(
    columns: &HashMap<String, usize>,
    row: &csv::StringRecord,
) -> Result<Customer, String> {
    let kind: CustomerKind = column(columns, row, "tipo")
        .parse()
        .map_err(|e: UnknownKind| e.to_string())?;

    let points = match column(columns, row, "puntos") {
        "" => None,
        text => Some(
            text.parse::<u64>()
                .map_err(|_| format!("Invalid points value: '{}'", text))?,
        ),
    };

    let record = CustomerRecord {
        kind,
        name: column(columns, row, "nombre").to_string(),
        email: column(columns, row, "email").to_string(),
        phone: column(columns, row, "telefono").to_string(),
        address: column(columns, row, "direccion").to_string(),
        discount_rate: kind.discount_rate(),
        points,
        company_name: optional_column(columns, row, "empresa"),
        tax_id: optional_column(columns, row, "rut"),
    };

    Customer::try_from(record).map_err(|e| e.to_string())
}

/// Imports `path` into `registry`, skipping emails already registered
pub fn import_into(
    registry: &mut CustomerRegistry,
    path: &Path,
) -> Result<ImportSummary, FileError> {
    let parsed = read_customers(path)?;

    let mut summary = ImportSummary {
        errors: parsed.errors,
        ..ImportSummary::default()
    };
    for customer in parsed.customers {
        if registry.add(customer) {
            summary.imported += 1;
        } else {
            summary.duplicates_skipped += 1;
        }
    }

    info!(
        path = %path.display(),
        imported = summary.imported,
        duplicates = summary.duplicates_skipped,
        errors = summary.errors.len(),
        "Customers imported"
    );
    Ok(summary)
}
