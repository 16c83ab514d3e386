//! Plain-text summary report

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use core_kernel::format_timestamp;
use domain_customer::{Customer, CustomerKind, CustomerProfile};
use tracing::info;

use crate::config::ensure_parent;
use crate::error::{FileError, FileOperation};

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 30;

/// Renders the report for `customers`
///
/// The layout is a banner, the generation time, the total with a count
/// for each of the three kinds (zero included), then one block per
/// customer with its kind-specific data.
pub fn render_report(customers: &[Customer], generated_at: &NaiveDateTime) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_report_body(&mut out, customers, generated_at);
    out
}

fn write_report_body(
    out: &mut String,
    customers: &[Customer],
    generated_at: &NaiveDateTime,
) -> fmt::Result {
    let wide = "=".repeat(WIDE_RULE);
    let thin = "-".repeat(WIDE_RULE);
    let narrow = "-".repeat(NARROW_RULE);

    writeln!(out, "{wide}")?;
    writeln!(out, "{:>44}", "CUSTOMER REPORT - GIC SYSTEM")?;
    writeln!(out, "{:>37}", "SolutionTech S.A.")?;
    writeln!(out, "{wide}\n")?;

    writeln!(out, "Generated at: {}", format_timestamp(generated_at))?;
    writeln!(out, "{thin}\n")?;

    writeln!(out, "SUMMARY")?;
    writeln!(out, "{narrow}")?;
    writeln!(out, "Total customers: {}\n", customers.len())?;
    writeln!(out, "By kind:")?;
    for kind in CustomerKind::all() {
        let count = customers.iter().filter(|c| c.kind() == kind).count();
        writeln!(out, "  - {:<13} {}", format!("{}:", kind), count)?;
    }
    writeln!(out, "{narrow}\n")?;

    writeln!(out, "CUSTOMERS")?;
    writeln!(out, "{thin}")?;
    if customers.is_empty() {
        writeln!(out, "No customers registered.")?;
    }
    for (position, customer) in customers.iter().enumerate() {
        writeln!(out, "\n{}. {}", position + 1, customer.name())?;
        writeln!(out, "   Kind: {}", customer.kind())?;
        writeln!(out, "   Email: {}", customer.email())?;
        writeln!(out, "   Phone: {}", customer.phone())?;
        writeln!(out, "   Address: {}", customer.address())?;
        match customer {
            Customer::Premium(premium) => {
                writeln!(out, "   Points: {}", premium.points())?;
            }
            Customer::Corporate(corporate) => {
                writeln!(out, "   Company: {}", corporate.company_name())?;
                writeln!(out, "   RUT: {}", corporate.tax_id())?;
            }
            Customer::Regular(_) => {}
        }
    }

    writeln!(out, "\n{thin}")?;
    writeln!(out, "End of report")?;
    writeln!(out, "{wide}")
}

/// Renders the report and writes it to `path`, replacing any previous one
pub fn write_report(
    customers: &[Customer],
    path: &Path,
    generated_at: &NaiveDateTime,
) -> Result<(), FileError> {
    ensure_parent(path)?;
    fs::write(path, render_report(customers, generated_at))
        .map_err(|e| FileError::from_io(path, FileOperation::Write, e))?;

    info!(path = %path.display(), count = customers.len(), "Report written");
    Ok(())
}
