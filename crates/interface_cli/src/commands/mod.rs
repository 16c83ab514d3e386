//! `gic` subcommands

pub mod add;
pub mod files;
pub mod points;

use std::io::Write;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use domain_customer::{CustomerKind, CustomerProfile, CustomerUpdate, UnknownKind};
use infra_files::FileError;
use tracing::debug;

use crate::app::AppContext;
use crate::sample;

pub use add::AddCommand;
pub use files::{ExportCommand, ImportCommand, LogCommand, ReportCommand};
pub use points::PointsCommand;

/// Width of the bar drawn by `stats` for a kind holding every customer
const STATS_BAR_WIDTH: usize = 20;

#[derive(Parser, Debug, Clone)]
#[command(name = "gic", version, about = "Customer registry for SolutionTech S.A.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a new customer
    #[command(subcommand)]
    Add(AddCommand),
    /// List customers, optionally of a single kind
    List {
        /// Kind tag: Regular, Premium or Corporativo (any case)
        #[arg(long, value_parser = parse_kind_arg)]
        kind: Option<CustomerKind>,
    },
    /// Show a customer's details and benefits
    Show {
        email: String,
    },
    /// Change a customer's contact fields
    Update {
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Remove a customer
    Remove {
        email: String,
    },
    /// Count customers per kind
    Stats,
    /// Manage premium loyalty points
    #[command(subcommand)]
    Points(PointsCommand),
    /// Register the demo data set
    Seed,
    Import(ImportCommand),
    Export(ExportCommand),
    Report(ReportCommand),
    Log(LogCommand),
}

impl Command {
    /// Name used as the context of audit error entries
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::List { .. } => "list",
            Command::Show { .. } => "show",
            Command::Update { .. } => "update",
            Command::Remove { .. } => "remove",
            Command::Stats => "stats",
            Command::Points(_) => "points",
            Command::Seed => "seed",
            Command::Import(_) => "import",
            Command::Export(_) => "export",
            Command::Report(_) => "report",
            Command::Log(_) => "log",
        }
    }

    /// Whether the command changes the registry
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Update { .. }
                | Command::Remove { .. }
                | Command::Points(_)
                | Command::Seed
                | Command::Import(_)
        )
    }
}

impl Cli {
    /// Runs the command against `ctx`, saving the registry after mutations
    ///
    /// Mutating commands are refused while the customers file holds rows
    /// that failed to load. Failures are recorded in the audit log before
    /// being returned; file errors are recorded by the file layer itself.
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let name = self.command.name();
        let result = self.command.run_and_save(ctx, out);

        if let Err(error) = &result {
            if error.downcast_ref::<FileError>().is_none() {
                ctx.files.log().log_error(name, format!("{:#}", error));
            }
        }
        result
    }
}

impl Command {
    fn run_and_save(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let mutating = self.is_mutating();
        if mutating {
            ctx.ensure_saveable()?;
        }
        self.run(ctx, out)?;
        if mutating {
            ctx.save()?;
        }
        Ok(())
    }

    fn run(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        debug!(command = self.name(), "Running command");
        match self {
            Command::Add(cmd) => cmd.execute(ctx, out),
            Command::List { kind } => list(ctx, kind, out),
            Command::Show { email } => show(ctx, &email, out),
            Command::Update {
                email,
                name,
                phone,
                address,
            } => {
                let update = CustomerUpdate {
                    name,
                    phone,
                    address,
                };
                self::update(ctx, &email, update, out)
            }
            Command::Remove { email } => {
                let customer = ctx.registry.try_remove(&email)?;
                writeln!(out, "Removed {}", customer)?;
                Ok(())
            }
            Command::Stats => stats(ctx, out),
            Command::Points(cmd) => cmd.execute(ctx, out),
            Command::Seed => seed(ctx, out),
            Command::Import(cmd) => cmd.execute(ctx, out),
            Command::Export(cmd) => cmd.execute(ctx, out),
            Command::Report(cmd) => cmd.execute(ctx, out),
            Command::Log(cmd) => cmd.execute(ctx, out),
        }
    }
}

/// Parses `--kind`, ignoring case and accepting `corporate` for `Corporativo`
fn parse_kind_arg(value: &str) -> Result<CustomerKind, UnknownKind> {
    match value.trim().to_lowercase().as_str() {
        "regular" => Ok(CustomerKind::Regular),
        "premium" => Ok(CustomerKind::Premium),
        "corporativo" | "corporate" => Ok(CustomerKind::Corporate),
        _ => Err(UnknownKind(value.trim().to_string())),
    }
}

fn list(ctx: &AppContext, kind: Option<CustomerKind>, out: &mut dyn Write) -> Result<()> {
    let customers = match kind {
        Some(kind) => ctx.registry.list_by_kind(kind),
        None => ctx.registry.customers().iter().collect(),
    };

    if customers.is_empty() {
        writeln!(out, "No customers registered.")?;
        return Ok(());
    }
    for customer in &customers {
        writeln!(out, "{}", customer)?;
    }
    writeln!(out, "{} customer(s)", customers.len())?;
    Ok(())
}

fn show(ctx: &AppContext, email: &str, out: &mut dyn Write) -> Result<()> {
    let customer = ctx.registry.try_find(email)?;

    writeln!(out, "{}", customer)?;
    writeln!(out, "  Kind:     {}", customer.kind())?;
    writeln!(out, "  Email:    {}", customer.email())?;
    writeln!(out, "  Phone:    {}", customer.phone())?;
    writeln!(out, "  Address:  {}", customer.address())?;
    writeln!(out, "  Discount: {}", customer.discount_rate())?;
    if let Some(premium) = customer.as_premium() {
        writeln!(out, "  Points:   {}", premium.points())?;
    }
    writeln!(out, "  Benefit:  {}", customer.exclusive_benefit())?;

    if let Some(corporate) = customer.as_corporate() {
        let invoice = corporate.invoice_info();
        writeln!(out, "Invoice to:")?;
        writeln!(out, "  Company:  {}", invoice.company_name)?;
        writeln!(out, "  RUT:      {}", invoice.tax_id)?;
        writeln!(out, "  Address:  {}", invoice.address)?;
        writeln!(out, "  Contact:  {} <{}>", invoice.contact_name, invoice.email)?;
    }
    Ok(())
}

fn update(
    ctx: &mut AppContext,
    email: &str,
    update: CustomerUpdate,
    out: &mut dyn Write,
) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update: pass --name, --phone or --address");
    }

    let changed = ctx.registry.update_validated(email, update)?;
    if changed.is_empty() {
        writeln!(out, "No changes for {}", email.trim())?;
    } else {
        writeln!(out, "Updated {}: {}", email.trim(), changed.join(", "))?;
    }
    Ok(())
}

fn stats(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let stats = ctx.registry.stats();
    writeln!(out, "Total customers: {}", stats.total())?;

    for kind in CustomerKind::all() {
        let count = stats.count(kind);
        let bar = if stats.total() == 0 {
            0
        } else {
            count * STATS_BAR_WIDTH / stats.total()
        };
        writeln!(
            out,
            "  {:<13} {:>4} {:>5.1}% {}",
            kind.tag(),
            count,
            stats.percentage(kind),
            "#".repeat(bar)
        )?;
    }
    Ok(())
}

fn seed(ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
    let mut added = 0;
    let mut skipped = 0;
    for customer in sample::demo_customers()? {
        if ctx.registry.add(customer) {
            added += 1;
        } else {
            skipped += 1;
        }
    }

    writeln!(out, "Seeded {} demo customers", added)?;
    if skipped > 0 {
        writeln!(out, "{} already registered", skipped)?;
    }
    Ok(())
}
