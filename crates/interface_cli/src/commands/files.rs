use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;

/// Import customers from a CSV file, skipping registered emails
#[derive(Args, Debug, Clone)]
pub struct ImportCommand {
    /// Source file; defaults to the configured import file
    pub path: Option<PathBuf>,
}

impl ImportCommand {
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let summary = ctx
            .files
            .import_into(&mut ctx.registry, self.path.as_deref())?;

        writeln!(out, "Imported {} customers", summary.imported)?;
        if summary.duplicates_skipped > 0 {
            writeln!(out, "Skipped {} already registered", summary.duplicates_skipped)?;
        }
        for error in &summary.errors {
            writeln!(out, "  {}", error)?;
        }
        Ok(())
    }
}

/// Export every customer to a CSV file
#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    /// Target file; defaults to the configured customers file
    pub path: Option<PathBuf>,
}

impl ExportCommand {
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let customers_path = ctx.files.config().customers_path();
        let target = self.path.unwrap_or_else(|| customers_path.clone());
        if target == customers_path {
            ctx.ensure_saveable()?;
        }

        let path = ctx.files.export(ctx.registry.customers(), Some(target.as_path()))?;
        writeln!(out, "Exported {} customers to {}", ctx.registry.len(), path.display())?;
        Ok(())
    }
}

/// Write the plain-text summary report
#[derive(Args, Debug, Clone)]
pub struct ReportCommand {
    /// Target file; defaults to the configured report file
    pub path: Option<PathBuf>,
}

impl ReportCommand {
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let path = ctx
            .files
            .write_report(ctx.registry.customers(), self.path.as_deref())?;
        writeln!(out, "Report written to {}", path.display())?;
        Ok(())
    }
}

/// Print the most recent audit log entries
#[derive(Args, Debug, Clone)]
pub struct LogCommand {
    #[arg(long, default_value_t = 50)]
    pub lines: usize,
}

impl LogCommand {
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let lines = ctx.files.log().tail(self.lines)?;
        if lines.is_empty() {
            writeln!(out, "Log is empty.")?;
        }
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
