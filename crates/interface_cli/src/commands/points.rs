use std::io::Write;

use anyhow::{anyhow, Result};
use clap::Subcommand;
use domain_customer::{CustomerError, CustomerProfile};

use crate::app::AppContext;

#[derive(Subcommand, Debug, Clone)]
pub enum PointsCommand {
    /// Credit points to a premium customer
    Add {
        email: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },
    /// Spend points of a premium customer
    Redeem {
        email: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },
}

impl PointsCommand {
    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let (email, points, redeem) = match self {
            PointsCommand::Add { email, points } => (email, points, false),
            PointsCommand::Redeem { email, points } => (email, points, true),
        };

        let customer = ctx
            .registry
            .find_mut(&email)
            .ok_or_else(|| CustomerError::not_found(email.trim()))?;
        let name = customer.name().to_string();
        let premium = customer
            .as_premium_mut()
            .ok_or_else(|| anyhow!("Customer '{}' is not a Premium customer", email.trim()))?;

        let balance = if redeem {
            premium.try_redeem_points(points)?
        } else {
            premium.try_add_points(points)?
        };

        let verb = if redeem { "redeemed by" } else { "credited to" };
        ctx.files
            .log()
            .info(&format!("POINTS: {} points {} '{}' - balance: {}", points, verb, name, balance));
        writeln!(out, "{} points {} {} (balance: {})", points, verb, name, balance)?;
        Ok(())
    }
}
