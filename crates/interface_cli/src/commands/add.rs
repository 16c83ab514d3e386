use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use domain_customer::Customer;

use crate::app::AppContext;

/// Contact fields shared by every customer kind
#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Full name (letters and spaces, 2 to 100 characters)
    #[arg(long)]
    pub name: String,
    /// Email address, also the customer's identity
    #[arg(long)]
    pub email: String,
    /// Phone number (8 to 15 digits, optional leading +)
    #[arg(long)]
    pub phone: String,
    /// Postal address
    #[arg(long)]
    pub address: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AddCommand {
    /// Customer without discount
    Regular {
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Customer with a 15% discount and loyalty points
    Premium {
        #[command(flatten)]
        contact: ContactArgs,
        /// Opening point balance
        #[arg(long, default_value_t = 0)]
        points: u64,
    },
    /// Company customer with a 25% discount
    Corporate {
        #[command(flatten)]
        contact: ContactArgs,
        #[arg(long)]
        company: String,
        /// RUT of the company, e.g. 76.543.210-K
        #[arg(long)]
        tax_id: String,
    },
}

impl AddCommand {
    /// Builds the validated customer described by the arguments
    pub fn customer(&self) -> Result<Customer> {
        let customer = match self {
            AddCommand::Regular { contact } => {
                Customer::regular(&contact.name, &contact.email, &contact.phone, &contact.address)?
            }
            AddCommand::Premium { contact, points } => Customer::premium(
                &contact.name,
                &contact.email,
                &contact.phone,
                &contact.address,
                *points,
            )?,
            AddCommand::Corporate {
                contact,
                company,
                tax_id,
            } => Customer::corporate(
                &contact.name,
                &contact.email,
                &contact.phone,
                &contact.address,
                company,
                tax_id,
            )?,
        };
        Ok(customer)
    }

    pub fn execute(self, ctx: &mut AppContext, out: &mut dyn Write) -> Result<()> {
        let customer = self.customer()?;
        let line = customer.to_string();
        ctx.registry.try_add(customer)?;
        writeln!(out, "Added {}", line)?;
        Ok(())
    }
}
