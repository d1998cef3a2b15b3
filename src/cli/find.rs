use clap::Parser;
use customers::{Customer, domain::collection};
use tracing::instrument;

use super::{
    Context,
    render::{self, OutputFormat},
};

#[derive(Debug, Parser)]
pub struct Command {
    #[command(subcommand)]
    by: By,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t, global = true)]
    output: OutputFormat,
}

#[derive(Debug, Parser)]
enum By {
    /// Find the first customer with this id
    Id {
        /// The customer id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Find the first customer who made this purchase
    Purchase {
        /// The purchase number
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
}

impl Command {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let customers = context.customers()?;

        match self.by {
            By::Id { id } => {
                let Some(customer) = collection::find_by_id(&customers, id) else {
                    anyhow::bail!("Customer with ID {id} not found");
                };
                show(self.output, customer, true)
            }
            By::Purchase { number } => {
                let Some(customer) = collection::find_by_purchase(&customers, number) else {
                    anyhow::bail!("No customer found with purchase number {number}");
                };
                show(self.output, customer, false)
            }
        }
    }
}

fn show(output: OutputFormat, customer: &Customer, with_purchases: bool) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&render::to_json(customer))?);
        }
        OutputFormat::Table => {
            println!("Customer found: {customer}");
            if with_purchases {
                println!("Purchase numbers: {}", render::purchases(customer));
            }
        }
    }
    Ok(())
}
