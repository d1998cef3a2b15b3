use customers::{Customer, domain::collection};
use tracing::instrument;

use super::{Context, parse_field, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Customer id (non-positive values become 1)
    #[arg(long, allow_negative_numbers = true)]
    id: i64,

    /// Honorific, e.g. Mr, Mrs, Ms, Dr
    #[arg(long, value_parser = parse_field)]
    title: String,

    /// Customer name
    #[arg(long, value_parser = parse_field)]
    name: String,

    /// Customer type: New or Regular (anything else becomes New)
    #[arg(long = "type", value_name = "TYPE", default_value = "New")]
    kind: String,

    /// Purchase numbers (comma-separated)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    purchases: Vec<i64>,

    /// Purchase count (defaults to the number of purchases kept)
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
}

impl Command {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let loaded = context.load()?;
        context.ensure_rewritable(&loaded.skipped)?;
        let mut customers = loaded.customers;

        let mut customer = Customer::new(
            self.id,
            self.title,
            self.name,
            &self.kind,
            self.count.unwrap_or(0),
            self.purchases,
        );
        if self.count.is_none() {
            // Non-positive purchase numbers have been dropped by now.
            let kept = i64::try_from(customer.purchase_numbers().len()).unwrap_or(i64::MAX);
            customer.set_purchases_count(kept);
        }

        if collection::find_by_id(&customers, customer.id()).is_some() {
            eprintln!(
                "{}",
                format!("⚠️  A customer with ID {} already exists", customer.id()).warning()
            );
        }

        let summary = customer.to_string();
        collection::add(&mut customers, customer);
        context.save(&customers)?;

        println!("{}", "✅ Customer added successfully!".success());
        println!("  {summary}");
        Ok(())
    }
}
