use clap::{Parser, ValueEnum};
use customers::domain::collection;
use tracing::instrument;

use super::{
    Context,
    render::{self, OutputFormat},
    terminal::Colorize,
};

/// Command arguments for `cust list`.
#[derive(Debug, Parser)]
#[command(about = "List customers, optionally sorted by name or filtered by type")]
pub struct Command {
    /// Listing order (default: file order).
    #[arg(long, value_enum, default_value_t)]
    sort: SortOrder,

    /// Show only customers of this type (exact, case-sensitive match).
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Listing orders.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum SortOrder {
    /// The order customers appear in the data file.
    #[default]
    File,
    /// Ascending by name.
    Name,
}

impl Command {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let mut customers = context.customers()?;

        if self.sort == SortOrder::Name {
            collection::sort_by_name(&mut customers);
        }

        let selected = match &self.kind {
            Some(kind) => collection::filter_by_type(&customers, kind),
            None => customers.iter().collect(),
        };

        if self.output == OutputFormat::Json {
            return render::print_json(selected);
        }

        match (&self.kind, selected.is_empty()) {
            (None, true) => println!("{}", "No customers found.".dim()),
            (Some(kind), true) => {
                println!("{}", format!("No customers found with type: {kind}").dim());
            }
            (None, false) => {
                println!("{}", "=== All Customers ===".heading());
                render::numbered(selected);
            }
            (Some(kind), false) => {
                println!("{}", format!("=== Customers of type: {kind} ===").heading());
                render::numbered(selected);
            }
        }

        Ok(())
    }
}
