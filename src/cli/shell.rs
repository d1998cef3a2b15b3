//! The interactive customer management menu.
//!
//! The shell owns the in-memory collection for the lifetime of the session.
//! It is loaded once on start and written back on request, and on exit when
//! `save_on_exit` is configured.

use customers::{Customer, CustomerType, LoadStatus, domain::collection, storage::SkippedLine};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use tracing::instrument;

use super::{Context, render, terminal::Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Add,
    DisplayAll,
    FindById,
    FindByPurchase,
    Save,
    Exit,
}

impl MenuItem {
    const ALL: [Self; 6] = [
        Self::Add,
        Self::DisplayAll,
        Self::FindById,
        Self::FindByPurchase,
        Self::Save,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Customer",
            Self::DisplayAll => "Display All Customers",
            Self::FindById => "Find Customer by ID",
            Self::FindByPurchase => "Find Customer by Purchase Number",
            Self::Save => "Save Data",
            Self::Exit => "Exit",
        }
    }
}

pub struct Shell {
    context: Context,
    customers: Vec<Customer>,
    /// Lines of the data file that could not be read. While there are any,
    /// the file is never rewritten.
    skipped: Vec<SkippedLine>,
    theme: ColorfulTheme,
}

impl Shell {
    /// Load the customer data and prepare the menu.
    pub fn open(context: Context) -> anyhow::Result<Self> {
        println!("{}", "=== Customer Management System ===".heading());
        println!("Loading existing customer data...");

        let loaded = context.load()?;
        match loaded.status {
            LoadStatus::Found => {
                println!("Loaded {} customers from file.", loaded.customers.len());
            }
            LoadStatus::NotFound => {
                println!("No existing customer file found. Starting with empty system.");
            }
        }
        if !loaded.skipped.is_empty() {
            println!(
                "{}",
                format!(
                    "⚠️  Skipped {} unreadable line(s); saving is disabled for this session",
                    loaded.skipped.len()
                )
                .warning()
            );
        }

        Ok(Self {
            context,
            customers: loaded.customers,
            skipped: loaded.skipped,
            theme: ColorfulTheme::default(),
        })
    }

    /// Run the menu until the user exits.
    pub fn run(mut self) -> anyhow::Result<()> {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

        loop {
            println!();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Customer Management Menu")
                .items(&labels)
                .default(0)
                .interact_opt()?;

            // Escape or 'q' leaves the menu the same way as choosing Exit.
            let item = choice.map_or(MenuItem::Exit, |index| MenuItem::ALL[index]);
            match item {
                MenuItem::Add => self.add()?,
                MenuItem::DisplayAll => self.display_all()?,
                MenuItem::FindById => self.find_by_id()?,
                MenuItem::FindByPurchase => self.find_by_purchase()?,
                MenuItem::Save => {
                    println!("Saving customer data...");
                    if self.save() {
                        println!("{}", "Data saved successfully!".success());
                    }
                }
                MenuItem::Exit => {
                    println!("Exiting program...");
                    if self.context.config.save_on_exit {
                        self.save();
                    }
                    return Ok(());
                }
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn add(&mut self) -> anyhow::Result<()> {
        println!("{}", "=== Add New Customer ===".heading());

        let id: i64 = Input::with_theme(&self.theme)
            .with_prompt("Customer ID")
            .interact_text()?;
        let title = self.text("Title (Mr/Mrs/Ms/Dr)")?;
        let name = self.text("Name")?;

        let kinds: Vec<&str> = CustomerType::ALL.iter().map(|kind| kind.as_str()).collect();
        let kind = Select::with_theme(&self.theme)
            .with_prompt("Type")
            .items(&kinds)
            .default(0)
            .interact()?;

        let count: i64 = Input::with_theme(&self.theme)
            .with_prompt("Number of purchases")
            .default(0)
            .interact_text()?;

        let mut purchases = Vec::new();
        for index in 1..=count.max(0) {
            let number: i64 = Input::with_theme(&self.theme)
                .with_prompt(format!("Purchase {index}"))
                .interact_text()?;
            purchases.push(number);
        }

        let customer = Customer::new(id, title, name, kinds[kind], count, purchases);
        if collection::find_by_id(&self.customers, customer.id()).is_some() {
            println!(
                "{}",
                format!("⚠️  A customer with ID {} already exists", customer.id()).warning()
            );
        }
        collection::add(&mut self.customers, customer);

        println!("{}", "Customer added successfully!".success());
        Ok(())
    }

    fn display_all(&self) -> anyhow::Result<()> {
        if self.customers.is_empty() {
            println!("No customers found.");
            return Ok(());
        }

        println!("{}", "=== All Customers ===".heading());
        let order = Select::with_theme(&self.theme)
            .with_prompt("Display by")
            .items(&["Name order", "Type filter"])
            .default(0)
            .interact()?;

        if order == 0 {
            let mut sorted = self.customers.clone();
            collection::sort_by_name(&mut sorted);
            render::numbered(&sorted);
            return Ok(());
        }

        let kind: String = Input::with_theme(&self.theme)
            .with_prompt("Type to filter (New/Regular)")
            .interact_text()?;

        println!("{}", format!("=== Customers of type: {kind} ===").heading());
        let matches = collection::filter_by_type(&self.customers, &kind);
        if matches.is_empty() {
            println!("No customers found with type: {kind}");
        } else {
            render::numbered(matches);
        }
        Ok(())
    }

    fn find_by_id(&self) -> anyhow::Result<()> {
        let id: i64 = Input::with_theme(&self.theme)
            .with_prompt("Customer ID to find")
            .interact_text()?;

        match collection::find_by_id(&self.customers, id) {
            Some(customer) => {
                println!("Customer found: {customer}");
                println!("Purchase numbers: {}", render::purchases(customer));
            }
            None => println!("Customer with ID {id} not found."),
        }
        Ok(())
    }

    fn find_by_purchase(&self) -> anyhow::Result<()> {
        let number: i64 = Input::with_theme(&self.theme)
            .with_prompt("Purchase number to find")
            .interact_text()?;

        match collection::find_by_purchase(&self.customers, number) {
            Some(customer) => println!("Customer found: {customer}"),
            None => println!("No customer found with purchase number {number}"),
        }
        Ok(())
    }

    /// Write the collection back to the data file.
    ///
    /// A failure is reported but does not end the session, and the in-memory
    /// collection is left as it was.
    fn save(&self) -> bool {
        let saved = self
            .context
            .ensure_rewritable(&self.skipped)
            .and_then(|()| self.context.save(&self.customers));
        match saved {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").warning());
                false
            }
        }
    }

    fn text(&self, prompt: &str) -> anyhow::Result<String> {
        let value = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| super::parse_field(input).map(drop))
            .interact_text()?;
        Ok(value)
    }
}
