use customers::Customer;
use serde_json::{Value, json};

/// Output format shared by the listing commands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Print customers as a numbered list, one summary per line.
pub fn numbered<'a>(customers: impl IntoIterator<Item = &'a Customer>) {
    for (index, customer) in customers.into_iter().enumerate() {
        println!("{}. {customer}", index + 1);
    }
}

/// The purchase numbers joined by `", "`.
pub fn purchases(customer: &Customer) -> String {
    customer
        .purchase_numbers()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn to_json(customer: &Customer) -> Value {
    json!({
        "id": customer.id(),
        "title": customer.title(),
        "name": customer.name(),
        "type": customer.kind(),
        "purchases_count": customer.purchases_count(),
        "purchase_numbers": customer.purchase_numbers(),
    })
}

pub fn print_json<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> anyhow::Result<()> {
    let rows: Vec<Value> = customers.into_iter().map(to_json).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchases_are_comma_separated() {
        let customer = Customer::new(1, "Mr", "Bob", "New", 3, [4, 5, 6]);
        assert_eq!(purchases(&customer), "4, 5, 6");
    }

    #[test]
    fn json_uses_record_field_names() {
        let customer = Customer::new(5, "Mr", "Alan Turing", "Regular", 2, [101, 102]);
        assert_eq!(
            to_json(&customer),
            json!({
                "id": 5,
                "title": "Mr",
                "name": "Alan Turing",
                "type": "Regular",
                "purchases_count": 2,
                "purchase_numbers": [101, 102],
            })
        );
    }
}
