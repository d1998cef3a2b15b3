//! Operations over an ordered collection of customers.
//!
//! The collection is a plain `Vec<Customer>` (or a slice of one) owned by the
//! caller. None of these functions require the collection to be sorted, and
//! all searches are linear scans in collection order.

use crate::Customer;

/// Append a customer to the end of the collection.
///
/// Identifiers are not checked for uniqueness.
pub fn add(customers: &mut Vec<Customer>, customer: Customer) {
    tracing::debug!(id = customer.id(), "adding customer");
    customers.push(customer);
}

/// Sort the collection by name, ascending.
///
/// Comparison is case-sensitive and by byte order, so `"Zed"` sorts before
/// `"alice"`.
pub fn sort_by_name(customers: &mut [Customer]) {
    customers.sort_by(|a, b| a.name().cmp(b.name()));
}

/// The customers whose type is exactly `kind`, in collection order.
///
/// The number of matches is the length of the returned vector. Matching is
/// on the type exactly as stored, so an unrecognised `kind` only matches
/// records that were loaded with that type.
#[must_use]
pub fn filter_by_type<'a>(customers: &'a [Customer], kind: &str) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|customer| customer.kind() == kind)
        .collect()
}

/// The first customer with the given identifier.
#[must_use]
pub fn find_by_id(customers: &[Customer], id: i64) -> Option<&Customer> {
    customers.iter().find(|customer| customer.id() == id)
}

/// The first customer whose purchase history contains `number`.
#[must_use]
pub fn find_by_purchase(customers: &[Customer], number: i64) -> Option<&Customer> {
    customers
        .iter()
        .find(|customer| customer.has_purchase_number(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Vec<i64> {
        customers.into_iter().map(Customer::id).collect()
    }

    fn mixed() -> Vec<Customer> {
        vec![
            Customer::new(1, "Mr", "Charles", "New", 1, [10]),
            Customer::new(2, "Ms", "Ada", "Regular", 2, [20, 30]),
            Customer::new(3, "Dr", "Barbara", "New", 2, [30, 40]),
        ]
    }

    #[test]
    fn add_appends_to_end() {
        let mut customers = mixed();
        add(
            &mut customers,
            Customer::new(4, "Mr", "Dennis", "Regular", 0, []),
        );
        assert_eq!(ids(&customers), vec![1, 2, 3, 4]);
    }

    #[test]
    fn add_allows_duplicate_ids() {
        let mut customers = mixed();
        add(&mut customers, Customer::new(1, "Mr", "Other", "New", 0, []));
        assert_eq!(customers.len(), 4);
    }

    #[test]
    fn filter_preserves_order() {
        let customers = mixed();
        let matches = filter_by_type(&customers, "New");
        assert_eq!(ids(matches), vec![1, 3]);
    }

    #[test]
    fn filter_is_exact_match() {
        let customers = mixed();
        assert!(filter_by_type(&customers, "new").is_empty());
        assert!(filter_by_type(&customers, "VIP").is_empty());
        assert_eq!(filter_by_type(&customers, "Regular").len(), 1);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut customers = mixed();
        customers.push(Customer::new(2, "Mr", "Duplicate", "New", 0, []));

        let found = find_by_id(&customers, 2).unwrap();
        assert_eq!(found.name(), "Ada");
    }

    #[test]
    fn find_by_id_not_found() {
        assert!(find_by_id(&mixed(), 99).is_none());
        assert!(find_by_id(&[], 1).is_none());
    }

    #[test]
    fn find_by_purchase_returns_first_match() {
        let customers = mixed();
        let found = find_by_purchase(&customers, 30).unwrap();
        assert_eq!(found.id(), 2);
        assert!(find_by_purchase(&customers, 99).is_none());
    }

    #[test]
    fn sort_by_name_is_case_sensitive() {
        let mut customers = mixed();
        customers.push(Customer::new(4, "Ms", "alice", "New", 0, []));
        customers.push(Customer::new(5, "Mr", "Zed", "New", 0, []));

        sort_by_name(&mut customers);

        let names: Vec<_> = customers.iter().map(Customer::name).collect();
        assert_eq!(names, vec!["Ada", "Barbara", "Charles", "Zed", "alice"]);
    }
}
