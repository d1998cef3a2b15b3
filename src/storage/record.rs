use std::{fmt, str::FromStr};

use crate::Customer;

const SEPARATOR: char = ';';

/// The number of fixed fields preceding the purchase numbers.
const FIXED_FIELDS: usize = 5;

impl Customer {
    /// Returns a displayable representation of the customer as a record
    /// line.
    ///
    /// # Examples
    ///
    /// ```
    /// use customers::Customer;
    ///
    /// let customer = Customer::new(5, "Mr", "Alan Turing", "Regular", 2, [101, 102]);
    ///
    /// assert_eq!(
    ///     customer.record().to_string(),
    ///     "5;Mr;Alan Turing;Regular;2;101;102"
    /// );
    /// ```
    #[must_use]
    pub const fn record(&self) -> Record<'_> {
        Record { customer: self }
    }
}

/// A wrapper type that formats a customer as a semicolon-delimited line.
///
/// This type is returned by [`Customer::record`]. The output never contains a
/// trailing separator or a line terminator.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    customer: &'a Customer,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Customer {
            id,
            title,
            name,
            kind,
            purchases_count,
            purchase_numbers,
        } = self.customer;

        write!(f, "{id};{title};{name};{kind};{purchases_count}")?;
        for number in purchase_numbers {
            write!(f, "{SEPARATOR}{number}")?;
        }
        Ok(())
    }
}

/// Parses a record line.
///
/// Parsed fields are taken as written and no coercion is applied: a title or
/// name may be empty, the type need not be recognised, and the id, count and
/// purchase numbers may be zero or negative. The only fields that are
/// checked are the numeric ones, which must be integers.
///
/// A single trailing separator is tolerated, as is a trailing carriage
/// return.
impl FromStr for Customer {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut tokens: Vec<&str> = line.split(SEPARATOR).collect();

        if tokens.len() > FIXED_FIELDS && tokens.last() == Some(&"") {
            tokens.pop();
        }

        let [id, title, name, kind, count, purchases @ ..] = tokens.as_slice() else {
            return Err(ParseError::TooFewFields(tokens.len()));
        };

        let id = id
            .parse()
            .map_err(|_| ParseError::InvalidId((*id).to_string()))?;
        let purchases_count = count
            .parse()
            .map_err(|_| ParseError::InvalidCount((*count).to_string()))?;
        let purchase_numbers = purchases
            .iter()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| ParseError::InvalidPurchaseNumber((*token).to_string()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            id,
            title: (*title).to_string(),
            name: (*name).to_string(),
            kind: (*kind).to_string(),
            purchases_count,
            purchase_numbers,
        })
    }
}

/// Errors that can occur when parsing a record line.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line has fewer than the five fixed fields.
    #[error("expected at least 5 fields, found {0}")]
    TooFewFields(usize),
    /// The id is not an integer.
    #[error("invalid customer id '{0}'")]
    InvalidId(String),
    /// The purchase count is not an integer.
    #[error("invalid purchase count '{0}'")]
    InvalidCount(String),
    /// A purchase number is not an integer.
    #[error("invalid purchase number '{0}'")]
    InvalidPurchaseNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_order() {
        let customer = Customer::new(5, "Mr", "Alan Turing", "Regular", 2, [101, 102]);
        assert_eq!(
            customer.record().to_string(),
            "5;Mr;Alan Turing;Regular;2;101;102"
        );
    }

    #[test]
    fn serializes_without_trailing_separator() {
        let customer = Customer::new(3, "Ms", "Ada", "New", 0, []);
        assert_eq!(customer.record().to_string(), "3;Ms;Ada;New;0");
    }

    #[test]
    fn round_trip_preserves_fields() {
        let mut original = Customer::new(42, "Dr", "Grace Hopper", "Regular", 0, [7, 7, 9]);
        original.set_purchases_count(11);

        let parsed: Customer = original.record().to_string().parse().unwrap();

        assert_eq!(parsed.id(), original.id());
        assert_eq!(parsed.title(), original.title());
        assert_eq!(parsed.name(), original.name());
        assert_eq!(parsed.kind(), original.kind());
        assert_eq!(parsed.purchases_count(), 11);
        assert_eq!(parsed.purchase_numbers(), original.purchase_numbers());
    }

    #[test]
    fn parsing_trusts_fields() {
        let customer: Customer = "8;;;New;4;15".parse().unwrap();
        assert_eq!(customer.title(), "");
        assert_eq!(customer.name(), "");
        assert_eq!(customer.purchases_count(), 4);
        assert_eq!(customer.purchase_numbers().len(), 1);
    }

    #[test]
    fn accepts_trailing_separator_and_carriage_return() {
        let customer: Customer = "3;Ms;Ada;New;0;\r".parse().unwrap();
        assert_eq!(customer.name(), "Ada");
        assert!(customer.purchase_numbers().is_empty());
    }

    #[test]
    fn rejects_too_few_fields() {
        assert_eq!(
            "1;Mr;Bob;New".parse::<Customer>().unwrap_err(),
            ParseError::TooFewFields(4)
        );
        assert_eq!(
            "".parse::<Customer>().unwrap_err(),
            ParseError::TooFewFields(1)
        );
    }

    #[test]
    fn keeps_values_construction_would_coerce() {
        let customer: Customer = "0;Mr;Bob;VIP;-1;0;-4".parse().unwrap();
        assert_eq!(customer.id(), 0);
        assert_eq!(customer.kind(), "VIP");
        assert_eq!(customer.customer_type(), None);
        assert_eq!(customer.purchases_count(), -1);
        assert_eq!(customer.purchase_numbers(), [0, -4]);
        assert_eq!(customer.record().to_string(), "0;Mr;Bob;VIP;-1;0;-4");
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert_eq!(
            "x;Mr;Bob;New;0".parse::<Customer>().unwrap_err(),
            ParseError::InvalidId("x".to_string())
        );
        assert_eq!(
            "1;Mr;Bob;New;many".parse::<Customer>().unwrap_err(),
            ParseError::InvalidCount("many".to_string())
        );
        assert_eq!(
            "1;Mr;Bob;New;2;5;x".parse::<Customer>().unwrap_err(),
            ParseError::InvalidPurchaseNumber("x".to_string())
        );
    }

    #[test]
    fn semicolon_in_name_shifts_fields() {
        let customer = Customer::new(1, "Mr", "Smith;Jones", "New", 0, []);
        let error = customer.record().to_string().parse::<Customer>().unwrap_err();
        assert_eq!(error, ParseError::InvalidCount("New".to_string()));
    }
}
