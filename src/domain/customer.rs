use std::fmt;

use crate::domain::CustomerType;

/// A customer record.
///
/// Fields are validated on construction and by the setters. Invalid values
/// are never an error: construction coerces them to a safe default, and the
/// setters leave the previous value in place.
///
/// A record parsed from a data file holds its fields exactly as written, so
/// it may carry values that construction would have coerced (a zero id, an
/// unrecognised type, a negative count or purchase number). Saving it again
/// writes the same values back.
///
/// Two customers are equal when their identifiers are equal, regardless of
/// any other field.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique identifier. Positive unless read from a file that says
    /// otherwise.
    pub(crate) id: i64,
    /// Honorific, e.g. "Mr" or "Dr".
    pub(crate) title: String,
    pub(crate) name: String,
    /// One of the [`CustomerType`] names, or whatever the data file held.
    pub(crate) kind: String,
    /// The recorded number of purchases.
    ///
    /// This is normally the length of `purchase_numbers`, but
    /// [`Customer::set_purchases_count`] can set it independently.
    pub(crate) purchases_count: i64,
    /// Purchase numbers in insertion order. Duplicates are allowed.
    pub(crate) purchase_numbers: Vec<i64>,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: 1,
            title: String::new(),
            name: String::new(),
            kind: CustomerType::default().as_str().to_string(),
            purchases_count: 0,
            purchase_numbers: Vec::new(),
        }
    }
}

impl Customer {
    /// Construct a new [`Customer`], coercing invalid values.
    ///
    /// - a non-positive `id` becomes `1`
    /// - an unrecognised `kind` becomes [`CustomerType::New`]
    /// - a negative `purchases_count` becomes `0`
    /// - non-positive purchase numbers are dropped
    ///
    /// `purchases_count` is taken as given; it is not derived from
    /// `purchase_numbers`.
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        name: impl Into<String>,
        kind: &str,
        purchases_count: i64,
        purchase_numbers: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            id: if id > 0 { id } else { 1 },
            title: title.into(),
            name: name.into(),
            kind: CustomerType::coerce(kind).as_str().to_string(),
            purchases_count: purchases_count.max(0),
            purchase_numbers: positive(purchase_numbers),
        }
    }

    /// The customer's unique identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// The customer's honorific.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The customer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's type, as a string.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The customer's type, if it is a recognised one.
    #[must_use]
    pub fn customer_type(&self) -> Option<CustomerType> {
        self.kind.parse().ok()
    }

    /// The recorded number of purchases.
    #[must_use]
    pub const fn purchases_count(&self) -> i64 {
        self.purchases_count
    }

    /// The customer's purchase numbers, in insertion order.
    #[must_use]
    pub fn purchase_numbers(&self) -> &[i64] {
        &self.purchase_numbers
    }

    /// Set the identifier.
    ///
    /// Returns `false`, leaving the identifier unchanged, if `id` is not
    /// positive.
    pub const fn set_id(&mut self, id: i64) -> bool {
        if id <= 0 {
            return false;
        }
        self.id = id;
        true
    }

    /// Set the title.
    ///
    /// Returns `false`, leaving the title unchanged, if `title` is empty.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        replace_non_empty(&mut self.title, title.into())
    }

    /// Set the name.
    ///
    /// Returns `false`, leaving the name unchanged, if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        replace_non_empty(&mut self.name, name.into())
    }

    /// Set the type from its string form.
    ///
    /// Returns `false`, leaving the type unchanged, if `kind` is not a
    /// recognised type.
    pub fn set_kind(&mut self, kind: &str) -> bool {
        let Ok(kind) = kind.parse::<CustomerType>() else {
            return false;
        };
        self.kind = kind.as_str().to_string();
        true
    }

    /// Set the recorded number of purchases.
    ///
    /// Returns `false`, leaving the count unchanged, if `count` is negative.
    ///
    /// Note that this does not touch the purchase numbers, so the count may
    /// no longer match their length.
    pub const fn set_purchases_count(&mut self, count: i64) -> bool {
        if count < 0 {
            return false;
        }
        self.purchases_count = count;
        true
    }

    /// Replace the purchase numbers.
    ///
    /// Non-positive numbers are dropped. The purchase count is recomputed
    /// from the resulting sequence.
    pub fn set_purchase_numbers(&mut self, numbers: impl IntoIterator<Item = i64>) {
        self.purchase_numbers = positive(numbers);
        self.sync_purchases_count();
    }

    /// Append a purchase number and recompute the purchase count.
    ///
    /// Returns `false` and does nothing if `number` is not positive.
    pub fn add_purchase_number(&mut self, number: i64) -> bool {
        if number <= 0 {
            return false;
        }
        self.purchase_numbers.push(number);
        self.sync_purchases_count();
        true
    }

    /// Whether `number` appears anywhere in the purchase history.
    #[must_use]
    pub fn has_purchase_number(&self, number: i64) -> bool {
        self.purchase_numbers.contains(&number)
    }

    fn sync_purchases_count(&mut self) {
        self.purchases_count = i64::try_from(self.purchase_numbers.len()).unwrap_or(i64::MAX);
    }
}

fn positive(numbers: impl IntoIterator<Item = i64>) -> Vec<i64> {
    numbers.into_iter().filter(|&n| n > 0).collect()
}

fn replace_non_empty(field: &mut String, value: String) -> bool {
    if value.is_empty() {
        return false;
    }
    *field = value;
    true
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

/// A one-line, human-readable summary of the customer.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {} {}, Type: {}, Purchases: {}",
            self.id, self.title, self.name, self.kind, self.purchases_count
        )
    }
}
