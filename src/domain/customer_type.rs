use std::{fmt, str::FromStr};

/// The classification of a customer.
///
/// Only two types are recognised. Parsing is exact and case-sensitive, so
/// `"new"` is not a valid type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CustomerType {
    /// A customer without an established purchase history.
    #[default]
    New,
    /// A returning customer.
    Regular,
}

impl CustomerType {
    /// All recognised customer types, in display order.
    pub const ALL: [Self; 2] = [Self::New, Self::Regular];

    /// Returns the canonical string form of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Regular => "Regular",
        }
    }

    /// Parses a type, falling back to [`CustomerType::New`] for anything
    /// unrecognised.
    #[must_use]
    pub fn coerce(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerType {
    type Err = InvalidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Regular" => Ok(Self::Regular),
            other => Err(InvalidTypeError(other.to_string())),
        }
    }
}

/// Error returned when a string is not one of the recognised customer types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid customer type '{0}': must be 'New' or 'Regular'")]
pub struct InvalidTypeError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names() {
        assert_eq!("New".parse::<CustomerType>(), Ok(CustomerType::New));
        assert_eq!("Regular".parse::<CustomerType>(), Ok(CustomerType::Regular));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let error = "regular".parse::<CustomerType>().unwrap_err();
        assert_eq!(error, InvalidTypeError("regular".to_string()));
    }

    #[test]
    fn coerce_falls_back_to_new() {
        assert_eq!(CustomerType::coerce("VIP"), CustomerType::New);
        assert_eq!(CustomerType::coerce(""), CustomerType::New);
        assert_eq!(CustomerType::coerce("Regular"), CustomerType::Regular);
    }

    #[test]
    fn display_matches_parse() {
        for kind in CustomerType::ALL {
            assert_eq!(kind.to_string().parse::<CustomerType>(), Ok(kind));
        }
    }
}
