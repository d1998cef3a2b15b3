//! Plain-text persistence for customer records.
//!
//! Each customer occupies one line of a text file, with fields separated by
//! semicolons:
//!
//! ```text
//! id;title;name;type;purchases_count;purchase_1;...;purchase_n
//! ```
//!
//! Semicolons inside the title or name are not escaped.

pub mod data_file;
/// The semicolon-delimited line encoding of a single customer.
pub mod record;

pub use data_file::{LoadError, LoadStatus, Loaded, SaveError, SkippedLine, load, save};
pub use record::{ParseError, Record};
