//! Plain-text Customer Record Management
//!
//! Customers are stored one per line in a semicolon-delimited text file.

pub mod domain;
pub use domain::{Config, Customer, CustomerType};

/// Plain-text persistence for customer records.
pub mod storage;
pub use storage::{LoadStatus, Loaded};
