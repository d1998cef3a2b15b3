//! Domain models for customer management.
//!
//! This module contains the customer entity, its type classification, the
//! operations over an in-memory collection of customers, and configuration.

/// Customer entity and its field validation rules.
pub mod customer;
pub use customer::Customer;

mod customer_type;
pub use customer_type::{CustomerType, InvalidTypeError};

/// Operations over an ordered collection of customers.
pub mod collection;

mod config;
pub use config::Config;
