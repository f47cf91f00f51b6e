//! addressbook library
//!
//! Validated person fields (structured addresses, names, tags), the
//! name-similarity rule chain, and a JSON-backed address book.

pub mod commands;
pub mod contacts;
pub mod error;
pub mod output;
pub mod person;

pub use error::ValidationError;
pub use person::{PersonName, StructuredAddress};
