//! Address book storage and lookup.

pub mod manager;

pub use manager::{default_addressbook_path, AddressBook};
