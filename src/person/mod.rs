//! Person record and its validated fields.

pub mod address;
pub mod name;
pub mod record;
pub mod tag;
pub mod tagging;

pub use address::StructuredAddress;
pub use name::PersonName;
pub use record::{Email, Person, Phone};
pub use tag::Tag;
pub use tagging::{TagOperation, Tagging};
