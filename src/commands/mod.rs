//! Command implementations.

pub mod check;
pub mod contacts;
pub mod tags;
