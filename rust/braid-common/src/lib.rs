//! Core definitions (errors and results), shared by the braid crates.

pub mod error;
pub mod result;

pub use result::Result;
