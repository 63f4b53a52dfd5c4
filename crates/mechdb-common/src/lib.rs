//! mechdb-common — Shared error types used across all MechDB crates.

pub mod error;

pub use error::{MechdbError, Result};
