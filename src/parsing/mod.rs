//! Adapters for raw epoch records.
//!
//! An epoch arrives as a rectangular numeric table with a fixed column
//! layout; [`epoch::EpochTable`] wraps that shape and turns rows into
//! validated [`crate::models::Observation`]s. How the table was loaded (CSV
//! or otherwise) is owned by surrounding tooling.

pub mod epoch;

#[cfg(test)]
mod epoch_tests;

pub use epoch::{EpochTable, EPOCH_COLUMNS};
