//! Orchestration of the epoch-to-model update cycle.

pub mod association;


pub use association::{build_initial_sky_model, Associator, EpochReport};
