//! # skytrack
//!
//! Cross-epoch association of noisy point-source observations into running
//! sky models.
//!
//! A survey produces one epoch of detections at a time; each detection
//! carries a position, a flux, and their reported uncertainties. This crate
//! decides which detection belongs to which already-tracked source and folds
//! the match into that source's running position/flux estimate.
//!
//! ## Architecture
//!
//! - [`models`]: observations, tracked sources, the sky model, and MJD time
//!   mapping
//! - [`parsing`]: the raw epoch record shape and the observation adapter
//! - [`algorithms`]: compatibility scoring, cost-matrix construction, and
//!   the assignment solvers
//! - [`services`]: the per-epoch update cycle
//! - [`api`]: read-only export snapshots for reporting collaborators
//! - [`config`]: TOML-loadable tuning of the whole cycle
//!
//! ## The epoch cycle
//!
//! Every epoch runs the same sequence: adapt the raw rows into observations,
//! score every observation against every tracked source, hand the score
//! matrix to the assignment solver, and fold the resulting one-to-one pairing
//! into the sky model. Epochs must be applied in chronological order — each
//! cycle reads the state its predecessor wrote.
//!
//! ```
//! use skytrack::config::AssociationConfig;
//! use skytrack::models::EpochId;
//! use skytrack::parsing::EpochTable;
//! use skytrack::services::{build_initial_sky_model, Associator};
//!
//! let seed = EpochTable::from_rows(vec![
//!     [0.0, 20.0, 0.5, 20.0, 0.5, 10.0, 0.2],
//!     [1.0, 22.0, 0.5, 0.0, 0.5, 19.0, 0.3],
//! ]);
//! let next = EpochTable::from_rows(vec![
//!     [0.0, 20.1, 0.5, 19.9, 0.5, 10.2, 0.2],
//!     [1.0, 22.1, 0.5, 0.1, 0.5, 18.9, 0.3],
//! ]);
//!
//! let mut sky = build_initial_sky_model(&seed, EpochId::new(0)).unwrap();
//! let associator = Associator::new(AssociationConfig::default());
//! let report = associator.process_epoch(&mut sky, &next, EpochId::new(1)).unwrap();
//!
//! assert_eq!(report.matched.len(), 2);
//! assert_eq!(sky.source(0).unwrap().observation_count(), 2);
//! ```

pub mod api;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::AssociationConfig;
pub use error::{Error, Result};
pub use models::{EpochId, Observation, SkyModel, SourceModel};
pub use services::{build_initial_sky_model, Associator, EpochReport};
