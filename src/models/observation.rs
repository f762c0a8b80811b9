use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Identifier of one observation round.
///
/// Epochs are numbered sequentially from the start of the survey; the index
/// doubles as the chronological ordering key for model histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpochId(u32);

impl EpochId {
    /// Create an epoch identifier from its survey-sequential index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw sequential index.
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl From<u32> for EpochId {
    fn from(index: u32) -> Self {
        EpochId::new(index)
    }
}

impl std::fmt::Display for EpochId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "epoch {}", self.0)
    }
}

/// One measurement of one source in one epoch.
///
/// Instances are read-only after construction: the adapter validates the raw
/// row, and from then on the observation travels unchanged into a model's
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    source_id: u32,
    epoch: EpochId,
    ra: Degrees,
    ra_sigma: Degrees,
    dec: Degrees,
    dec_sigma: Degrees,
    flux: f64,
    flux_sigma: f64,
}

impl Observation {
    /// Assemble an observation from already-validated fields.
    ///
    /// Validation of raw rows (finiteness, non-negative uncertainties) lives
    /// in the epoch adapter; callers inside the crate are expected to hand in
    /// clean values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source_id: u32,
        epoch: EpochId,
        ra: Degrees,
        ra_sigma: Degrees,
        dec: Degrees,
        dec_sigma: Degrees,
        flux: f64,
        flux_sigma: f64,
    ) -> Self {
        debug_assert!(ra_sigma.value() >= 0.0 && dec_sigma.value() >= 0.0);
        debug_assert!(flux_sigma >= 0.0);
        Self {
            source_id,
            epoch,
            ra,
            ra_sigma,
            dec,
            dec_sigma,
            flux,
            flux_sigma,
        }
    }

    /// Identifier reported by the instrument, not yet resolved to a model.
    pub fn source_id(&self) -> u32 {
        self.source_id
    }

    /// Epoch that produced this measurement.
    pub fn epoch(&self) -> EpochId {
        self.epoch
    }

    /// Right ascension.
    pub fn ra(&self) -> Degrees {
        self.ra
    }

    /// Reported right-ascension uncertainty.
    pub fn ra_sigma(&self) -> Degrees {
        self.ra_sigma
    }

    /// Declination.
    pub fn dec(&self) -> Degrees {
        self.dec
    }

    /// Reported declination uncertainty.
    pub fn dec_sigma(&self) -> Degrees {
        self.dec_sigma
    }

    /// Measured flux.
    pub fn flux(&self) -> f64 {
        self.flux
    }

    /// Reported flux uncertainty.
    pub fn flux_sigma(&self) -> f64 {
        self.flux_sigma
    }
}
