//! Read-only export types for reporting and plotting collaborators.
//!
//! The sky model itself stays mutable only inside the epoch cycle; everything
//! here is a serializable snapshot of its current state.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::models::observation::Observation;
use crate::models::sky_model::SkyModel;
use crate::models::source_model::SourceModel;
use crate::models::time::ModifiedJulianDate;

/// One history entry of a tracked source, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub epoch: u32,
    pub source_id: u32,
    pub ra: Degrees,
    pub ra_sigma: Degrees,
    pub dec: Degrees,
    pub dec_sigma: Degrees,
    pub flux: f64,
    pub flux_sigma: f64,
}

impl From<&Observation> for ObservationRecord {
    fn from(observation: &Observation) -> Self {
        Self {
            epoch: observation.epoch().index(),
            source_id: observation.source_id(),
            ra: observation.ra(),
            ra_sigma: observation.ra_sigma(),
            dec: observation.dec(),
            dec_sigma: observation.dec_sigma(),
            flux: observation.flux(),
            flux_sigma: observation.flux_sigma(),
        }
    }
}

/// Current summary of one tracked source with its epoch-tagged history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub ra: Degrees,
    pub dec: Degrees,
    pub radial_sigma: Degrees,
    pub mean_flux: f64,
    pub flux_sigma: f64,
    pub history: Vec<ObservationRecord>,
}

impl From<&SourceModel> for SourceSummary {
    fn from(model: &SourceModel) -> Self {
        Self {
            ra: model.ra(),
            dec: model.dec(),
            radial_sigma: model.radial_sigma(),
            mean_flux: model.mean_flux(),
            flux_sigma: model.flux_sigma(),
            history: model.history().iter().map(ObservationRecord::from).collect(),
        }
    }
}

/// Summaries for every tracked source, in sky-model order.
pub fn sky_summaries(sky: &SkyModel) -> Vec<SourceSummary> {
    sky.iter().map(SourceSummary::from).collect()
}

/// One point of a flux-versus-time curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxSample {
    pub mjd: ModifiedJulianDate,
    pub flux: f64,
    pub flux_sigma: f64,
}

/// Map a source's history onto the absolute timeline, given the survey start
/// and the cadence between consecutive epochs.
pub fn flux_series(
    model: &SourceModel,
    survey_start: ModifiedJulianDate,
    cadence: qtty::Days,
) -> Vec<FluxSample> {
    model
        .history()
        .iter()
        .map(|observation| FluxSample {
            mjd: ModifiedJulianDate::for_epoch(survey_start, cadence, observation.epoch()),
            flux: observation.flux(),
            flux_sigma: observation.flux_sigma(),
        })
        .collect()
}
