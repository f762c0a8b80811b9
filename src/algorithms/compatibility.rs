use serde::{Deserialize, Serialize};

use crate::models::observation::Observation;
use crate::models::source_model::{SourceModel, SIGMA_FLOOR_DEG};

/// Smallest score the scorer will emit. Keeps every cost-matrix cell strictly
/// positive even when the Gaussian tail underflows.
pub const MIN_SCORE: f64 = 1e-300;

/// Whether and how flux consistency enters the compatibility score.
///
/// Positional agreement alone is the default; the flux test is a separately
/// switchable second factor, not a fixed law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FluxWeighting {
    /// Score from angular separation only.
    #[default]
    Disabled,
    /// Multiply the positional significance by the flux significance.
    Multiplicative,
}

/// Tunable parameters of the compatibility scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub flux_weighting: FluxWeighting,
}

/// Statistical compatibility of one observation with one tracked source.
///
/// The angular offset is treated as drawn from a bivariate Gaussian whose
/// per-axis variance combines the model's radial sigma with the observation's
/// reported sigma in quadrature. The returned value is the two-sided
/// significance of seeing that offset or larger under the hypothesis that the
/// observation belongs to the source: a probability in (0, 1], near 1 for
/// strong agreement.
///
/// Pure function: same inputs always produce the same score.
pub fn compatibility_score(
    model: &SourceModel,
    observation: &Observation,
    config: &ScorerConfig,
) -> f64 {
    let mut score = positional_significance(model, observation);

    match config.flux_weighting {
        FluxWeighting::Disabled => {}
        FluxWeighting::Multiplicative => {
            score *= flux_significance(model, observation);
        }
    }

    score.clamp(MIN_SCORE, 1.0)
}

/// Two-sided significance of the angular offset.
///
/// The squared normalized radius follows a chi-squared distribution with two
/// degrees of freedom, so the upper tail is `exp(-d^2 / 2)`.
fn positional_significance(model: &SourceModel, observation: &Observation) -> f64 {
    let model_sigma = model.radial_sigma().value().max(SIGMA_FLOOR_DEG);

    let var_ra = model_sigma * model_sigma
        + observation.ra_sigma().value() * observation.ra_sigma().value();
    let var_dec = model_sigma * model_sigma
        + observation.dec_sigma().value() * observation.dec_sigma().value();

    let d_ra = observation.ra().value() - model.ra().value();
    let d_dec = observation.dec().value() - model.dec().value();

    let d_sq = d_ra * d_ra / var_ra + d_dec * d_dec / var_dec;
    (-d_sq / 2.0).exp()
}

/// Two-sided Gaussian significance of the flux offset.
fn flux_significance(model: &SourceModel, observation: &Observation) -> f64 {
    let variance = model.flux_sigma() * model.flux_sigma()
        + observation.flux_sigma() * observation.flux_sigma();
    let sigma = variance.sqrt().max(f64::MIN_POSITIVE);

    let z = (observation.flux() - model.mean_flux()).abs() / sigma;
    1.0 - scilib::math::basic::erf(z / std::f64::consts::SQRT_2)
}
