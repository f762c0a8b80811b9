use qtty::Degrees;

use super::observation::Observation;

/// Smallest positional uncertainty a model is allowed to report, in degrees.
///
/// Keeps the compatibility score well-defined when a history collapses onto a
/// single point.
pub const SIGMA_FLOOR_DEG: f64 = 1e-6;

/// Smallest flux uncertainty a model is allowed to report.
pub const FLUX_SIGMA_FLOOR: f64 = 1e-9;

/// Running estimate of one tracked source: mean sky position, positional
/// uncertainty, mean flux, flux uncertainty, plus the observations folded in
/// so far.
///
/// The summary statistics are recomputed from the full history on every fold,
/// so they can never drift from it. Histories only grow; insertion order is
/// chronological epoch order.
#[derive(Debug, Clone)]
pub struct SourceModel {
    ra: Degrees,
    dec: Degrees,
    radial_sigma: Degrees,
    mean_flux: f64,
    flux_sigma: f64,
    history: Vec<Observation>,
}

impl SourceModel {
    /// Create a model from its first observation.
    pub fn seeded(observation: Observation) -> Self {
        let mut model = Self {
            ra: Degrees::new(0.0),
            dec: Degrees::new(0.0),
            radial_sigma: Degrees::new(SIGMA_FLOOR_DEG),
            mean_flux: 0.0,
            flux_sigma: FLUX_SIGMA_FLOOR,
            history: vec![observation],
        };
        model.recompute();
        model
    }

    /// Fold a matched observation into the history and refresh the running
    /// statistics.
    ///
    /// Only the model updater calls this; the epoch cycle guarantees at most
    /// one fold per model per epoch.
    pub(crate) fn fold_observation(&mut self, observation: Observation) {
        self.history.push(observation);
        self.recompute();
    }

    /// Running mean right ascension.
    pub fn ra(&self) -> Degrees {
        self.ra
    }

    /// Running mean declination.
    pub fn dec(&self) -> Degrees {
        self.dec
    }

    /// Radial positional uncertainty of the running mean, strictly positive.
    pub fn radial_sigma(&self) -> Degrees {
        self.radial_sigma
    }

    /// Running mean flux.
    pub fn mean_flux(&self) -> f64 {
        self.mean_flux
    }

    /// Flux uncertainty of the running mean, strictly positive.
    pub fn flux_sigma(&self) -> f64 {
        self.flux_sigma
    }

    /// Observations folded in so far, in chronological order.
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    /// Number of folded observations.
    pub fn observation_count(&self) -> usize {
        self.history.len()
    }

    /// Recompute every summary statistic from the full history.
    fn recompute(&mut self) {
        let n = self.history.len();
        debug_assert!(n > 0, "a source model always holds at least one observation");

        let ra_values: Vec<f64> = self.history.iter().map(|o| o.ra().value()).collect();
        let dec_values: Vec<f64> = self.history.iter().map(|o| o.dec().value()).collect();
        let flux_values: Vec<f64> = self.history.iter().map(|o| o.flux()).collect();

        self.ra = Degrees::new(mean(&ra_values));
        self.dec = Degrees::new(mean(&dec_values));
        self.mean_flux = mean(&flux_values);

        let radial = if n == 1 {
            // No scatter yet: carry the instrument-reported uncertainty.
            let obs = &self.history[0];
            rms(obs.ra_sigma().value(), obs.dec_sigma().value())
        } else {
            rms(standard_error(&ra_values), standard_error(&dec_values))
        };
        self.radial_sigma = Degrees::new(floored(radial, SIGMA_FLOOR_DEG, "positional"));

        let flux_sigma = if n == 1 {
            self.history[0].flux_sigma()
        } else {
            standard_error(&flux_values)
        };
        self.flux_sigma = floored(flux_sigma, FLUX_SIGMA_FLOOR, "flux");
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard error of the mean, from the unbiased sample variance.
fn standard_error(values: &[f64]) -> f64 {
    let n = values.len();
    debug_assert!(n > 1);
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    (variance / n as f64).sqrt()
}

fn rms(a: f64, b: f64) -> f64 {
    ((a * a + b * b) / 2.0).sqrt()
}

fn floored(sigma: f64, floor: f64, label: &str) -> f64 {
    if sigma < floor {
        log::warn!(
            "{} uncertainty {:.3e} degenerated below the floor; substituting {:.3e}",
            label,
            sigma,
            floor
        );
        floor
    } else {
        sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::observation::EpochId;

    fn obs(epoch: u32, ra: f64, dec: f64, flux: f64) -> Observation {
        Observation::new(
            0,
            EpochId::new(epoch),
            Degrees::new(ra),
            Degrees::new(0.5),
            Degrees::new(dec),
            Degrees::new(0.5),
            flux,
            0.1,
        )
    }

    #[test]
    fn test_seeded_model_carries_reported_uncertainty() {
        let model = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
        assert_eq!(model.ra().value(), 20.0);
        assert_eq!(model.dec().value(), 20.0);
        assert_eq!(model.radial_sigma().value(), 0.5);
        assert_eq!(model.mean_flux(), 10.0);
        assert_eq!(model.flux_sigma(), 0.1);
        assert_eq!(model.observation_count(), 1);
    }

    #[test]
    fn test_fold_updates_means() {
        let mut model = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
        model.fold_observation(obs(1, 20.2, 19.8, 12.0));

        assert_eq!(model.observation_count(), 2);
        assert!((model.ra().value() - 20.1).abs() < 1e-12);
        assert!((model.dec().value() - 19.9).abs() < 1e-12);
        assert!((model.mean_flux() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_are_a_function_of_history() {
        // Folding the same observations in the same order must always yield
        // the same summary, no matter how the model was carried around.
        let build = || {
            let mut m = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
            m.fold_observation(obs(1, 20.4, 19.6, 11.0));
            m.fold_observation(obs(2, 19.8, 20.2, 9.5));
            m
        };
        let a = build();
        let b = build();
        assert_eq!(a.ra().value(), b.ra().value());
        assert_eq!(a.dec().value(), b.dec().value());
        assert_eq!(a.radial_sigma().value(), b.radial_sigma().value());
        assert_eq!(a.mean_flux(), b.mean_flux());
        assert_eq!(a.flux_sigma(), b.flux_sigma());
    }

    #[test]
    fn test_scatter_shrinks_with_history() {
        let mut model = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
        model.fold_observation(obs(1, 20.1, 19.9, 10.0));
        let sigma_two = model.radial_sigma().value();

        model.fold_observation(obs(2, 19.9, 20.1, 10.0));
        model.fold_observation(obs(3, 20.05, 19.95, 10.0));
        let sigma_four = model.radial_sigma().value();

        assert!(sigma_four < sigma_two);
    }

    #[test]
    fn test_degenerate_history_hits_floor() {
        // Identical positions have zero scatter; the floor keeps the sigma
        // strictly positive.
        let mut model = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
        model.fold_observation(obs(1, 20.0, 20.0, 10.0));
        model.fold_observation(obs(2, 20.0, 20.0, 10.0));

        assert_eq!(model.radial_sigma().value(), SIGMA_FLOOR_DEG);
        assert_eq!(model.flux_sigma(), FLUX_SIGMA_FLOOR);
    }

    #[test]
    fn test_history_preserves_epoch_order() {
        let mut model = SourceModel::seeded(obs(0, 20.0, 20.0, 10.0));
        model.fold_observation(obs(1, 20.1, 19.9, 10.5));
        model.fold_observation(obs(2, 19.9, 20.1, 9.5));

        let epochs: Vec<u32> = model.history().iter().map(|o| o.epoch().index()).collect();
        assert_eq!(epochs, vec![0, 1, 2]);
    }
}
