use crate::algorithms::assignment::AssignmentSolver;
use crate::algorithms::cost_matrix::{build_cost_matrix, build_padded_cost_matrix};
use crate::config::{AssociationConfig, MatchingPolicy};
use crate::error::Result;
use crate::models::observation::{EpochId, Observation};
use crate::models::sky_model::SkyModel;
use crate::models::source_model::SourceModel;
use crate::parsing::epoch::EpochTable;

/// What one epoch's update did to the sky model.
#[derive(Debug, Clone, Default)]
pub struct EpochReport {
    /// Matched `(observation row, model index)` pairs.
    pub matched: Vec<(usize, usize)>,
    /// Model indices created from unmatched observations this epoch.
    pub new_sources: Vec<usize>,
    /// Model indices that received no observation this epoch.
    pub unobserved: Vec<usize>,
    /// Sum of the compatibility scores of the matched pairs.
    pub total_score: f64,
}

/// Create one tracked source per row of a seed epoch.
///
/// Each model starts with that row's observation as its sole history entry.
pub fn build_initial_sky_model(epoch: &EpochTable, epoch_id: EpochId) -> Result<SkyModel> {
    let mut sky = SkyModel::new();
    for observation in epoch.observations(epoch_id)? {
        sky.push_source(SourceModel::seeded(observation));
    }
    log::debug!("seeded sky model with {} sources from {}", sky.len(), epoch_id);
    Ok(sky)
}

/// Drives the per-epoch cycle: adapt the raw record, score every
/// observation-model pair, solve the assignment, and fold the matches into
/// the sky model.
///
/// Epochs must be processed in chronological order; each cycle reads the
/// state the previous one produced.
pub struct Associator {
    config: AssociationConfig,
    solver: Box<dyn AssignmentSolver>,
}

impl Associator {
    /// Build an associator with the solver the configuration names.
    pub fn new(config: AssociationConfig) -> Self {
        let solver = config.solver.kind.build();
        Self { config, solver }
    }

    /// Build an associator around a caller-supplied solver.
    pub fn with_solver(config: AssociationConfig, solver: Box<dyn AssignmentSolver>) -> Self {
        Self { config, solver }
    }

    /// Active configuration.
    pub fn config(&self) -> &AssociationConfig {
        &self.config
    }

    /// Fold one epoch into the sky model.
    ///
    /// All-or-nothing: the sky model is only touched once adaptation,
    /// scoring, and solving have all succeeded, so any failure leaves it in
    /// the last successfully processed epoch's state.
    pub fn process_epoch(
        &self,
        sky: &mut SkyModel,
        epoch: &EpochTable,
        epoch_id: EpochId,
    ) -> Result<EpochReport> {
        let observations = epoch.observations(epoch_id)?;

        let report = match self.config.matching.policy {
            MatchingPolicy::Strict => self.process_strict(sky, observations),
            MatchingPolicy::AllowUnmatched => self.process_relaxed(sky, observations),
        }?;

        log::debug!(
            "{}: matched {}, new {}, unobserved {}, total score {:.3}",
            epoch_id,
            report.matched.len(),
            report.new_sources.len(),
            report.unobserved.len(),
            report.total_score
        );
        Ok(report)
    }

    fn process_strict(
        &self,
        sky: &mut SkyModel,
        observations: Vec<Observation>,
    ) -> Result<EpochReport> {
        let matrix = build_cost_matrix(sky, &observations, &self.config.scorer)?;
        let assignment = self.solver.solve(&matrix)?;

        let total_score = assignment.total_score(&matrix);
        let matched: Vec<(usize, usize)> = assignment.iter().collect();

        fold_matches(sky, observations, &matched);

        Ok(EpochReport {
            matched,
            total_score,
            ..EpochReport::default()
        })
    }

    fn process_relaxed(
        &self,
        sky: &mut SkyModel,
        observations: Vec<Observation>,
    ) -> Result<EpochReport> {
        let rows = observations.len();
        let cols = sky.len();
        let matrix = build_padded_cost_matrix(
            sky,
            &observations,
            &self.config.scorer,
            self.config.matching.unmatched_score,
        );
        let assignment = self.solver.solve(&matrix)?;

        let mut matched = Vec::new();
        let mut unmatched_rows = Vec::new();
        let mut unobserved = Vec::new();
        for (row, col) in assignment.iter() {
            if row < rows {
                if col < cols {
                    matched.push((row, col));
                } else {
                    unmatched_rows.push(row);
                }
            } else if col < cols {
                // A slot row took a model column: that source sat out the epoch.
                unobserved.push(col);
            }
        }

        let total_score = matched
            .iter()
            .map(|&(row, col)| matrix.get(row, col))
            .sum();

        let mut slots: Vec<Option<Observation>> = observations.into_iter().map(Some).collect();

        for &(row, col) in &matched {
            if let (Some(observation), Some(model)) = (slots[row].take(), sky.source_mut(col)) {
                model.fold_observation(observation);
            }
        }

        let mut new_sources = Vec::new();
        for row in unmatched_rows {
            if let Some(observation) = slots[row].take() {
                sky.push_source(SourceModel::seeded(observation));
                new_sources.push(sky.len() - 1);
            }
        }

        Ok(EpochReport {
            matched,
            new_sources,
            unobserved,
            total_score,
        })
    }
}

/// Append each matched observation to its model and refresh that model's
/// running statistics. Exactly the matched models are mutated, each at most
/// once per epoch.
fn fold_matches(sky: &mut SkyModel, observations: Vec<Observation>, matched: &[(usize, usize)]) {
    let mut slots: Vec<Option<Observation>> = observations.into_iter().map(Some).collect();
    for &(row, col) in matched {
        if let (Some(observation), Some(model)) = (slots[row].take(), sky.source_mut(col)) {
            model.fold_observation(observation);
        }
    }
}
