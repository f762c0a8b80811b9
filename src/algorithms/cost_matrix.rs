use crate::algorithms::compatibility::{compatibility_score, ScorerConfig};
use crate::error::{Error, Result};
use crate::models::observation::Observation;
use crate::models::sky_model::SkyModel;

/// Pairwise compatibility snapshot for one epoch.
///
/// Rows are observations in epoch row order, columns are models in sky-model
/// order. Rebuilt from scratch every epoch and never mutated after solving.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    scores: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    pub(crate) fn with_fill(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            scores: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, score: f64) {
        self.scores[row * self.cols + col] = score;
    }

    /// Score of pairing observation `row` with model `col`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.scores[row * self.cols + col]
    }

    /// Number of observation rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of model columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether every cell is finite.
    pub fn is_finite(&self) -> bool {
        self.scores.iter().all(|s| s.is_finite())
    }
}

/// Build the full observations-by-models score matrix for one epoch.
///
/// The baseline design requires the epoch to carry exactly as many
/// observations as the sky model tracks sources; a mismatch fails before any
/// scoring work. Inputs are not mutated.
pub fn build_cost_matrix(
    sky: &SkyModel,
    observations: &[Observation],
    config: &ScorerConfig,
) -> Result<CostMatrix> {
    if observations.len() != sky.len() {
        return Err(Error::CardinalityMismatch {
            observations: observations.len(),
            models: sky.len(),
        });
    }

    let mut matrix = CostMatrix::with_fill(observations.len(), sky.len(), 0.0);
    for (i, observation) in observations.iter().enumerate() {
        for (j, model) in sky.iter().enumerate() {
            matrix.set(i, j, compatibility_score(model, observation, config));
        }
    }
    Ok(matrix)
}

/// Build a square matrix that tolerates unequal counts.
///
/// The real observations-by-models block sits top-left. Each observation gets
/// one "stays unmatched" slot column and each model one "unobserved this
/// epoch" slot row, scored at the fixed `unmatched_score`; pairings between an
/// entity and a foreign slot are scored at zero so the solver never prefers
/// them. A perfect matching on this matrix therefore encodes matches, new
/// sources, and skipped models all at once.
pub fn build_padded_cost_matrix(
    sky: &SkyModel,
    observations: &[Observation],
    config: &ScorerConfig,
    unmatched_score: f64,
) -> CostMatrix {
    let j = observations.len();
    let k = sky.len();
    let n = j + k;

    let mut matrix = CostMatrix::with_fill(n, n, 0.0);

    for (i, observation) in observations.iter().enumerate() {
        for (m, model) in sky.iter().enumerate() {
            matrix.set(i, m, compatibility_score(model, observation, config));
        }
        // Slot column for observation i.
        matrix.set(i, k + i, unmatched_score);
    }

    for m in 0..k {
        // Slot row for model m.
        matrix.set(j + m, m, unmatched_score);
    }

    // Slot rows may absorb leftover slot columns freely.
    for m in 0..k {
        for b in 0..j {
            matrix.set(j + m, k + b, unmatched_score);
        }
    }

    matrix
}
