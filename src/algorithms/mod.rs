//! Algorithmic core: compatibility scoring, cost-matrix construction, and
//! optimal assignment.
//!
//! The scorer and the matrix builders are pure; the assignment solver is an
//! injected capability behind [`assignment::AssignmentSolver`] so exact and
//! approximate implementations can be swapped without touching the cycle.

pub mod assignment;
pub mod compatibility;
pub mod cost_matrix;

pub use assignment::{Assignment, AssignmentSolver, GreedySolver, HungarianSolver};
pub use compatibility::{compatibility_score, FluxWeighting, ScorerConfig};
pub use cost_matrix::{build_cost_matrix, build_padded_cost_matrix, CostMatrix};
