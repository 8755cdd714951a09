//! Linear solution of the constrained stiffness system.

use nalgebra::{DMatrix, DVector};

use crate::errors::AnalysisError;

/// Threshold below which the system determinant is treated as singular, and
/// the epsilon used for the numerical rank estimate of the fallback path.
const SINGULARITY_TOLERANCE: f64 = 1e-10;

/// Solve `K * d = F` for the displacement vector.
///
/// Degeneracy is diagnosed in three distinct ways so callers can tell a
/// structurally inadequate model from a numerical accident:
///
/// 1. A determinant below [`SINGULARITY_TOLERANCE`] fails immediately as
///    [`AnalysisError::SingularSystem`]; attempting the solve would only
///    produce noise.
/// 2. If the direct LU solve still fails (the determinant check is a
///    heuristic, not a proof), a minimum-norm least-squares solve runs and
///    the numerical rank of `K` decides between
///    [`AnalysisError::RankDeficient`] and accepting the least-squares
///    solution for a borderline-conditioned but invertible system.
/// 3. Any other numerical failure is wrapped as
///    [`AnalysisError::NumericalSolve`] with the underlying message.
pub(crate) fn solve_displacements(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    let determinant = stiffness.determinant();
    if determinant.abs() < SINGULARITY_TOLERANCE {
        return Err(AnalysisError::SingularSystem { determinant });
    }

    if let Some(displacements) = stiffness.clone().lu().solve(load) {
        return Ok(displacements);
    }
    least_squares_fallback(stiffness, load)
}

/// Minimum-norm least-squares solve with a rank inspection.
///
/// Reached when LU elimination hits an exactly zero pivot that the
/// determinant heuristic did not catch. Rank below the DOF count means a
/// rigid-body mode survived the boundary conditions; full rank means the
/// system was merely borderline-conditioned and the least-squares solution
/// is acceptable.
fn least_squares_fallback(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    let expected = stiffness.nrows();
    let svd = stiffness.clone().svd(true, true);
    let rank = svd.rank(SINGULARITY_TOLERANCE);
    if rank < expected {
        return Err(AnalysisError::RankDeficient { rank, expected });
    }
    svd.solve(load, SINGULARITY_TOLERANCE)
        .map_err(|message| AnalysisError::NumericalSolve {
            message: message.to_owned(),
        })
}
