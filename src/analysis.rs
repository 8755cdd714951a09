//! The analysis pipeline: assembly, validation, enforcement, solve and
//! post-processing over one model snapshot.

use crate::assembly::{assemble_global_stiffness, assemble_load_vector};
use crate::conditions::{apply_boundary_conditions, check_boundary_conditions};
use crate::errors::AnalysisError;
use crate::model::{DofMap, TrussModel};
use crate::postprocess::build_results;
use crate::results::AnalysisResults;
use crate::solver::solve_displacements;

/// Analyse a truss model with the direct stiffness method.
///
/// The model is treated as an immutable snapshot: this function holds no
/// state between calls and independent models can be analysed concurrently.
/// The returned record carries nodal displacements, member forces, stresses
/// and strength verdicts, plus the echoed element properties downstream
/// reporting needs.
///
/// # Errors
///
/// Returns an [`AnalysisError`] when the model is invalid, when the
/// boundary-condition check finds it underconstrained, or when the stiffness
/// system turns out singular or rank deficient despite passing that check.
///
/// # Examples
/// ```
/// use truss2d::{analyze, MaterialLibrary, Restraints, TrussModel};
///
/// let mut model = TrussModel::new(MaterialLibrary::with_defaults());
/// let a = model.add_node(0.0, 0.0, Restraints::pinned());
/// let b = model.add_node(1.0, 0.0, Restraints::new(false, true));
/// model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
/// model.apply_load(b, 1_000.0, 0.0).expect("load applied");
///
/// let results = analyze(&model).expect("analysis succeeds");
/// assert_eq!(results.displacements.len(), 2);
/// ```
pub fn analyze(model: &TrussModel) -> Result<AnalysisResults, AnalysisError> {
    let dof_map = DofMap::build(model.nodes())?;
    let mut stiffness = assemble_global_stiffness(model, &dof_map)?;

    check_boundary_conditions(model.nodes())?;

    let mut load = assemble_load_vector(model, &dof_map);
    apply_boundary_conditions(&mut stiffness, &mut load, model.nodes(), &dof_map);

    let displacements = solve_displacements(&stiffness, &load)?;
    let results = build_results(model, &dof_map, &displacements)?;
    Ok(results)
}
