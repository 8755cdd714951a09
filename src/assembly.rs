//! Assembly of the global stiffness matrix and load vector.

use nalgebra::{DMatrix, DVector, SMatrix};

use crate::errors::ModelError;
use crate::model::{DofMap, ElementGeometry, TrussModel};

/// Local stiffness matrix of a 2D truss element in global coordinates.
///
/// The matrix couples the four DOFs `(uxi, uyi, uxj, uyj)` through the axial
/// stiffness `E*A/L` and the direction cosines of the member. It is symmetric
/// and singular on its own; only the assembled, restrained system is solvable.
pub(crate) fn local_stiffness(geometry: &ElementGeometry) -> SMatrix<f64, 4, 4> {
    let ElementGeometry {
        length,
        cx,
        cy,
        young_modulus,
        area,
    } = *geometry;
    let ea_over_l = young_modulus * area / length;

    #[rustfmt::skip]
    let pattern = SMatrix::<f64, 4, 4>::from_row_slice(&[
         cx * cx,  cx * cy, -cx * cx, -cx * cy,
         cx * cy,  cy * cy, -cx * cy, -cy * cy,
        -cx * cx, -cx * cy,  cx * cx,  cx * cy,
        -cx * cy, -cy * cy,  cx * cy,  cy * cy,
    ]);
    ea_over_l * pattern
}

/// Assemble the global `2N x 2N` stiffness matrix.
///
/// Each element's 4x4 block is scatter-added into the rows and columns of its
/// endpoint DOFs. The result is symmetric, and singular until boundary
/// conditions are applied (unrestrained rigid-body modes carry no stiffness).
///
/// # Errors
///
/// Returns [`ModelError::ZeroLengthElement`] when an element's endpoints
/// coincide, which would otherwise divide by zero.
pub(crate) fn assemble_global_stiffness(
    model: &TrussModel,
    dof_map: &DofMap,
) -> Result<DMatrix<f64>, ModelError> {
    let dof = dof_map.dof_count();
    let mut stiffness = DMatrix::zeros(dof, dof);
    for element in model.elements() {
        let geometry = model.geometry_of(element)?;
        let local = local_stiffness(&geometry);
        let indices = [
            dof_map.x_index(element.node_i),
            dof_map.y_index(element.node_i),
            dof_map.x_index(element.node_j),
            dof_map.y_index(element.node_j),
        ];
        for (row_local, &global_row) in indices.iter().enumerate() {
            for (col_local, &global_col) in indices.iter().enumerate() {
                stiffness[(global_row, global_col)] += local[(row_local, col_local)];
            }
        }
    }
    Ok(stiffness)
}

/// Assemble the global nodal load vector.
pub(crate) fn assemble_load_vector(model: &TrussModel, dof_map: &DofMap) -> DVector<f64> {
    let mut load = DVector::zeros(dof_map.dof_count());
    for node in model.nodes() {
        load[dof_map.x_index(node.id)] = node.loads.fx;
        load[dof_map.y_index(node.id)] = node.loads.fy;
    }
    load
}
