//! Boundary-condition validation and enforcement.

use nalgebra::{DMatrix, DVector};

use crate::errors::UnderconstrainedError;
use crate::model::{DofMap, Node};

/// Pre-flight check that the restraints can stabilise a planar truss.
///
/// Rejects models that are missing restraint in either axis or carry fewer
/// than three restrained DOFs in total (the minimum to block two translations
/// and a rotation). This is a cheap necessary condition; restraints that pass
/// here can still be arranged ineffectively, which the solver reports as a
/// singular or rank-deficient system.
///
/// # Errors
///
/// Returns the first matching [`UnderconstrainedError`] in the order the
/// rules are listed above.
pub fn check_boundary_conditions(nodes: &[Node]) -> Result<(), UnderconstrainedError> {
    let ux_count = nodes.iter().filter(|node| node.restraints.ux).count();
    let uy_count = nodes.iter().filter(|node| node.restraints.uy).count();

    if ux_count == 0 && uy_count == 0 {
        return Err(UnderconstrainedError::NoRestraints);
    }
    if ux_count == 0 {
        return Err(UnderconstrainedError::NoRestraintX);
    }
    if uy_count == 0 {
        return Err(UnderconstrainedError::NoRestraintY);
    }
    if ux_count + uy_count < 3 {
        return Err(UnderconstrainedError::InsufficientRestraints { ux_count, uy_count });
    }
    Ok(())
}

/// Enforce zero-displacement supports by row and column elimination.
///
/// For every restrained DOF `d` the row and column `d` of the stiffness
/// matrix are zeroed, the diagonal is set to one and the load entry to zero,
/// leaving a trivial `1 * u_d = 0` equation in place. This keeps the DOF
/// indexing intact for the post-processor, at the cost of carrying the
/// trivial rows through the solve. The two axes of a node are handled
/// independently, so partial restraint works as expected.
pub(crate) fn apply_boundary_conditions(
    stiffness: &mut DMatrix<f64>,
    load: &mut DVector<f64>,
    nodes: &[Node],
    dof_map: &DofMap,
) {
    for node in nodes {
        if node.restraints.ux {
            eliminate_dof(stiffness, load, dof_map.x_index(node.id));
        }
        if node.restraints.uy {
            eliminate_dof(stiffness, load, dof_map.y_index(node.id));
        }
    }
}

/// Pin a single DOF to zero displacement.
fn eliminate_dof(stiffness: &mut DMatrix<f64>, load: &mut DVector<f64>, dof: usize) {
    stiffness.row_mut(dof).fill(0.0);
    stiffness.column_mut(dof).fill(0.0);
    stiffness[(dof, dof)] = 1.0;
    load[dof] = 0.0;
}
