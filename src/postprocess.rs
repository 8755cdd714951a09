//! Derivation of member forces, stresses and strength verdicts.

use nalgebra::DVector;

use crate::errors::ModelError;
use crate::model::{DofMap, Material, TrussModel};
use crate::results::{
    AnalysisResults, AxialSense, ElementCheck, ElementStatus, ElementSummary, MemberForce,
    NodeDisplacement,
};

/// Classify a stress against the material's strength limits.
///
/// Boundaries are inclusive toward the more severe verdict: a stress exactly
/// at the yield strength counts as yielded, exactly at the ultimate strength
/// as failed.
pub fn classify(stress: f64, material: &Material) -> ElementStatus {
    let magnitude = stress.abs();
    if magnitude >= material.ultimate_strength() {
        ElementStatus::Failed
    } else if magnitude >= material.yield_strength() {
        ElementStatus::Yielded
    } else {
        ElementStatus::Safe
    }
}

/// Sense of a signed axial force; zero force reports as compression.
fn axial_sense(force: f64) -> AxialSense {
    if force > 0.0 {
        AxialSense::Tension
    } else {
        AxialSense::Compression
    }
}

/// Assemble the result record from the solved displacement vector.
///
/// For each element the four endpoint displacement components are projected
/// onto the member axis to get the strain `(1/L) * (-cx, -cy, cx, cy) . u`,
/// the force `E * A * strain` (positive is tension) and the stress
/// `force / area` with the identical floating-point division the verdict is
/// based on.
pub(crate) fn build_results(
    model: &TrussModel,
    dof_map: &DofMap,
    displacements: &DVector<f64>,
) -> Result<AnalysisResults, ModelError> {
    let mut results = AnalysisResults::default();

    for node_id in 1..=model.node_count() as u32 {
        results.displacements.push(NodeDisplacement {
            node_id,
            ux: displacements[dof_map.x_index(node_id)],
            uy: displacements[dof_map.y_index(node_id)],
        });
    }

    for element in model.elements() {
        let geometry = model.geometry_of(element)?;
        let material = model
            .materials()
            .get(&element.material)
            .ok_or_else(|| ModelError::UnknownMaterial(element.material.clone()))?;

        let u = [
            displacements[dof_map.x_index(element.node_i)],
            displacements[dof_map.y_index(element.node_i)],
            displacements[dof_map.x_index(element.node_j)],
            displacements[dof_map.y_index(element.node_j)],
        ];
        let strain = (-geometry.cx * u[0] - geometry.cy * u[1]
            + geometry.cx * u[2]
            + geometry.cy * u[3])
            / geometry.length;
        let force = geometry.young_modulus * geometry.area * strain;
        let stress = force / element.area;

        results.forces.insert(
            element.id,
            MemberForce {
                force,
                status: axial_sense(force),
            },
        );
        results.element_results.insert(
            element.id,
            ElementCheck {
                force,
                stress,
                status: classify(stress, material),
            },
        );
        results.elements.insert(
            element.id,
            ElementSummary {
                node_i: element.node_i,
                node_j: element.node_j,
                area: element.area,
                material: element.material.clone(),
                length: geometry.length,
                young_modulus: geometry.young_modulus,
            },
        );
    }

    Ok(results)
}
