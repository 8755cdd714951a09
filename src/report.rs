//! Plain-text rendering of analysis results.

use std::fmt::Write;

use crate::results::AnalysisResults;

/// Render a textual summary of an analysis in three blocks: nodal
/// displacements, member axial forces with their tension or compression
/// sense, and the per-member stress check.
///
/// # Examples
/// ```
/// use truss2d::{analyze, render_report, MaterialLibrary, Restraints, TrussModel};
///
/// let mut model = TrussModel::new(MaterialLibrary::with_defaults());
/// let a = model.add_node(0.0, 0.0, Restraints::pinned());
/// let b = model.add_node(1.0, 0.0, Restraints::new(false, true));
/// model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
/// model.apply_load(b, 1_000.0, 0.0).expect("load applied");
///
/// let report = render_report(&analyze(&model).expect("analysis succeeds"));
/// assert!(report.contains("Displacements (m):"));
/// ```
#[must_use]
pub fn render_report(results: &AnalysisResults) -> String {
    let mut output = String::new();

    output.push_str("Displacements (m):\n");
    for displacement in &results.displacements {
        writeln!(
            &mut output,
            "Node {}: ux = {:.6e}, uy = {:.6e}",
            displacement.node_id, displacement.ux, displacement.uy
        )
        .expect("writing to string cannot fail");
    }

    output.push_str("\nElement Axial Forces (N):\n");
    for (element_id, member) in &results.forces {
        writeln!(
            &mut output,
            "Element {}: {:8.2} N ({})",
            element_id, member.force, member.status
        )
        .expect("writing to string cannot fail");
    }

    output.push_str("\nElement Stress Check:\n");
    for (element_id, check) in &results.element_results {
        writeln!(
            &mut output,
            "Element {}: Force = {:.2} N, Stress = {:.2e} Pa, Status = {}",
            element_id, check.force, check.stress, check.status
        )
        .expect("writing to string cannot fail");
    }

    output
}
