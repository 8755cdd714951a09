#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use truss2d::{
    analyze, render_report, AnalysisResults, AxialSense, ElementStatus, MaterialLibrary,
    Restraints, TrussModel,
};

/// One horizontal ST-52 bar, pinned at node 1, guided at node 2, pulled with
/// 1 kN. The closed-form tip displacement is `F*L / (E*A)`.
fn solved_tension_bar() -> AnalysisResults {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());
    let fixed = model.add_node(0.0, 0.0, Restraints::pinned());
    let loaded = model.add_node(1.0, 0.0, Restraints::new(false, true));
    model
        .add_element(fixed, loaded, 0.01, "ST-52")
        .expect("element accepted");
    model.apply_load(loaded, 1_000.0, 0.0).expect("load applied");

    analyze(&model).expect("analysis succeeds")
}

#[test]
fn tip_displacement_matches_closed_form_solution() {
    let results = solved_tension_bar();

    // F*L / (E*A) = 1000 * 1 / (2.1e11 * 0.01)
    let expected = 1_000.0 / (2.1e11 * 0.01);
    assert_relative_eq!(expected, 4.761_904_761_904_762e-7);

    assert_eq!(results.displacements.len(), 2);
    let fixed = &results.displacements[0];
    assert_eq!(fixed.node_id, 1);
    assert_relative_eq!(fixed.ux, 0.0);
    assert_relative_eq!(fixed.uy, 0.0);

    let loaded = &results.displacements[1];
    assert_eq!(loaded.node_id, 2);
    assert_relative_eq!(loaded.ux, expected, max_relative = 1.0e-12);
    assert_relative_eq!(loaded.uy, 0.0);
}

#[test]
fn member_carries_the_applied_load_in_tension() {
    let results = solved_tension_bar();

    let member = results.forces.get(&1).expect("member force available");
    assert_relative_eq!(member.force, 1_000.0, max_relative = 1.0e-9);
    assert_eq!(member.status, AxialSense::Tension);

    let check = results
        .element_results
        .get(&1)
        .expect("stress check available");
    // Stress is the identical floating-point division force / area.
    assert_eq!(check.stress, check.force / 0.01);
    assert_relative_eq!(check.stress, 1.0e5, max_relative = 1.0e-9);
    // 0.1 MPa is far below the 350 MPa yield strength of ST-52.
    assert_eq!(check.status, ElementStatus::Safe);
}

#[test]
fn element_metadata_is_echoed_for_reporting() {
    let results = solved_tension_bar();

    let summary = results.elements.get(&1).expect("summary available");
    assert_eq!(summary.node_i, 1);
    assert_eq!(summary.node_j, 2);
    assert_relative_eq!(summary.area, 0.01);
    assert_eq!(summary.material, "ST-52");
    assert_relative_eq!(summary.length, 1.0);
    assert_relative_eq!(summary.young_modulus, 2.1e11);
}

#[test]
fn report_and_json_cover_the_result_record() {
    let results = solved_tension_bar();

    let report = render_report(&results);
    assert!(report.contains("Displacements (m):"));
    assert!(report.contains("Element Axial Forces (N):"));
    assert!(report.contains("(Tension)"));
    assert!(report.contains("Status = SAFE"));

    let json = serde_json::to_string(&results).expect("record serializes");
    let restored: AnalysisResults = serde_json::from_str(&json).expect("record deserializes");
    assert_eq!(restored, results);
}
