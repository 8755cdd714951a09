#![warn(clippy::pedantic)]

use truss2d::{
    analyze, AnalysisError, MaterialLibrary, ModelError, Restraints, TrussModel,
    UnderconstrainedError,
};

#[test]
fn unrestrained_model_is_rejected_by_the_validator() {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());
    let a = model.add_node(0.0, 0.0, Restraints::free());
    let b = model.add_node(1.0, 0.0, Restraints::free());
    model.add_element(a, b, 0.01, "ST-52").expect("element accepted");

    let error = analyze(&model).expect_err("free model rejected");
    assert_eq!(
        error,
        AnalysisError::Underconstrained(UnderconstrainedError::NoRestraints)
    );
}

#[test]
fn minimal_triangle_restraints_pass_the_validator() {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());
    let a = model.add_node(0.0, 0.0, Restraints::pinned());
    let b = model.add_node(3.0, 0.0, Restraints::new(false, true));
    let c = model.add_node(1.5, 1.5, Restraints::free());
    model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
    model.add_element(b, c, 0.01, "ST-52").expect("element accepted");
    model.add_element(a, c, 0.01, "ST-52").expect("element accepted");

    analyze(&model).expect("triangle with pin plus roller solves");
}

/// Collinear chain: three nodes on the X axis with ux, uy restrained at the
/// ends but nothing to resist a vertical sway of the middle node. The
/// restraint count satisfies the validator, yet the stiffness system is
/// degenerate, which must surface from the solver stage rather than the
/// pre-flight check.
#[test]
fn ineffective_restraints_pass_the_validator_but_fail_in_the_solver() {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());
    let a = model.add_node(0.0, 0.0, Restraints::pinned());
    let b = model.add_node(1.0, 0.0, Restraints::free());
    let c = model.add_node(2.0, 0.0, Restraints::new(false, true));
    model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
    model.add_element(b, c, 0.01, "ST-52").expect("element accepted");
    model.apply_load(b, 0.0, -1_000.0).expect("load applied");

    let error = analyze(&model).expect_err("mechanism rejected");
    match error {
        AnalysisError::SingularSystem { .. } | AnalysisError::RankDeficient { .. } => {
            let message = error.to_string();
            assert!(message.contains("restraints") || message.contains("restrain"));
        }
        other => panic!("expected a solver-stage degeneracy error, got {other:?}"),
    }
}

#[test]
fn solver_degeneracy_kinds_stay_distinguishable() {
    // Callers are expected to branch on the error kind, so the variants must
    // compare as distinct values even with similar remediation advice.
    let singular = AnalysisError::SingularSystem { determinant: 0.0 };
    let rank_deficient = AnalysisError::RankDeficient { rank: 3, expected: 4 };
    let numerical = AnalysisError::NumericalSolve {
        message: "SVD did not converge".to_owned(),
    };

    assert_ne!(singular, rank_deficient);
    assert_ne!(rank_deficient, numerical);
    assert!(rank_deficient.to_string().contains("rank 3"));
    assert!(rank_deficient.to_string().contains("4 degrees of freedom"));
}

#[test]
fn zero_length_element_fails_before_any_numerics() {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());
    let a = model.add_node(0.0, 0.0, Restraints::pinned());
    model.add_node(0.0, 0.0, Restraints::new(false, true));
    let c = model.add_node(1.0, 0.0, Restraints::new(false, true));
    model.add_element(a, 2, 0.01, "ST-52").expect("element accepted");
    model.add_element(a, c, 0.01, "ST-52").expect("element accepted");

    let error = analyze(&model).expect_err("zero-length element rejected");
    assert_eq!(error, AnalysisError::Model(ModelError::ZeroLengthElement(1)));
}
