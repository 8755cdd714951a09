//! Error types produced while building or analysing truss models.

use thiserror::Error;

/// Error returned when a truss model is invalid.
///
/// Every variant is detected while the model is being built or while the
/// solver prepares its degree-of-freedom bookkeeping, before any numerical
/// work happens. Callers can fix the model and retry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// Returned when an element spans zero distance.
    #[error("element {0} has zero length; its end nodes coincide")]
    ZeroLengthElement(u32),
    /// Returned when an element connects a node to itself.
    #[error("element endpoints must be two different nodes (both are node {0})")]
    IdenticalEndpoints(u32),
    /// Returned when an element or load references a node that does not exist.
    #[error("node {0} does not exist in this model")]
    UnknownNode(u32),
    /// Returned when an element names a material missing from the library.
    #[error("material {0:?} is not in the material library")]
    UnknownMaterial(String),
    /// Returned when a cross-sectional area is zero or negative.
    #[error("element area must be positive (received {area})")]
    NonPositiveArea {
        /// Rejected cross-sectional area in square metres.
        area: f64,
    },
    /// Returned when a material property is zero or negative.
    #[error("material {name:?}: {property} must be positive (received {value})")]
    NonPositiveMaterialProperty {
        /// Name of the offending material.
        name: String,
        /// Which property was rejected.
        property: &'static str,
        /// Rejected value in pascals.
        value: f64,
    },
    /// Returned when a material's ultimate strength is below its yield strength.
    #[error(
        "material {name:?}: ultimate strength {ultimate} is below yield strength {yield_strength}"
    )]
    UltimateBelowYield {
        /// Name of the offending material.
        name: String,
        /// Yield strength in pascals.
        yield_strength: f64,
        /// Ultimate strength in pascals.
        ultimate: f64,
    },
    /// Returned when two nodes share an id.
    #[error("node id {0} appears more than once")]
    DuplicateNodeId(u32),
    /// Returned when two elements share an id.
    #[error("element id {0} appears more than once")]
    DuplicateElementId(u32),
    /// Returned when node ids do not form a dense range starting at 1.
    ///
    /// Degree-of-freedom indices are derived from node ids, so a gap in the
    /// ids would silently corrupt the index mapping if it were not rejected.
    #[error("node ids must form a contiguous range 1..={expected_count} (id {missing} is missing)")]
    NonContiguousNodeIds {
        /// Number of nodes in the model.
        expected_count: u32,
        /// Smallest id absent from the dense range.
        missing: u32,
    },
    /// Returned when a truss input file cannot be parsed.
    #[error("invalid truss input at line {line}: {reason}")]
    InvalidInput {
        /// One-based line number of the offending input line.
        line: usize,
        /// Description of what was expected.
        reason: String,
    },
}

/// Verdict returned when the boundary conditions cannot stabilise the truss.
///
/// These checks are necessary but not sufficient: a model that passes can
/// still be singular if its restraints are arranged ineffectively, which the
/// solver detects during the solve itself.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UnderconstrainedError {
    /// Returned when not a single degree of freedom is restrained.
    #[error("no boundary conditions: every node is free to move; restrain at least one node")]
    NoRestraints,
    /// Returned when no node restrains displacement along X.
    #[error("no restraint in X: the truss can translate freely along the X axis")]
    NoRestraintX,
    /// Returned when no node restrains displacement along Y.
    #[error("no restraint in Y: the truss can translate freely along the Y axis")]
    NoRestraintY,
    /// Returned when fewer than three degrees of freedom are restrained in total.
    #[error(
        "insufficient restraints to prevent rotation: {ux_count} in X plus {uy_count} in Y; \
         at least 3 are required"
    )]
    InsufficientRestraints {
        /// Number of nodes restraining `ux`.
        ux_count: usize,
        /// Number of nodes restraining `uy`.
        uy_count: usize,
    },
}

/// Error returned when a truss analysis fails.
///
/// The three solver variants stay distinct so callers can branch on the kind
/// of degeneracy while still rendering the remediation text to users.
///
/// # Examples
///
/// ```
/// use truss2d::{analyze, AnalysisError, MaterialLibrary, Restraints, TrussModel};
///
/// let mut model = TrussModel::new(MaterialLibrary::with_defaults());
/// let a = model.add_node(0.0, 0.0, Restraints::free());
/// let b = model.add_node(1.0, 0.0, Restraints::free());
/// model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
///
/// let error = analyze(&model).expect_err("unrestrained model rejected");
/// assert!(matches!(error, AnalysisError::Underconstrained(_)));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the model itself is invalid.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// Returned when the pre-flight boundary-condition check rejects the model.
    #[error(transparent)]
    Underconstrained(#[from] UnderconstrainedError),
    /// Returned when the constrained stiffness matrix is numerically singular.
    #[error(
        "stiffness matrix is singular (determinant {determinant:.3e}); the supports are \
         insufficient or ineffective, add or reposition restraints"
    )]
    SingularSystem {
        /// Determinant of the constrained stiffness matrix.
        determinant: f64,
    },
    /// Returned when the least-squares fallback finds the system rank deficient.
    #[error(
        "stiffness matrix has rank {rank} but {expected} degrees of freedom; rigid-body \
         motion (translation in X, translation in Y, or rotation) is not fully suppressed, \
         add or reposition restraints"
    )]
    RankDeficient {
        /// Numerically estimated rank of the constrained stiffness matrix.
        rank: usize,
        /// Expected rank, equal to the number of degrees of freedom.
        expected: usize,
    },
    /// Returned when the solve fails for any other numerical reason.
    #[error(
        "failed to solve truss system: {message}; check that the supports adequately \
         restrain the structure"
    )]
    NumericalSolve {
        /// Description of the underlying numerical failure.
        message: String,
    },
}
