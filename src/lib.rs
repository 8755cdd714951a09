#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod analysis;
mod assembly;
mod conditions;
mod errors;
mod input;
mod model;
mod postprocess;
mod report;
mod results;
mod solver;

pub use analysis::analyze;
pub use conditions::check_boundary_conditions;
pub use errors::{AnalysisError, ModelError, UnderconstrainedError};
pub use input::parse_truss;
pub use model::{Element, Material, MaterialLibrary, NodalLoad, Node, Restraints, TrussModel};
pub use postprocess::classify;
pub use report::render_report;
pub use results::{
    AnalysisResults, AxialSense, ElementCheck, ElementStatus, ElementSummary, MemberForce,
    NodeDisplacement,
};
