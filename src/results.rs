//! Result record produced by a truss analysis.
//!
//! The record is the sole artifact handed to downstream consumers: callers
//! may serialize it to JSON for persistence, feed it to a plotting front end
//! or summarise it textually. The field names and status spellings are part
//! of that contract and must not drift.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Strength classification of an element against its material limits.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ElementStatus {
    /// Stress magnitude is below the yield strength.
    #[serde(rename = "SAFE")]
    Safe,
    /// Stress magnitude has reached the yield strength but not the ultimate strength.
    #[serde(rename = "YIELDED")]
    Yielded,
    /// Stress magnitude has reached the ultimate strength.
    #[serde(rename = "FAILED")]
    Failed,
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "SAFE",
            Self::Yielded => "YIELDED",
            Self::Failed => "FAILED",
        };
        f.write_str(label)
    }
}

/// Sense of the axial force in a member.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AxialSense {
    /// Positive axial force, pulling the end nodes apart.
    Tension,
    /// Zero or negative axial force, pushing the end nodes together.
    Compression,
}

impl fmt::Display for AxialSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Tension => "Tension",
            Self::Compression => "Compression",
        };
        f.write_str(label)
    }
}

/// Solved displacement of one node.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct NodeDisplacement {
    /// Id of the node.
    pub node_id: u32,
    /// Displacement along X in metres.
    pub ux: f64,
    /// Displacement along Y in metres.
    pub uy: f64,
}

/// Axial force in a member with its tension/compression sense.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct MemberForce {
    /// Signed axial force in newtons (positive is tension).
    pub force: f64,
    /// Whether the member carries tension or compression.
    pub status: AxialSense,
}

/// Force, stress and strength verdict for a member.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ElementCheck {
    /// Signed axial force in newtons.
    pub force: f64,
    /// Axial stress in pascals, force divided by area.
    pub stress: f64,
    /// Classification against the material's strength limits.
    pub status: ElementStatus,
}

/// Element properties echoed for downstream reporting.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ElementSummary {
    /// Id of the first end node.
    pub node_i: u32,
    /// Id of the second end node.
    pub node_j: u32,
    /// Cross-sectional area in square metres.
    pub area: f64,
    /// Name of the member's material.
    pub material: String,
    /// Member length in metres.
    pub length: f64,
    /// Young's modulus of the material in pascals.
    pub young_modulus: f64,
}

/// Complete output of one truss analysis.
///
/// Displacements are ordered by node id; the maps are keyed by element id and
/// iterate in id order, so serialized output is deterministic.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AnalysisResults {
    /// Displacement of every node, ordered by node id.
    pub displacements: Vec<NodeDisplacement>,
    /// Axial force and sense per element id.
    pub forces: BTreeMap<u32, MemberForce>,
    /// Force, stress and strength verdict per element id.
    pub element_results: BTreeMap<u32, ElementCheck>,
    /// Echoed element properties per element id.
    pub elements: BTreeMap<u32, ElementSummary>,
}
