//! Model data for pin-jointed planar trusses.
//!
//! A [`TrussModel`] is a caller-owned snapshot of nodes, elements and the
//! material library they draw from. The analysis pipeline treats it as
//! read-only input; nothing in this crate keeps ambient state between solves.

use std::collections::{BTreeMap, HashSet};

use crate::errors::ModelError;

/// Linear-elastic material with strength limits.
///
/// Materials are validated on construction and shared by name through a
/// [`MaterialLibrary`], so a solve never encounters an unchecked property.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Display name, also the library key.
    name: String,
    /// Young's modulus in pascals.
    young_modulus: f64,
    /// Yield strength in pascals.
    yield_strength: f64,
    /// Ultimate strength in pascals.
    ultimate_strength: f64,
}

impl Material {
    /// Create a material, rejecting non-physical properties.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveMaterialProperty`] when any property
    /// is zero or negative and [`ModelError::UltimateBelowYield`] when the
    /// ultimate strength is below the yield strength.
    ///
    /// # Examples
    /// ```
    /// use truss2d::Material;
    ///
    /// let steel = Material::new("ST-52", 210.0e9, 350.0e6, 550.0e6).expect("valid material");
    /// assert_eq!(steel.name(), "ST-52");
    /// ```
    pub fn new(
        name: impl Into<String>,
        young_modulus: f64,
        yield_strength: f64,
        ultimate_strength: f64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        for (property, value) in [
            ("Young's modulus", young_modulus),
            ("yield strength", yield_strength),
            ("ultimate strength", ultimate_strength),
        ] {
            if value <= 0.0 {
                return Err(ModelError::NonPositiveMaterialProperty {
                    name,
                    property,
                    value,
                });
            }
        }
        if ultimate_strength < yield_strength {
            return Err(ModelError::UltimateBelowYield {
                name,
                yield_strength,
                ultimate: ultimate_strength,
            });
        }
        Ok(Self {
            name,
            young_modulus,
            yield_strength,
            ultimate_strength,
        })
    }

    /// Name of the material.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Young's modulus in pascals.
    #[must_use]
    pub fn young_modulus(&self) -> f64 {
        self.young_modulus
    }

    /// Yield strength in pascals.
    #[must_use]
    pub fn yield_strength(&self) -> f64 {
        self.yield_strength
    }

    /// Ultimate strength in pascals.
    #[must_use]
    pub fn ultimate_strength(&self) -> f64 {
        self.ultimate_strength
    }
}

/// Table of materials keyed by name.
///
/// Elements reference materials by name; the reference is resolved and
/// checked when the element is added, not during the solve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialLibrary {
    /// Materials keyed by their display name.
    materials: BTreeMap<String, Material>,
}

impl MaterialLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a library stocked with the built-in structural steels.
    ///
    /// # Examples
    /// ```
    /// use truss2d::MaterialLibrary;
    ///
    /// let library = MaterialLibrary::with_defaults();
    /// assert!(library.get("ST-52").is_some());
    /// ```
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut library = Self::default();
        for (name, e, sy, su) in [
            ("ST-52", 210.0e9, 350.0e6, 550.0e6),
            ("ST-32", 200.0e9, 195.0e6, 340.0e6),
            ("Iron", 190.0e9, 200.0e6, 325.0e6),
        ] {
            let material = Material::new(name, e, sy, su).expect("built-in material is valid");
            library.insert(material);
        }
        library
    }

    /// Add or replace a material, keyed by its name.
    pub fn insert(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Look up a material by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Iterate over the material names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }
}

/// Restraint flags for the two translational degrees of freedom of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Restraints {
    /// Whether displacement along X is fixed to zero.
    pub ux: bool,
    /// Whether displacement along Y is fixed to zero.
    pub uy: bool,
}

impl Restraints {
    /// Create restraints with explicit flags.
    #[must_use]
    pub const fn new(ux: bool, uy: bool) -> Self {
        Self { ux, uy }
    }

    /// No restraint in either direction.
    #[must_use]
    pub const fn free() -> Self {
        Self::new(false, false)
    }

    /// Both directions fixed, modelling a pin support.
    #[must_use]
    pub const fn pinned() -> Self {
        Self::new(true, true)
    }
}

/// Accumulated external load on a node in newtons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodalLoad {
    /// Force component along the global X axis.
    pub fx: f64,
    /// Force component along the global Y axis.
    pub fy: f64,
}

/// A joint of the truss.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Identifier; ids must form a dense range starting at 1.
    pub id: u32,
    /// X coordinate in metres.
    pub x: f64,
    /// Y coordinate in metres.
    pub y: f64,
    /// Support restraints for this node.
    pub restraints: Restraints,
    /// External load applied at this node.
    pub loads: NodalLoad,
}

impl Node {
    /// Create an unrestrained, unloaded node.
    #[must_use]
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            restraints: Restraints::free(),
            loads: NodalLoad::default(),
        }
    }
}

/// An axial-only member connecting two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Identifier of the element.
    pub id: u32,
    /// Id of the first end node.
    pub node_i: u32,
    /// Id of the second end node.
    pub node_j: u32,
    /// Cross-sectional area in square metres.
    pub area: f64,
    /// Name of the material in the model's library.
    pub material: String,
}

/// Geometric and material quantities derived from an element's endpoints.
///
/// Computed once per element per solve; the length check here is the fatal
/// zero-length guard from the modelling rules.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ElementGeometry {
    /// Member length in metres, strictly positive.
    pub length: f64,
    /// Direction cosine along X.
    pub cx: f64,
    /// Direction cosine along Y.
    pub cy: f64,
    /// Young's modulus of the resolved material in pascals.
    pub young_modulus: f64,
    /// Cross-sectional area in square metres.
    pub area: f64,
}

/// Caller-owned snapshot of a truss: nodes, elements and materials.
///
/// # Examples
/// ```
/// use truss2d::{MaterialLibrary, Restraints, TrussModel};
///
/// let mut model = TrussModel::new(MaterialLibrary::with_defaults());
/// let a = model.add_node(0.0, 0.0, Restraints::pinned());
/// let b = model.add_node(1.0, 0.0, Restraints::new(false, true));
/// let member = model.add_element(a, b, 0.01, "ST-52").expect("element accepted");
/// assert_eq!(member, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrussModel {
    /// Nodes in insertion order.
    nodes: Vec<Node>,
    /// Elements in insertion order.
    elements: Vec<Element>,
    /// Materials available to elements of this model.
    materials: MaterialLibrary,
}

impl TrussModel {
    /// Create an empty model backed by the given material library.
    #[must_use]
    pub fn new(materials: MaterialLibrary) -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
            materials,
        }
    }

    /// Build a model from pre-constructed node and element lists.
    ///
    /// Used by ingestion code that assigns ids itself (for example the text
    /// input loader). All per-entity invariants are checked here so the
    /// analysis can trust the snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] describing the first violated invariant:
    /// duplicate or non-contiguous ids, identical or unknown endpoints,
    /// non-positive areas, or unknown materials.
    pub fn from_parts(
        nodes: Vec<Node>,
        elements: Vec<Element>,
        materials: MaterialLibrary,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(ModelError::DuplicateNodeId(node.id));
            }
        }
        DofMap::build(&nodes)?;

        let mut seen = HashSet::new();
        let mut model = Self::new(materials);
        model.nodes = nodes;
        for element in &elements {
            if !seen.insert(element.id) {
                return Err(ModelError::DuplicateElementId(element.id));
            }
            model.check_element(element.node_i, element.node_j, element.area, &element.material)?;
        }
        model.elements = elements;
        Ok(model)
    }

    /// Number of nodes in the model.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the model.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The material library backing this model.
    #[must_use]
    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Add a node at the given position and return its id.
    ///
    /// Ids are assigned densely starting at 1.
    pub fn add_node(&mut self, x: f64, y: f64, restraints: Restraints) -> u32 {
        let id = self.nodes.len() as u32 + 1;
        let mut node = Node::new(id, x, y);
        node.restraints = restraints;
        self.nodes.push(node);
        id
    }

    /// Replace the restraints of an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] when `node_id` is not in the model.
    pub fn set_restraints(&mut self, node_id: u32, restraints: Restraints) -> Result<(), ModelError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == node_id)
            .ok_or(ModelError::UnknownNode(node_id))?;
        node.restraints = restraints;
        Ok(())
    }

    /// Add an external load to a node.
    ///
    /// Load contributions accumulate: applying `fx = 100` and then `fx = 50`
    /// to the same node leaves a total of 150 newtons.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] when `node_id` is not in the model.
    pub fn apply_load(&mut self, node_id: u32, fx: f64, fy: f64) -> Result<(), ModelError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == node_id)
            .ok_or(ModelError::UnknownNode(node_id))?;
        node.loads.fx += fx;
        node.loads.fy += fy;
        Ok(())
    }

    /// Connect two nodes with a new element and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IdenticalEndpoints`] when both endpoints are the
    /// same node, [`ModelError::UnknownNode`] when either endpoint is missing,
    /// [`ModelError::NonPositiveArea`] for a non-positive area and
    /// [`ModelError::UnknownMaterial`] when the material name is not in the
    /// library.
    pub fn add_element(
        &mut self,
        node_i: u32,
        node_j: u32,
        area: f64,
        material: &str,
    ) -> Result<u32, ModelError> {
        self.check_element(node_i, node_j, area, material)?;
        let id = self.elements.len() as u32 + 1;
        self.elements.push(Element {
            id,
            node_i,
            node_j,
            area,
            material: material.to_owned(),
        });
        Ok(id)
    }

    /// Remove all nodes and elements, keeping the material library.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elements.clear();
    }

    /// Validate the invariants of a prospective element.
    fn check_element(
        &self,
        node_i: u32,
        node_j: u32,
        area: f64,
        material: &str,
    ) -> Result<(), ModelError> {
        if node_i == node_j {
            return Err(ModelError::IdenticalEndpoints(node_i));
        }
        for id in [node_i, node_j] {
            if self.node(id).is_none() {
                return Err(ModelError::UnknownNode(id));
            }
        }
        if area <= 0.0 {
            return Err(ModelError::NonPositiveArea { area });
        }
        if self.materials.get(material).is_none() {
            return Err(ModelError::UnknownMaterial(material.to_owned()));
        }
        Ok(())
    }

    /// Resolve an element's derived geometry and material properties.
    pub(crate) fn geometry_of(&self, element: &Element) -> Result<ElementGeometry, ModelError> {
        let start = self
            .node(element.node_i)
            .ok_or(ModelError::UnknownNode(element.node_i))?;
        let end = self
            .node(element.node_j)
            .ok_or(ModelError::UnknownNode(element.node_j))?;
        let material = self
            .materials
            .get(&element.material)
            .ok_or_else(|| ModelError::UnknownMaterial(element.material.clone()))?;

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let length = dx.hypot(dy);
        if length == 0.0 {
            return Err(ModelError::ZeroLengthElement(element.id));
        }
        Ok(ElementGeometry {
            length,
            cx: dx / length,
            cy: dy / length,
            young_modulus: material.young_modulus,
            area: element.area,
        })
    }
}

/// Explicit mapping from node ids to degree-of-freedom indices.
///
/// Node `id` owns DOF rows `2*(id-1)` (X) and `2*(id-1) + 1` (Y). The map is
/// built once per solve and refuses node id sets that are not a dense
/// `1..=N` range, since the arithmetic would silently address the wrong rows
/// otherwise.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DofMap {
    /// Number of nodes covered by the map.
    node_count: usize,
}

impl DofMap {
    /// Build and validate the map for a node set.
    pub(crate) fn build(nodes: &[Node]) -> Result<Self, ModelError> {
        let expected_count = nodes.len() as u32;
        let ids: HashSet<u32> = nodes.iter().map(|node| node.id).collect();
        for id in 1..=expected_count {
            if !ids.contains(&id) {
                return Err(ModelError::NonContiguousNodeIds {
                    expected_count,
                    missing: id,
                });
            }
        }
        Ok(Self {
            node_count: nodes.len(),
        })
    }

    /// Total number of degrees of freedom, two per node.
    pub(crate) fn dof_count(&self) -> usize {
        self.node_count * 2
    }

    /// Index of the X-translation DOF of a node.
    pub(crate) fn x_index(&self, node_id: u32) -> usize {
        (node_id as usize - 1) * 2
    }

    /// Index of the Y-translation DOF of a node.
    pub(crate) fn y_index(&self, node_id: u32) -> usize {
        self.x_index(node_id) + 1
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn two_node_model() -> TrussModel {
        let mut model = TrussModel::new(MaterialLibrary::with_defaults());
        model.add_node(0.0, 0.0, Restraints::pinned());
        model.add_node(3.0, 4.0, Restraints::free());
        model
    }

    #[test]
    fn material_rejects_non_physical_properties() {
        let error = Material::new("bad", 0.0, 1.0, 2.0).expect_err("zero modulus rejected");
        assert!(matches!(
            error,
            ModelError::NonPositiveMaterialProperty {
                property: "Young's modulus",
                ..
            }
        ));

        let error =
            Material::new("bad", 200.0e9, 400.0e6, 300.0e6).expect_err("Su below Sy rejected");
        assert!(matches!(error, ModelError::UltimateBelowYield { .. }));
    }

    #[test]
    fn default_library_contains_expected_steels() {
        let library = MaterialLibrary::with_defaults();
        let names: Vec<&str> = library.names().collect();
        assert_eq!(names, ["Iron", "ST-32", "ST-52"]);

        let st52 = library.get("ST-52").expect("ST-52 present");
        assert_relative_eq!(st52.young_modulus(), 210.0e9);
        assert_relative_eq!(st52.yield_strength(), 350.0e6);
        assert_relative_eq!(st52.ultimate_strength(), 550.0e6);
    }

    #[test]
    fn node_ids_are_assigned_densely_from_one() {
        let model = two_node_model();
        assert_eq!(model.node_count(), 2);
        assert_eq!(model.nodes()[0].id, 1);
        assert_eq!(model.nodes()[1].id, 2);
    }

    #[test]
    fn loads_accumulate_instead_of_overwriting() {
        let mut model = two_node_model();
        model.apply_load(2, 100.0, 0.0).expect("first load applied");
        model.apply_load(2, 50.0, -25.0).expect("second load applied");

        let node = model.node(2).expect("node present");
        assert_relative_eq!(node.loads.fx, 150.0);
        assert_relative_eq!(node.loads.fy, -25.0);
    }

    #[test]
    fn element_validation_rejects_bad_input() {
        let mut model = two_node_model();

        let error = model
            .add_element(1, 1, 0.01, "ST-52")
            .expect_err("self-loop rejected");
        assert_eq!(error, ModelError::IdenticalEndpoints(1));

        let error = model
            .add_element(1, 9, 0.01, "ST-52")
            .expect_err("missing node rejected");
        assert_eq!(error, ModelError::UnknownNode(9));

        let error = model
            .add_element(1, 2, -0.01, "ST-52")
            .expect_err("negative area rejected");
        assert_eq!(error, ModelError::NonPositiveArea { area: -0.01 });

        let error = model
            .add_element(1, 2, 0.01, "unobtanium")
            .expect_err("unknown material rejected");
        assert_eq!(error, ModelError::UnknownMaterial("unobtanium".to_owned()));
    }

    #[test]
    fn geometry_reports_length_and_direction_cosines() {
        let mut model = two_node_model();
        model.add_element(1, 2, 0.01, "ST-52").expect("element accepted");

        let geometry = model
            .geometry_of(&model.elements()[0])
            .expect("geometry resolves");
        assert_relative_eq!(geometry.length, 5.0);
        assert_relative_eq!(geometry.cx, 0.6);
        assert_relative_eq!(geometry.cy, 0.8);
        assert_relative_eq!(geometry.young_modulus, 210.0e9);
    }

    #[test]
    fn zero_length_element_is_fatal() {
        let nodes = vec![Node::new(1, 1.0, 1.0), Node::new(2, 1.0, 1.0)];
        let elements = vec![Element {
            id: 7,
            node_i: 1,
            node_j: 2,
            area: 0.01,
            material: "ST-52".to_owned(),
        }];
        let model = TrussModel::from_parts(nodes, elements, MaterialLibrary::with_defaults())
            .expect("coincident nodes are legal until an element spans them");

        let error = model
            .geometry_of(&model.elements()[0])
            .expect_err("zero length detected");
        assert_eq!(error, ModelError::ZeroLengthElement(7));
    }

    #[test]
    fn from_parts_rejects_duplicate_and_sparse_ids() {
        let library = MaterialLibrary::with_defaults();

        let nodes = vec![Node::new(1, 0.0, 0.0), Node::new(1, 1.0, 0.0)];
        let error = TrussModel::from_parts(nodes, Vec::new(), library.clone())
            .expect_err("duplicate id rejected");
        assert_eq!(error, ModelError::DuplicateNodeId(1));

        let nodes = vec![Node::new(1, 0.0, 0.0), Node::new(3, 1.0, 0.0)];
        let error = TrussModel::from_parts(nodes, Vec::new(), library)
            .expect_err("sparse ids rejected");
        assert_eq!(
            error,
            ModelError::NonContiguousNodeIds {
                expected_count: 2,
                missing: 2,
            }
        );
    }

    #[test]
    fn dof_map_indexes_by_node_id() {
        let nodes = vec![Node::new(2, 1.0, 0.0), Node::new(1, 0.0, 0.0)];
        let map = DofMap::build(&nodes).expect("dense ids accepted in any order");
        assert_eq!(map.dof_count(), 4);
        assert_eq!(map.x_index(1), 0);
        assert_eq!(map.y_index(1), 1);
        assert_eq!(map.x_index(2), 2);
        assert_eq!(map.y_index(2), 3);
    }
}
