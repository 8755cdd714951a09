//! Loader for the plain-text truss input format.
//!
//! The format has two sections introduced by the bare words `nodes` and
//! `elements`; blank lines and `#` comments are skipped. Node rows are
//! `id x y ux uy fx fy` (restraints as 0/1 flags), element rows are
//! `id node_i node_j area material`:
//!
//! ```text
//! nodes
//! 1  0.0 0.0  1 1  0.0    0.0
//! 2  1.0 0.0  0 1  1000.0 0.0
//!
//! elements
//! 1  1 2  0.01  ST-52
//! ```

use crate::errors::ModelError;
use crate::model::{Element, MaterialLibrary, NodalLoad, Node, Restraints, TrussModel};

/// Section of the input file currently being read.
enum Section {
    /// No section header seen yet.
    None,
    /// Reading node rows.
    Nodes,
    /// Reading element rows.
    Elements,
}

/// Parse a truss model from the plain-text input format.
///
/// # Errors
///
/// Returns [`ModelError::InvalidInput`] with the offending line number when a
/// row cannot be parsed, and the usual model-construction errors when the
/// parsed entities violate an invariant (unknown material, sparse node ids
/// and so on).
pub fn parse_truss(text: &str, materials: MaterialLibrary) -> Result<TrussModel, ModelError> {
    let mut section = Section::None;
    let mut nodes = Vec::new();
    let mut elements = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("nodes") {
            section = Section::Nodes;
            continue;
        }
        if line.eq_ignore_ascii_case("elements") {
            section = Section::Elements;
            continue;
        }

        let line_number = index + 1;
        match section {
            Section::None => {
                return Err(ModelError::InvalidInput {
                    line: line_number,
                    reason: "expected a 'nodes' or 'elements' section header".to_owned(),
                });
            }
            Section::Nodes => nodes.push(parse_node_row(line, line_number)?),
            Section::Elements => elements.push(parse_element_row(line, line_number)?),
        }
    }

    TrussModel::from_parts(nodes, elements, materials)
}

/// Parse one `id x y ux uy fx fy` node row.
fn parse_node_row(line: &str, line_number: usize) -> Result<Node, ModelError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 7 {
        return Err(ModelError::InvalidInput {
            line: line_number,
            reason: format!(
                "node rows need 7 fields (id x y ux uy fx fy), found {}",
                fields.len()
            ),
        });
    }
    let mut node = Node::new(
        parse_field(fields[0], "node id", line_number)?,
        parse_field(fields[1], "x coordinate", line_number)?,
        parse_field(fields[2], "y coordinate", line_number)?,
    );
    node.restraints = Restraints::new(
        parse_flag(fields[3], "ux restraint", line_number)?,
        parse_flag(fields[4], "uy restraint", line_number)?,
    );
    node.loads = NodalLoad {
        fx: parse_field(fields[5], "fx load", line_number)?,
        fy: parse_field(fields[6], "fy load", line_number)?,
    };
    Ok(node)
}

/// Parse one `id node_i node_j area material` element row.
fn parse_element_row(line: &str, line_number: usize) -> Result<Element, ModelError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(ModelError::InvalidInput {
            line: line_number,
            reason: format!(
                "element rows need 5 fields (id node_i node_j area material), found {}",
                fields.len()
            ),
        });
    }
    Ok(Element {
        id: parse_field(fields[0], "element id", line_number)?,
        node_i: parse_field(fields[1], "node_i id", line_number)?,
        node_j: parse_field(fields[2], "node_j id", line_number)?,
        area: parse_field(fields[3], "area", line_number)?,
        material: fields[4].to_owned(),
    })
}

/// Parse a single numeric field, naming it in the error.
fn parse_field<T: std::str::FromStr>(
    field: &str,
    name: &str,
    line_number: usize,
) -> Result<T, ModelError> {
    field.parse().map_err(|_| ModelError::InvalidInput {
        line: line_number,
        reason: format!("could not parse {name} from {field:?}"),
    })
}

/// Parse a 0/1 restraint flag; any non-zero integer counts as restrained.
fn parse_flag(field: &str, name: &str, line_number: usize) -> Result<bool, ModelError> {
    let value: i32 = parse_field(field, name, line_number)?;
    Ok(value != 0)
}
