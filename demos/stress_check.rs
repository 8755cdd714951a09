use truss2d::{analyze, render_report, MaterialLibrary, Restraints, TrussModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());

    // Simple triangular frame carrying a downward load at its apex.
    let left = model.add_node(0.0, 0.0, Restraints::pinned());
    let right = model.add_node(4.0, 0.0, Restraints::new(false, true));
    let apex = model.add_node(2.0, 3.0, Restraints::free());

    model.add_element(left, right, 0.002, "ST-32")?;
    model.add_element(left, apex, 0.002, "ST-32")?;
    model.add_element(right, apex, 0.002, "ST-32")?;
    model.apply_load(apex, 0.0, -50_000.0)?;

    let results = analyze(&model)?;

    // The report shows each member's force, stress and SAFE/YIELDED/FAILED
    // verdict against the material strengths.
    print!("{}", render_report(&results));

    Ok(())
}
