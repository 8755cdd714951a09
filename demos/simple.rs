use truss2d::{analyze, MaterialLibrary, Restraints, TrussModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut model = TrussModel::new(MaterialLibrary::with_defaults());

    // A single horizontal bar: pinned on the left, guided on the right.
    let left = model.add_node(0.0, 0.0, Restraints::pinned());
    let right = model.add_node(1.0, 0.0, Restraints::new(false, true));
    model.add_element(left, right, 0.01, "ST-52")?;
    model.apply_load(right, 1_000.0, 0.0)?;

    let results = analyze(&model)?;

    let tip = &results.displacements[1];
    println!("ux = {:.3e} m", tip.ux);

    Ok(())
}
