use std::env;
use std::error::Error;
use std::fs;

use truss2d::{analyze, parse_truss, render_report, MaterialLibrary};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let input_path = args
        .next()
        .ok_or("usage: truss2d <input-file> [results.json]")?;
    let output_path = args.next();

    // Load the model snapshot from the plain-text input format. The built-in
    // material library provides the ST-52, ST-32 and Iron steels.
    let text = fs::read_to_string(&input_path)?;
    let model = parse_truss(&text, MaterialLibrary::with_defaults())?;

    // Run the full pipeline; structural problems (missing supports, singular
    // systems) surface here with their remediation text.
    let results = analyze(&model)?;
    print!("{}", render_report(&results));

    // Optionally persist the result record for downstream consumers.
    if let Some(path) = output_path {
        fs::write(&path, serde_json::to_string_pretty(&results)?)?;
        println!("\nResults written to {path}");
    }

    Ok(())
}
