//! Invert command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use super::common::{DocumentFormat, load_circuit, render_circuit};

/// Execute the invert command.
pub fn execute(circuit_path: &str, output: Option<&str>) -> Result<()> {
    let circuit = load_circuit(circuit_path)?;
    let inverse = circuit.inverse();

    match output {
        Some(output_path) => {
            let format = DocumentFormat::from_path(Path::new(output_path));
            let content = render_circuit(&inverse, format)?;
            fs::write(output_path, content)
                .with_context(|| format!("Failed to write file: {output_path}"))?;
            eprintln!(
                "{} Inverse of {} written to {}",
                style("✓").green().bold(),
                circuit_path,
                style(output_path).green()
            );
        }
        None => {
            println!("{}", render_circuit(&inverse, DocumentFormat::Json)?);
        }
    }

    Ok(())
}
