//! Table command implementation.

use anyhow::{Context, Result};
use console::style;

use revcirc_ir::{format_bits, from_index, is_identity_permutation};

use super::common::load_circuit;

/// Execute the table command.
pub fn execute(circuit_path: &str) -> Result<()> {
    let circuit = load_circuit(circuit_path)?;
    let lines = circuit.lines();

    let permutation = circuit
        .permutation()
        .context("Cannot enumerate the circuit")?;

    let width = lines.max(5);
    println!(
        "{}  {}",
        style(format!("{:<width$}", "input")).bold(),
        style("output").bold()
    );
    for (input, output) in table_rows(&permutation, lines) {
        println!("{input:<width$}  {output}");
    }

    if is_identity_permutation(&permutation) {
        eprintln!("{} circuit is the identity", style("note:").yellow());
    }

    Ok(())
}

/// Render each permutation entry as an (input, output) pair of bit strings.
fn table_rows(permutation: &[u64], lines: usize) -> Vec<(String, String)> {
    permutation
        .iter()
        .enumerate()
        .map(|(input, &output)| {
            (
                format_bits(&from_index(input as u64, lines)),
                format_bits(&from_index(output, lines)),
            )
        })
        .collect()
}
