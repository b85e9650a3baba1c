//! Check command implementation.

use anyhow::Result;
use console::style;

use revcirc_ir::GateType;

use super::common::load_circuit;

/// Execute the check command.
pub fn execute(circuit_path: &str) -> Result<()> {
    let circuit = load_circuit(circuit_path)?;

    println!(
        "{} {} is a valid circuit",
        style("✓").green().bold(),
        style(circuit_path).green()
    );
    println!("  Lines: {}", circuit.lines());
    println!("  Gates: {}", circuit.len());

    let counts = circuit.gate_counts();
    let mut types: Vec<GateType> = counts.keys().copied().collect();
    types.sort();
    for gate_type in types {
        println!("    {:<8} {}", gate_type.name(), counts[&gate_type]);
    }

    for (position, gate) in circuit.gates().iter().enumerate() {
        println!("  {position:>4}: {gate}");
    }

    Ok(())
}
