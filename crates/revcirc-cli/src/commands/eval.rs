//! Eval command implementation.
//!
//! `revcirc eval --circuit <circuit.json> --input <bits> [--json]`

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use tracing::info;

use revcirc_ir::{Circuit, format_bits, parse_bits};

use super::common::load_circuit;

/// Machine-readable evaluation result.
#[derive(Debug, Serialize)]
struct EvalReport {
    lines: usize,
    gates: usize,
    input: String,
    output: String,
}

/// Execute the eval command.
pub fn execute(circuit_path: &str, input: &str, json: bool) -> Result<()> {
    let circuit = load_circuit(circuit_path)?;
    let report = evaluate_input(&circuit, input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.output);
        eprintln!(
            "{} {} -> {}",
            style("✓").green().bold(),
            style(&report.input).dim(),
            style(&report.output).green()
        );
    }

    Ok(())
}

/// Parse `input` as bits, check it matches the circuit width and evaluate.
fn evaluate_input(circuit: &Circuit, input: &str) -> Result<EvalReport> {
    let bits = parse_bits(input).with_context(|| format!("Invalid input bits: {input}"))?;

    if bits.len() != circuit.lines() {
        anyhow::bail!(
            "Input has {} bits but the circuit has {} lines",
            bits.len(),
            circuit.lines()
        );
    }

    info!(
        "Evaluating {} gates on {} lines",
        circuit.len(),
        circuit.lines()
    );
    let output = circuit
        .evaluate(&bits)
        .context("Circuit evaluation failed")?;

    Ok(EvalReport {
        lines: circuit.lines(),
        gates: circuit.len(),
        input: format_bits(&bits),
        output: format_bits(&output),
    })
}
