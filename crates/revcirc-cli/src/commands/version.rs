//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - reversible logic circuit evaluation",
        style("Revcirc").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  revcirc-ir   Gates, circuits and evaluation");
    println!("  revcirc-cli  Command-line interface");
    println!();
    println!("Gates: toffoli, cnot, not, fredkin");
    println!("License: {}", style("Apache-2.0").dim());
}
