//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use revcirc_ir::Circuit;

/// Document formats a circuit can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a circuit document. Gates are placed, so line bounds are checked.
pub fn parse_circuit(source: &str, format: DocumentFormat) -> Result<Circuit> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))
        }
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))
        }
    }
}

/// Render a circuit document.
pub fn render_circuit(circuit: &Circuit, format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            serde_json::to_string_pretty(circuit).context("Failed to render circuit as JSON")
        }
        DocumentFormat::Yaml => {
            serde_yaml_ng::to_string(circuit).context("Failed to render circuit as YAML")
        }
    }
}

/// Load a circuit from a JSON or YAML file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let circuit = parse_circuit(&source, DocumentFormat::from_path(path_obj))
        .with_context(|| format!("Invalid circuit document: {path}"))?;

    debug!(
        "Loaded {path}: {} lines, {} gates",
        circuit.lines(),
        circuit.len()
    );
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_CIRCUIT_JSON: &str = r#"{"lines": 2, "gates": [{"type": "not", "target": 1}]}"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("c.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("c.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("c.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("c")), DocumentFormat::Json);
    }

    #[test]
    fn test_load_circuit_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not.json");
        fs::write(&path, NOT_CIRCUIT_JSON).unwrap();

        let circuit = load_circuit(path.to_str().unwrap()).unwrap();
        assert_eq!(circuit.lines(), 2);
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_circuit(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_rendered_yaml_loads_back() {
        let circuit = parse_circuit(NOT_CIRCUIT_JSON, DocumentFormat::Json).unwrap();
        let yaml = render_circuit(&circuit, DocumentFormat::Yaml).unwrap();
        assert_eq!(parse_circuit(&yaml, DocumentFormat::Yaml).unwrap(), circuit);
    }
}
