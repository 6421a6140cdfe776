// Loading variable sets from YAML or JSON documents

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::template::{Value, Variables};

/// Parse a YAML mapping of variable names to values
pub fn variables_from_yaml(source: &str) -> Result<Variables> {
    if source.trim().is_empty() {
        return Ok(Variables::new());
    }
    let value: Value = serde_yaml::from_str(source).context("Invalid YAML variables document")?;
    into_variables(value)
}

/// Parse a JSON object of variable names to values
pub fn variables_from_json(source: &str) -> Result<Variables> {
    let value: Value = serde_json::from_str(source).context("Invalid JSON variables document")?;
    into_variables(value)
}

/// Load variables from a file. `.json` files are read as JSON, everything else as YAML.
pub fn load_variables(path: impl AsRef<Path>) -> Result<Variables> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read variables file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let variables = if is_json {
        variables_from_json(&source)
    } else {
        variables_from_yaml(&source)
    }
    .with_context(|| format!("Failed to load variables from {}", path.display()))?;

    log::debug!("loaded {} variables from {}", variables.len(), path.display());
    Ok(variables)
}

fn into_variables(value: Value) -> Result<Variables> {
    match value {
        Value::Assoc(pairs) => Ok(pairs.into_iter().collect()),
        // An empty document means no variables
        Value::Null => Ok(Variables::new()),
        other => bail!(
            "Variables document must be a mapping, found {}",
            other.type_name()
        ),
    }
}
