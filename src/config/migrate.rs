//! Repair configuration files written by older versions: add every key the
//! current `Config` knows about but the file lacks, with its default value.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Keys and default values of the current configuration schema.
fn expected_fields() -> Vec<(&'static str, Value)> {
    let defaults = Config::default();
    vec![
        ("database", Value::String(defaults.database)),
        ("employee", Value::Null),
        ("separator_char", Value::String(defaults.separator_char)),
    ]
}

/// Return the expected keys missing from `map`.
pub fn missing_fields(map: &Mapping) -> Vec<&'static str> {
    expected_fields()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| k)
        .collect()
}

/// Add missing keys to the YAML file at `path`.
/// - file absent → no-op
/// - nothing missing → file left untouched
///
/// Returns the keys that were added.
pub fn repair_config_file(path: &Path) -> io::Result<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse YAML {:?}: {}", path, e),
        )
    })?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Configuration {:?} is not a YAML mapping", path),
        ));
    };

    let missing = missing_fields(map);
    if missing.is_empty() {
        return Ok(missing);
    }

    for (key, default) in expected_fields() {
        if missing.contains(&key) {
            map.insert(Value::String(key.to_string()), default);
        }
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
        io::Error::other(format!("Failed to serialize YAML for {:?}: {}", path, e))
    })?;
    fs::write(path, serialized)?;

    Ok(missing)
}
