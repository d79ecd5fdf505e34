//! One-shot dataset export.
//!
//! Serializes the whole store to a file so the demo data can be inspected or
//! diffed outside the dashboard. There is no matching import; state stays
//! process-lifetime.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::store::EntityStore;

/// Writes the full dataset to `path` as pretty-printed JSON.
pub fn export_json(store: &EntityStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store).context("failed to serialize the dataset")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the full dataset to `path` as YAML.
pub fn export_yaml(store: &EntityStore, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(store).context("failed to serialize the dataset")?;
    fs::write(path, yaml).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
