//! The `merge` command: snapshot file in, merged catalog JSON out.

use std::path::Path;

use juicedex_core::AppConfig;

use crate::pipeline::{load_snapshot_or_empty, Pipeline};

/// Merge a raw snapshot into the per-identity catalog and write it as JSON.
///
/// # Errors
///
/// Returns an error if the configuration or site registry cannot be loaded,
/// or the output file cannot be written. An unavailable snapshot is not an
/// error; it produces an empty catalog.
pub(crate) fn run_merge(config: &AppConfig, snapshot: &Path, out: &Path) -> anyhow::Result<()> {
    let pipeline = Pipeline::load(config)?;
    let raw = load_snapshot_or_empty(snapshot);
    let output = pipeline.merge(&raw);

    tracing::info!(
        products = output.products.len(),
        sites = output.sites.len(),
        "writing merged catalog"
    );
    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(out, json)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", out.display()))?;

    println!(
        "merged {} products across {} sites into {}",
        output.products.len(),
        output.sites.len(),
        out.display()
    );
    Ok(())
}
