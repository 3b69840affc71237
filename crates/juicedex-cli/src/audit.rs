//! The `audit` command: run the merge, then report data-quality findings
//! for manual alias curation.

use std::path::Path;

use serde::Serialize;

use juicedex_audit::{AuditConfig, DuplicateCandidate, SuspiciousName, UntrimmedName};
use juicedex_core::AppConfig;

use crate::pipeline::{load_snapshot_or_empty, Pipeline};

/// Everything the audit pass found, in one reviewable document. Nothing in
/// here is applied automatically; fixes go into the alias table or the
/// source store by hand.
#[derive(Debug, Serialize)]
pub(crate) struct AuditReport {
    pub(crate) product_count: usize,
    pub(crate) duplicate_candidates: Vec<DuplicateCandidate>,
    pub(crate) suspicious_names: Vec<SuspiciousName>,
    pub(crate) untrimmed_names: Vec<UntrimmedName>,
}

/// Merge the snapshot, run the duplicate and name audits, and write the
/// combined report as JSON.
///
/// # Errors
///
/// Returns an error if the configuration or site registry cannot be loaded,
/// or the report cannot be written. An unavailable snapshot is not an
/// error; it produces an empty report.
pub(crate) fn run_audit(config: &AppConfig, snapshot: &Path, out: &Path) -> anyhow::Result<()> {
    let pipeline = Pipeline::load(config)?;
    let raw = load_snapshot_or_empty(snapshot);
    let output = pipeline.merge(&raw);

    let audit_config = AuditConfig {
        window: config.audit_window,
        min_ratio: config.audit_min_ratio,
    };
    let duplicate_candidates =
        juicedex_audit::find_duplicate_candidates(&output.products, &audit_config);
    let suspicious_names = juicedex_audit::find_suspicious_names(&output.products);
    let raw_names = pipeline.raw_names(&raw);
    let untrimmed_names =
        juicedex_audit::find_untrimmed_names(raw_names.iter().map(String::as_str));

    let report = AuditReport {
        product_count: output.products.len(),
        duplicate_candidates,
        suspicious_names,
        untrimmed_names,
    };

    tracing::info!(
        duplicates = report.duplicate_candidates.len(),
        suspicious = report.suspicious_names.len(),
        untrimmed = report.untrimmed_names.len(),
        "writing audit report"
    );
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(out, json)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", out.display()))?;

    println!(
        "audited {} products: {} duplicate candidates, {} suspicious names, {} untrimmed names",
        report.product_count,
        report.duplicate_candidates.len(),
        report.suspicious_names.len(),
        report.untrimmed_names.len()
    );
    Ok(())
}
