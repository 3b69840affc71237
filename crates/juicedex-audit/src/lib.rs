//! Offline data-quality audits over merged products: near-duplicate
//! identities the automatic key derivation failed to unify, plus name
//! hygiene checks. Everything here produces human-reviewable suggestion
//! lists for manual alias curation — nothing is ever applied automatically.

pub mod duplicates;
pub mod names;

pub use duplicates::{find_duplicate_candidates, DuplicateCandidate};
pub use names::{
    find_suspicious_names, find_untrimmed_names, SuspiciousName, SuspiciousReason, UntrimmedName,
};

/// Tunables for the duplicate scan.
#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    /// Sliding-window width over the name-sorted product list. Bounds the
    /// scan to `O(n * window)` instead of full pairwise comparison.
    pub window: usize,
    /// Similarity ratio a candidate pair must exceed to be reported.
    pub min_ratio: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            window: 50,
            min_ratio: 0.6,
        }
    }
}
