//! Sliding-window duplicate candidate detection.
//!
//! Products are sorted by display name so near-duplicates land close
//! together, then each product is compared only against its window
//! neighbors. Two listings sold on a common site are never flagged: a site
//! does not list the same product twice, so same-site co-occurrence means
//! they are genuinely different products, not spelling variants.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use strsim::normalized_levenshtein;

use juicedex_core::MergedProduct;

use crate::AuditConfig;

/// One suggested merge: alias `source` into `target`.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateCandidate {
    /// Display name suggested for aliasing away.
    pub source: String,
    /// Display name suggested as the canonical target.
    pub target: String,
    /// Similarity ratio in `(min_ratio, 1)`.
    pub ratio: f64,
}

/// Scan for identities the key derivation likely failed to unify.
///
/// Pairs must have disjoint selling-site sets and token sets in a
/// subset/superset relation, and must clear the similarity threshold.
/// Results are deduplicated symmetrically and ranked by ratio descending.
#[must_use]
pub fn find_duplicate_candidates(
    products: &BTreeMap<String, MergedProduct>,
    config: &AuditConfig,
) -> Vec<DuplicateCandidate> {
    let mut items: Vec<&MergedProduct> = products.values().collect();
    items.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    let n = items.len();

    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
    let mut candidates = Vec::new();

    for i in 0..n {
        for j in 1..=config.window {
            if i + j >= n {
                break;
            }
            let a = items[i];
            let b = items[i + j];
            if a.display_name == b.display_name {
                continue;
            }

            if a.prices.keys().any(|site| b.prices.contains_key(site)) {
                continue;
            }

            let tokens_a = tokenize(&a.display_name);
            let tokens_b = tokenize(&b.display_name);
            if !(tokens_a.is_subset(&tokens_b) || tokens_b.is_subset(&tokens_a)) {
                continue;
            }

            let ratio = normalized_levenshtein(&a.display_name, &b.display_name);
            if ratio <= config.min_ratio {
                continue;
            }

            let (source, target) = if merge_target_score(b) >= merge_target_score(a) {
                (a, b)
            } else {
                (b, a)
            };

            let pair_key = ordered_pair(&a.display_name, &b.display_name);
            if seen_pairs.insert(pair_key) {
                candidates.push(DuplicateCandidate {
                    source: source.display_name.clone(),
                    target: target.display_name.clone(),
                    ratio,
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    tracing::info!(candidates = candidates.len(), "duplicate scan complete");
    candidates
}

/// Which side of a pair should survive a merge: image presence dominates,
/// then site coverage, then name length as a weak tiebreak.
fn merge_target_score(product: &MergedProduct) -> f64 {
    let image = if product.image.is_some() { 1.0 } else { 0.0 };
    let sites = product.prices.len() as f64;
    let name_len = product.display_name.chars().count() as f64;
    image * 100.0 + sites * 10.0 + name_len * 0.1
}

/// Lowercased bag of words with bracket characters treated as separators.
fn tokenize(name: &str) -> HashSet<String> {
    name.to_lowercase()
        .replace(['(', ')', '[', ']'], " ")
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

fn ordered_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
#[path = "duplicates_test.rs"]
mod tests;
