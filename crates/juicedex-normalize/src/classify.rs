//! Keyword-driven category classification.
//!
//! Substring containment, not whole-word matching: a brand whose name
//! contains a trigger word will classify with it (세븐코리아 hits the 세븐
//! tobacco keyword). That ambiguity is inherited from the curated keyword
//! lists and is surfaced to operators through the audit tooling rather than
//! patched here.

use juicedex_core::Category;

use crate::tables::NormalizerTables;

/// Classify a cleaned name. Tobacco keywords are checked first and
/// short-circuit; dessert second; everything else is 과일/멘솔.
#[must_use]
pub fn classify_category(name: &str, tables: &NormalizerTables) -> Category {
    let lower = name.to_lowercase();
    if tables.tobacco_keywords.iter().any(|k| lower.contains(k.as_str())) {
        return Category::Tobacco;
    }
    if tables.dessert_keywords.iter().any(|k| lower.contains(k.as_str())) {
        return Category::Dessert;
    }
    Category::FruitMenthol
}
