//! Canonical identity derivation from raw product names.
//!
//! The pipeline is order-sensitive: aliasing before lowercasing, unit-aware
//! cleaning before bare-number cleaning, compound folding before
//! tokenization, and sorting before key assembly. Each step feeds the next;
//! see [`Normalizer::normalize`].

use std::collections::HashSet;

use regex::Regex;

use juicedex_core::{EventSuffix, NormalizedIdentity};

use crate::classify::classify_category;
use crate::clean::CleanPatterns;
use crate::tables::NormalizerTables;

/// Derives a [`NormalizedIdentity`] per raw name. Construction compiles all
/// patterns once; `normalize` is then a pure function of its input and the
/// table state, safe to call from parallel workers.
pub struct Normalizer {
    tables: NormalizerTables,
    patterns: CleanPatterns,
    flex_variant: Regex,
    flex_variant_kr: Regex,
    volume: Regex,
    bracket: Regex,
}

impl Normalizer {
    #[must_use]
    pub fn new(tables: NormalizerTables) -> Self {
        Normalizer {
            tables,
            patterns: CleanPatterns::new(),
            flex_variant: Regex::new(r"(?i)flex\s*x").expect("valid flex-variant regex"),
            flex_variant_kr: Regex::new(r"(?i)플렉스\s*x").expect("valid flex-variant regex"),
            volume: Regex::new(r"(?i)(\d+)\s*ml").expect("valid volume regex"),
            bracket: Regex::new(r"[\[\(](.*?)[\]\)]").expect("valid bracket regex"),
        }
    }

    #[must_use]
    pub fn tables(&self) -> &NormalizerTables {
        &self.tables
    }

    /// Reduce a raw scraped title to its canonical identity.
    ///
    /// Never fails: absent patterns simply yield defaults (`30ml` volume, no
    /// event suffix, 과일/멘솔 category). Inputs that normalize down to
    /// nothing keep their raw display name but still produce a (possibly
    /// colliding) near-empty match key.
    #[must_use]
    pub fn normalize(&self, raw_name: &str) -> NormalizedIdentity {
        // Whole-name aliases are curated overrides; they replace the input
        // before anything else sees it.
        let source = self
            .tables
            .raw_aliases
            .get(raw_name)
            .map_or(raw_name, String::as_str);

        let mut temp = source.to_lowercase();

        let event_suffix = extract_event_suffix(&temp);
        // All three literals are stripped regardless of which one matched,
        // so stray occurrences of the others cannot leak into tokens.
        temp = temp.replace("1+1", "").replace("2+1", "").replace("3+1", "");

        temp = self.patterns.clean(&temp);

        temp = self.flex_variant.replace_all(&temp, "flex").into_owned();
        temp = self.flex_variant_kr.replace_all(&temp, "플렉스").into_owned();
        temp = fold_compounds(&temp);

        let mut volume = "30ml".to_string();
        if let Some(caps) = self.volume.captures(&temp) {
            volume = format!("{}ml", &caps[1]);
            temp = self.volume.replace_all(&temp, " ").into_owned();
        }

        let mut extracted_brand = String::new();
        if let Some(caps) = self.bracket.captures(&temp) {
            extracted_brand = caps[1].trim().to_string();
            temp = self.bracket.replace_all(&temp, " ").into_owned();
        }

        for junk in &self.tables.junk_words {
            temp = temp.replace(junk.as_str(), " ");
        }
        if !extracted_brand.is_empty() {
            for junk in &self.tables.junk_words {
                extracted_brand = extracted_brand.replace(junk.as_str(), "");
            }
        }

        // Bracket-derived brand tokens lead the body tokens.
        let tokens = extracted_brand
            .split_whitespace()
            .chain(temp.split_whitespace());

        let mut seen = HashSet::new();
        let mut final_tokens: Vec<String> = Vec::new();
        for token in tokens {
            let cleaned: String = token.chars().filter(|&c| is_token_char(c)).collect();
            if cleaned.is_empty() {
                continue;
            }
            let mapped = self
                .tables
                .word_map
                .get(&cleaned)
                .cloned()
                .unwrap_or(cleaned);
            // A mapped value may expand into several sub-tokens; dedup is
            // keyed on the final sub-tokens, first seen survives.
            for sub in mapped.split_whitespace() {
                if self.tables.is_junk(sub) || sub == "0" {
                    continue;
                }
                if seen.insert(sub.to_string()) {
                    final_tokens.push(sub.to_string());
                }
            }
        }

        // Sorting is what makes word order irrelevant to matching.
        final_tokens.sort();

        let mut clean_name = final_tokens.join(" ");
        clean_name = expand_compounds(&clean_name);

        let category = classify_category(&clean_name, &self.tables);
        clean_name = self.promote_brand(clean_name);

        let match_key = format!(
            "{}{}{}",
            clean_name.replace(' ', ""),
            volume,
            event_suffix.label()
        );

        let display_name = if clean_name.chars().count() < 2 {
            // Normalization destroyed essentially everything; show the raw
            // name rather than an empty card. The near-empty key is kept as
            // an accepted degenerate-merge risk.
            tracing::debug!(raw = source, "near-empty normalization, keeping raw display name");
            source.to_string()
        } else if event_suffix.is_none() {
            format!("{clean_name} {volume}")
        } else {
            format!("{clean_name} {volume} {}", event_suffix.label())
        };

        NormalizedIdentity {
            original: raw_name.to_string(),
            category,
            volume,
            event_suffix,
            match_key,
            display_name,
        }
    }

    /// Move the first priority brand found as a non-prefix substring to the
    /// front of the name. Only one brand is ever promoted; the scan stops at
    /// the first hit even if later brands also appear.
    fn promote_brand(&self, clean_name: String) -> String {
        for brand in &self.tables.priority_brands {
            if clean_name.contains(brand.as_str()) {
                if clean_name.starts_with(brand.as_str()) {
                    return clean_name;
                }
                let remainder = clean_name.replace(brand.as_str(), "");
                let remainder = remainder.split_whitespace().collect::<Vec<_>>().join(" ");
                if remainder.is_empty() {
                    return brand.clone();
                }
                return format!("{brand} {remainder}");
            }
        }
        clean_name
    }
}

/// First match in `1+1 > 2+1 > 3+1` priority order wins; mutually exclusive.
fn extract_event_suffix(lowered: &str) -> EventSuffix {
    if lowered.contains("1+1") {
        EventSuffix::OnePlusOne
    } else if lowered.contains("2+1") {
        EventSuffix::TwoPlusOne
    } else if lowered.contains("3+1") {
        EventSuffix::ThreePlusOne
    } else {
        EventSuffix::None
    }
}

/// Join the space-insensitive variants of known multi-word idioms into
/// single tokens so their fragments cannot scatter when tokens are sorted.
/// The double-prefixed form folds first so its tail is not half-consumed.
fn fold_compounds(text: &str) -> String {
    text.replace("더블 슬로우 블로우", "더블슬로우블로우")
        .replace("더블 블로우 슬로우", "더블슬로우블로우")
        .replace("슬로우 블로우", "슬로우블로우")
        .replace("블로우 슬로우", "슬로우블로우")
}

/// Inverse of [`fold_compounds`] for display only; match keys keep the
/// joined form (spaces are stripped from keys anyway).
fn expand_compounds(text: &str) -> String {
    text.replace("더블슬로우블로우", "더블 슬로우 블로우")
        .replace("슬로우블로우", "슬로우 블로우")
}

/// Token characters: lowercase ASCII alphanumerics and Hangul syllables.
/// Everything else (emoji, punctuation, other scripts) is stripped.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('가'..='힣').contains(&c)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
