//! Name hygiene scans: merged display names that look broken, and raw
//! upstream names carrying garbage after the volume marker.

use std::collections::BTreeMap;

use serde::Serialize;

use juicedex_core::MergedProduct;
use juicedex_normalize::trim_after_volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspiciousReason {
    /// Fewer than 2 characters after trimming.
    TooShort,
    /// Consists only of digits (ignoring spaces).
    DigitsOnly,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuspiciousName {
    pub display_name: String,
    pub reason: SuspiciousReason,
}

/// Flag merged products whose display names are too short or purely
/// numeric — usually the residue of a name that normalization gutted.
#[must_use]
pub fn find_suspicious_names(products: &BTreeMap<String, MergedProduct>) -> Vec<SuspiciousName> {
    let mut flagged = Vec::new();
    for product in products.values() {
        let name = product.display_name.as_str();
        if name.trim().chars().count() < 2 {
            flagged.push(SuspiciousName {
                display_name: name.to_string(),
                reason: SuspiciousReason::TooShort,
            });
            continue;
        }

        let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        if !compact.is_empty() && compact.chars().all(|c| c.is_ascii_digit()) {
            flagged.push(SuspiciousName {
                display_name: name.to_string(),
                reason: SuspiciousReason::DigitsOnly,
            });
        }
    }
    flagged
}

#[derive(Debug, Clone, Serialize)]
pub struct UntrimmedName {
    pub raw_name: String,
    /// The name with everything after the volume marker dropped.
    pub suggested: String,
}

/// Flag raw upstream names with junk glued after the `<digits>ml` volume,
/// with the suggested cleanup. These fixes belong in the source store, not
/// in the pipeline, so they are reported rather than applied.
#[must_use]
pub fn find_untrimmed_names<'a, I>(raw_names: I) -> Vec<UntrimmedName>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut flagged = Vec::new();
    for raw in raw_names {
        let suggested = trim_after_volume(raw);
        if suggested != raw {
            flagged.push(UntrimmedName {
                raw_name: raw.to_string(),
                suggested,
            });
        }
    }
    flagged
}
