use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flavor category of a merged product, displayed with the Korean storefront
/// labels the comparison page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// 연초 — tobacco-style flavors.
    #[serde(rename = "연초")]
    Tobacco,
    /// 디저트 — dessert flavors.
    #[serde(rename = "디저트")]
    Dessert,
    /// 과일/멘솔 — the default bucket for everything else.
    #[serde(rename = "과일/멘솔")]
    FruitMenthol,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Tobacco => write!(f, "연초"),
            Category::Dessert => write!(f, "디저트"),
            Category::FruitMenthol => write!(f, "과일/멘솔"),
        }
    }
}

/// Bundle-event suffix extracted from a raw name. At most one is recorded
/// per product; `1+1` outranks `2+1` outranks `3+1` when several literals
/// appear in the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSuffix {
    #[default]
    None,
    #[serde(rename = "(1+1)")]
    OnePlusOne,
    #[serde(rename = "(2+1)")]
    TwoPlusOne,
    #[serde(rename = "(3+1)")]
    ThreePlusOne,
}

impl EventSuffix {
    /// The trimmed form contributed to match keys, e.g. `"(1+1)"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EventSuffix::None => "",
            EventSuffix::OnePlusOne => "(1+1)",
            EventSuffix::TwoPlusOne => "(2+1)",
            EventSuffix::ThreePlusOne => "(3+1)",
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == EventSuffix::None
    }
}

/// A single scraped listing, exactly as the persistence layer hands it over.
/// Ephemeral: read once and folded into a [`MergedProduct`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub raw_name: String,
    /// Integer won amount. Values `<= 0` are invalid and skipped at merge.
    pub price: i64,
    /// May be protocol-relative (`//…`); normalized to `https://` at merge.
    pub image_url: Option<String>,
    /// Absent links are synthesized at render time from the site's search
    /// URL template.
    pub link_url: Option<String>,
    pub site_id: String,
}

/// Canonical identity derived from one raw name. Recomputed fresh on every
/// build; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIdentity {
    /// The raw name this identity was derived from.
    pub original: String,
    pub category: Category,
    /// Canonical volume string, e.g. `"30ml"`.
    pub volume: String,
    pub event_suffix: EventSuffix,
    /// The merge identity: sorted canonical tokens with no internal spaces,
    /// plus volume and event suffix.
    pub match_key: String,
    /// Human-readable canonical name (brand-promoted) with volume and suffix.
    pub display_name: String,
}

/// Best price record for one site under one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePrice {
    pub price: i64,
    pub link: Option<String>,
}

/// One comparable product, folded across every site that lists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedProduct {
    pub display_name: String,
    pub category: Category,
    pub volume: String,
    /// First non-empty image seen, unless overridden by the manual table.
    pub image: Option<String>,
    /// At most one entry per site: the minimum price observed this run.
    pub prices: BTreeMap<String, SitePrice>,
    /// Popularity counter, read once from the side channel at merge time.
    pub views: u64,
}

impl MergedProduct {
    /// Number of sites currently selling this product.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.prices.len()
    }

    /// Lowest price across all sites, if any site has been folded in.
    #[must_use]
    pub fn min_price(&self) -> Option<i64> {
        self.prices.values().map(|p| p.price).min()
    }
}

/// Everything the rendering layer needs: merged products keyed by match key,
/// plus the site identifiers observed this run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeOutput {
    pub sites: Vec<String>,
    pub products: BTreeMap<String, MergedProduct>,
}

impl MergeOutput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(prices: Vec<(&str, i64)>) -> MergedProduct {
        MergedProduct {
            display_name: "네스티 포도 30ml".to_string(),
            category: Category::FruitMenthol,
            volume: "30ml".to_string(),
            image: None,
            prices: prices
                .into_iter()
                .map(|(site, price)| (site.to_string(), SitePrice { price, link: None }))
                .collect(),
            views: 0,
        }
    }

    #[test]
    fn category_display_labels() {
        assert_eq!(Category::Tobacco.to_string(), "연초");
        assert_eq!(Category::Dessert.to_string(), "디저트");
        assert_eq!(Category::FruitMenthol.to_string(), "과일/멘솔");
    }

    #[test]
    fn category_serializes_as_korean_label() {
        let json = serde_json::to_string(&Category::Tobacco).expect("serialization failed");
        assert_eq!(json, "\"연초\"");
    }

    #[test]
    fn event_suffix_labels() {
        assert_eq!(EventSuffix::None.label(), "");
        assert_eq!(EventSuffix::OnePlusOne.label(), "(1+1)");
        assert_eq!(EventSuffix::TwoPlusOne.label(), "(2+1)");
        assert_eq!(EventSuffix::ThreePlusOne.label(), "(3+1)");
    }

    #[test]
    fn site_count_matches_price_entries() {
        let product = make_product(vec![("modu", 9000), ("juice24", 8500)]);
        assert_eq!(product.site_count(), 2);
    }

    #[test]
    fn min_price_none_when_no_prices() {
        let product = make_product(vec![]);
        assert!(product.min_price().is_none());
    }

    #[test]
    fn min_price_is_global_minimum() {
        let product = make_product(vec![("modu", 9000), ("juice24", 8500), ("tjf", 12000)]);
        assert_eq!(product.min_price(), Some(8500));
    }

    #[test]
    fn merge_output_default_is_empty() {
        assert!(MergeOutput::default().is_empty());
    }

    #[test]
    fn serde_roundtrip_merged_product() {
        let product = make_product(vec![("modu", 9000)]);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: MergedProduct = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.display_name, product.display_name);
        assert_eq!(decoded.prices["modu"].price, 9000);
    }
}
