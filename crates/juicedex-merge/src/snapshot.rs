//! Serde model of the persistence-layer dump the scrapers feed: one node
//! per site, one record per scraped listing. The scrapers disagree on the
//! image field name (`img`, `image`, or `thumb` depending on the storefront
//! engine), so all three are accepted with a fixed resolution priority.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use juicedex_core::RawListing;

use crate::SnapshotError;

/// `site_id -> item_key -> raw item`. `BTreeMap` keeps per-site iteration
/// order stable so merge output is deterministic across runs.
pub type RawSnapshot = BTreeMap<String, BTreeMap<String, RawItem>>;

/// One scraped listing as stored, before any validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RawItem {
    /// Resolve the image URL: `img` wins over `image` wins over `thumb`;
    /// empty strings count as absent. Protocol-relative URLs are upgraded
    /// to `https:`.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        let picked = [&self.img, &self.image, &self.thumb]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())?;
        if let Some(rest) = picked.strip_prefix("//") {
            Some(format!("https://{rest}"))
        } else {
            Some(picked.clone())
        }
    }

    /// A listing is usable when it has a name and a positive price;
    /// everything else is scraper dirt and skipped at merge time.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.price > 0
    }

    /// Convert the stored record into a [`RawListing`] for the merge fold,
    /// resolving the image field and dropping empty links. Returns `None`
    /// for unusable records.
    #[must_use]
    pub fn listing(&self, site_id: &str) -> Option<RawListing> {
        if !self.is_valid() {
            return None;
        }
        Some(RawListing {
            raw_name: self.name.clone(),
            price: self.price,
            image_url: self.image_url(),
            link_url: self.link.clone().filter(|l| !l.is_empty()),
            site_id: site_id.to_string(),
        })
    }
}

/// Load a snapshot dump from disk.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the file cannot be read or parsed. Callers
/// are expected to degrade to an empty merge output rather than abort.
pub fn load_snapshot(path: &Path) -> Result<RawSnapshot, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_priority_img_over_image_over_thumb() {
        let item = RawItem {
            img: Some("https://a.example/img.png".to_string()),
            image: Some("https://a.example/image.png".to_string()),
            thumb: Some("https://a.example/thumb.png".to_string()),
            ..RawItem::default()
        };
        assert_eq!(item.image_url().as_deref(), Some("https://a.example/img.png"));

        let item = RawItem {
            image: Some("https://a.example/image.png".to_string()),
            thumb: Some("https://a.example/thumb.png".to_string()),
            ..RawItem::default()
        };
        assert_eq!(
            item.image_url().as_deref(),
            Some("https://a.example/image.png")
        );
    }

    #[test]
    fn empty_image_fields_fall_through() {
        let item = RawItem {
            img: Some(String::new()),
            thumb: Some("https://a.example/thumb.png".to_string()),
            ..RawItem::default()
        };
        assert_eq!(
            item.image_url().as_deref(),
            Some("https://a.example/thumb.png")
        );
    }

    #[test]
    fn protocol_relative_images_become_https() {
        let item = RawItem {
            img: Some("//cdn.example/p.png".to_string()),
            ..RawItem::default()
        };
        assert_eq!(item.image_url().as_deref(), Some("https://cdn.example/p.png"));
    }

    #[test]
    fn no_image_fields_yield_none() {
        assert!(RawItem::default().image_url().is_none());
    }

    #[test]
    fn validity_requires_name_and_positive_price() {
        let valid = RawItem {
            name: "포도 30ml".to_string(),
            price: 9000,
            ..RawItem::default()
        };
        assert!(valid.is_valid());

        let no_name = RawItem {
            price: 9000,
            ..RawItem::default()
        };
        assert!(!no_name.is_valid());

        let free = RawItem {
            name: "포도 30ml".to_string(),
            price: 0,
            ..RawItem::default()
        };
        assert!(!free.is_valid());

        let negative = RawItem {
            name: "포도 30ml".to_string(),
            price: -100,
            ..RawItem::default()
        };
        assert!(!negative.is_valid());
    }

    #[test]
    fn listing_conversion_resolves_image_and_link() {
        let item = RawItem {
            name: "포도 30ml".to_string(),
            price: 9000,
            thumb: Some("//cdn.example/p.png".to_string()),
            link: Some(String::new()),
            ..RawItem::default()
        };
        let listing = item.listing("modu").expect("valid item must convert");
        assert_eq!(listing.raw_name, "포도 30ml");
        assert_eq!(listing.price, 9000);
        assert_eq!(listing.image_url.as_deref(), Some("https://cdn.example/p.png"));
        assert!(listing.link_url.is_none());
        assert_eq!(listing.site_id, "modu");
    }

    #[test]
    fn listing_conversion_rejects_invalid_items() {
        let free = RawItem {
            name: "포도 30ml".to_string(),
            price: 0,
            ..RawItem::default()
        };
        assert!(free.listing("modu").is_none());
    }

    #[test]
    fn snapshot_deserializes_site_nodes() {
        let json = r#"{
            "modu": {
                "item-1": {"name": "포도 30ml", "price": 9000, "thumb": "//cdn.example/p.png"}
            },
            "juice24": {
                "item-9": {"name": "포도 30ml", "price": 8500, "link": "https://juice24.kr/p/9"}
            }
        }"#;
        let snapshot: RawSnapshot = serde_json::from_str(json).expect("snapshot must parse");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["modu"]["item-1"].price, 9000);
        assert_eq!(
            snapshot["juice24"]["item-9"].link.as_deref(),
            Some("https://juice24.kr/p/9")
        );
    }

    #[test]
    fn missing_fields_default() {
        let json = r#"{"modu": {"x": {}}}"#;
        let snapshot: RawSnapshot = serde_json::from_str(json).expect("snapshot must parse");
        let item = &snapshot["modu"]["x"];
        assert!(!item.is_valid());
        assert_eq!(item.price, 0);
    }

    #[test]
    fn load_snapshot_missing_file_is_io_error() {
        let result = load_snapshot(Path::new("/nonexistent/juicedex/snapshot.json"));
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }
}
