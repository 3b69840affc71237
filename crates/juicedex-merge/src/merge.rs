//! The merge fold: raw per-site listings grouped by match key into
//! [`MergedProduct`] records, with deterministic price and image conflict
//! resolution.

use std::collections::HashMap;

use juicedex_core::{MergeOutput, MergedProduct, SitePrice};
use juicedex_normalize::Normalizer;

use crate::snapshot::RawSnapshot;

/// Fold every usable listing in `snapshot` into merged products.
///
/// Sites are processed in `site_order`; snapshot nodes not named there are
/// ignored (the store mixes other data into the same root). Per item:
/// listings without a name or a positive price are skipped with a warning,
/// the per-`(match_key, site)` price keeps the minimum seen, the first
/// non-empty image wins, and `views` are read once when a key is first
/// created. The manual `image_overrides` table is applied as a post-pass
/// and replaces images unconditionally for keys present in the output.
///
/// An empty snapshot produces an empty output; no error conditions exist
/// inside the fold itself.
#[must_use]
pub fn merge_snapshot(
    snapshot: &RawSnapshot,
    site_order: &[String],
    normalizer: &Normalizer,
    views: &HashMap<String, u64>,
    image_overrides: &HashMap<String, String>,
) -> MergeOutput {
    let mut output = MergeOutput {
        sites: site_order.to_vec(),
        products: std::collections::BTreeMap::new(),
    };

    let mut skipped = 0usize;
    for site_id in site_order {
        let Some(site_items) = snapshot.get(site_id) else {
            tracing::warn!(site = %site_id, "no snapshot node for site");
            continue;
        };

        for (item_key, item) in site_items {
            let Some(listing) = item.listing(site_id) else {
                tracing::warn!(
                    site = %site_id,
                    item = %item_key,
                    price = item.price,
                    "skipping listing without a name or positive price"
                );
                skipped += 1;
                continue;
            };

            let identity = normalizer.normalize(&listing.raw_name);

            let product = output
                .products
                .entry(identity.match_key.clone())
                .or_insert_with(|| MergedProduct {
                    display_name: identity.display_name.clone(),
                    category: identity.category,
                    volume: identity.volume.clone(),
                    image: None,
                    prices: std::collections::BTreeMap::new(),
                    views: views.get(&identity.match_key).copied().unwrap_or(0),
                });

            let lower_than_existing = product
                .prices
                .get(site_id)
                .is_none_or(|existing| listing.price < existing.price);
            if lower_than_existing {
                product.prices.insert(
                    site_id.clone(),
                    SitePrice {
                        price: listing.price,
                        link: listing.link_url,
                    },
                );
            }

            if product.image.is_none() {
                product.image = listing.image_url;
            }
        }
    }

    for (match_key, image_url) in image_overrides {
        if let Some(product) = output.products.get_mut(match_key) {
            product.image = Some(image_url.clone());
        }
    }

    tracing::info!(
        products = output.products.len(),
        skipped,
        "merge fold complete"
    );
    output
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
