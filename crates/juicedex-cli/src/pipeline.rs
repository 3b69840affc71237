//! Shared command setup: config, site registry, and curation tables are all
//! loaded up front, then a snapshot is folded into merged products.

use std::collections::HashMap;
use std::path::Path;

use juicedex_core::{AppConfig, MergeOutput, SitesFile};
use juicedex_merge::RawSnapshot;
use juicedex_normalize::{Normalizer, NormalizerTables};

/// Everything a run needs besides the snapshot itself.
pub(crate) struct Pipeline {
    pub(crate) site_order: Vec<String>,
    pub(crate) normalizer: Normalizer,
    pub(crate) views: HashMap<String, u64>,
    pub(crate) image_overrides: HashMap<String, String>,
}

impl Pipeline {
    /// Assemble the pipeline from the paths in `config`.
    ///
    /// The sites file is required; the alias, image-override, and view
    /// tables are optional and fall back to empty when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the sites file is missing or invalid, or if an
    /// optional table file exists but cannot be read or parsed.
    pub(crate) fn load(config: &AppConfig) -> anyhow::Result<Self> {
        let sites: SitesFile = juicedex_core::load_sites(&config.sites_path)?;
        let aliases = juicedex_core::load_raw_aliases(&config.aliases_path)?;
        let image_overrides = juicedex_core::load_image_overrides(&config.image_overrides_path)?;
        let views = juicedex_core::load_view_counts(&config.views_path)?;

        let normalizer = Normalizer::new(NormalizerTables::builtin().with_raw_aliases(aliases));

        Ok(Pipeline {
            site_order: sites.site_ids(),
            normalizer,
            views,
            image_overrides,
        })
    }

    /// Fold a snapshot into merged products.
    pub(crate) fn merge(&self, snapshot: &RawSnapshot) -> MergeOutput {
        juicedex_merge::merge_snapshot(
            snapshot,
            &self.site_order,
            &self.normalizer,
            &self.views,
            &self.image_overrides,
        )
    }

    /// Raw upstream names in site order, for the name audits.
    pub(crate) fn raw_names(&self, snapshot: &RawSnapshot) -> Vec<String> {
        let mut names = Vec::new();
        for site_id in &self.site_order {
            if let Some(items) = snapshot.get(site_id) {
                names.extend(items.values().map(|item| item.name.clone()));
            }
        }
        names
    }
}

/// Read a snapshot file, degrading to an empty snapshot on failure.
///
/// An unreachable or unparsable snapshot must not fail the run: downstream
/// the last published output stays the freshest data available, so the run
/// warns, produces empty output, and exits cleanly.
pub(crate) fn load_snapshot_or_empty(path: &Path) -> RawSnapshot {
    match juicedex_merge::load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "snapshot unavailable, producing empty output");
            RawSnapshot::new()
        }
    }
}
