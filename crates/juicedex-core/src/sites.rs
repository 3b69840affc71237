use std::collections::HashSet;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One retailer in the fixed registry the pipeline aggregates over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Stable internal identifier, e.g. `"juice24"`. Used as the price-map
    /// key in merged output.
    pub id: String,
    /// Customer-facing shop name, e.g. `"액상24"`.
    pub name: String,
    /// Keyword-search URL template; the query is appended percent-encoded.
    pub search_url: Option<String>,
    pub notes: Option<String>,
}

impl SiteConfig {
    /// Synthesize a product link for listings the scraper captured without
    /// one, by pointing at the site's keyword search for the display name.
    #[must_use]
    pub fn search_link(&self, display_name: &str) -> Option<String> {
        let base = self.search_url.as_ref()?;
        let query = utf8_percent_encode(display_name, NON_ALPHANUMERIC);
        Some(format!("{base}{query}"))
    }
}

#[derive(Debug, Deserialize)]
pub struct SitesFile {
    pub sites: Vec<SiteConfig>,
}

impl SitesFile {
    /// Site ids in registry order. Merge runs process sites in this order so
    /// output is deterministic across builds.
    #[must_use]
    pub fn site_ids(&self) -> Vec<String> {
        self.sites.iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, site_id: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id == site_id)
    }
}

/// Load and validate the site registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_sites(path: &Path) -> Result<SitesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SitesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sites_file: SitesFile = serde_yaml::from_str(&content)?;

    validate_sites(&sites_file)?;

    Ok(sites_file)
}

fn validate_sites(sites_file: &SitesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for site in &sites_file.sites {
        if site.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site id must be non-empty".to_string(),
            ));
        }

        if site.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "site '{}' must have a non-empty display name",
                site.id
            )));
        }

        if !seen_ids.insert(site.id.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate site id: '{}'",
                site.id
            )));
        }

        if !seen_names.insert(site.name.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate site name: '{}'",
                site.name
            )));
        }
    }

    Ok(())
}
