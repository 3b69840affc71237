pub mod app_config;
pub mod config;
pub mod products;
pub mod sites;
pub mod tables_io;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{
    Category, EventSuffix, MergeOutput, MergedProduct, NormalizedIdentity, RawListing, SitePrice,
};
pub use sites::{load_sites, SiteConfig, SitesFile};
pub use tables_io::{load_image_overrides, load_raw_aliases, load_view_counts};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sites file at {path}: {source}")]
    SitesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sites file: {0}")]
    SitesFileParse(#[from] serde_yaml::Error),

    #[error("failed to read table file at {path}: {source}")]
    TableFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table file at {path}: {source}")]
    TableFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}
