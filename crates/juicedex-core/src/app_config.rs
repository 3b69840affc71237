use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, read once at startup from `JUICEDEX_*`
/// environment variables. Everything has a default except nothing: a build
/// can run entirely from defaults against local files.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Site registry (YAML) with display names and search URL templates.
    pub sites_path: PathBuf,
    /// Curated raw-name alias table (JSON); optional at runtime.
    pub aliases_path: PathBuf,
    /// Manual image override table keyed by match key (JSON); optional.
    pub image_overrides_path: PathBuf,
    /// Per-key view counter snapshot (JSON); optional.
    pub views_path: PathBuf,
    /// Sliding-window size for the duplicate auditor.
    pub audit_window: usize,
    /// Minimum similarity ratio for duplicate candidates.
    pub audit_min_ratio: f64,
}
