//! Folding raw per-site listings into merged per-identity products.

pub mod merge;
pub mod snapshot;

use thiserror::Error;

pub use merge::merge_snapshot;
pub use snapshot::{load_snapshot, RawItem, RawSnapshot};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
