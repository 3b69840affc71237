//! Name normalization: the engine that reduces noisy, multi-script product
//! titles to a stable canonical identity so the same juice listed on six
//! storefronts under six spellings collapses into one comparable entity.

pub mod classify;
pub mod clean;
pub mod normalize;
pub mod tables;

pub use classify::classify_category;
pub use clean::trim_after_volume;
pub use normalize::Normalizer;
pub use tables::NormalizerTables;
