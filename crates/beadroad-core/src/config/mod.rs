//! Configuration system for the bead-road engine.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod analysis_config;
pub mod beadroad_config;
pub mod statistics_config;
pub mod storage_config;
pub mod taxonomy_config;

pub use analysis_config::AnalysisConfig;
pub use beadroad_config::BeadroadConfig;
pub use statistics_config::StatisticsConfig;
pub use storage_config::StorageConfig;
pub use taxonomy_config::TaxonomyConfig;
