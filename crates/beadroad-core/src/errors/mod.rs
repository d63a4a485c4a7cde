//! Error handling for the bead-road engine.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod storage_error;
pub mod taxonomy_error;

pub use analysis_error::{AnalysisError, RunResult};
pub use config_error::ConfigError;
pub use error_code::BeadroadErrorCode;
pub use storage_error::StorageError;
pub use taxonomy_error::TaxonomyError;
