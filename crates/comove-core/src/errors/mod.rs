//! Error handling for comove.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod ingest_error;
pub mod mining_error;
pub mod pipeline_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use error_code::ComoveErrorCode;
pub use ingest_error::IngestError;
pub use mining_error::MiningError;
pub use pipeline_error::PipelineError;
pub use table_error::TableError;
