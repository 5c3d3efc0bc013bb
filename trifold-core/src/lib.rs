//! # trifold-core
//!
//! Foundation crate for the Trifold record-integrity system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CorrectionConfig, TrifoldConfig};
pub use errors::{TrifoldError, TrifoldResult};
pub use models::{CorrectionOutcome, CorruptionDiagnostic, Severity, Verification};
pub use record::{CorrectionTarget, Dimension, RecordHashes, TrifoldRecord};
