pub mod base;
pub mod dimension;

pub use base::{RecordHashes, TrifoldRecord};
pub use dimension::{CorrectionTarget, Dimension};
