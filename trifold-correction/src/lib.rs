//! # trifold-correction
//!
//! Self-correction engine for tri-dimensional records: corruption detection,
//! cross-consistency localization, regeneration of damaged derived
//! representations, and audit logging.
//!
//! ## Pipeline
//! 1. **Detector** - recompute per-dimension and combined hashes, compare
//!    against the stored hashes (byte-level integrity).
//! 2. **Localizer** - re-derive secondary/tertiary from canonical, compare
//!    byte-for-byte, classify severity (semantic drift).
//! 3. **Corrector** - regenerate the damaged derived dimension. Minor faults
//!    only; canonical is never "corrected".
//! 4. **Validator** - re-verify the corrected record before it is accepted.
//!
//! The engine is synchronous and stateless between calls. Verification and
//! correction are functions of the record plus the injected derivation
//! functions, so concurrent callers need no locking.

pub mod corrector;
pub mod detector;
pub mod engine;
pub mod hasher;
pub mod localizer;
pub mod log;
pub mod validator;

use serde_json::Value;

/// Caller-supplied pure derivation of the human-narrative form.
pub type DeriveSecondaryFn = dyn Fn(&Value) -> String + Send + Sync;

/// Caller-supplied pure derivation of the numeric/frequency form.
pub type DeriveTertiaryFn = dyn Fn(&Value) -> Value + Send + Sync;

pub use engine::CorrectionEngine;
