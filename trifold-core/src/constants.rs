//! System-wide constants and tunable defaults.

/// Confidence when a stored per-dimension hash itself mismatches: the damage
/// is directly observed.
pub const CONFIDENCE_HASH_CONFIRMED: f64 = 1.0;

/// Confidence for combined-hash-only corruption. The administrative field
/// carries no ambiguity.
pub const CONFIDENCE_ADMINISTRATIVE: f64 = 1.0;

/// Default confidence when a dimension drifted from canonical while its own
/// stored hash is internally consistent. The damage is inferred from
/// re-derivation, not observed in the bytes.
pub const DEFAULT_DRIFT_ONLY_CONFIDENCE: f64 = 0.85;

/// Default for whether `correct` repairs combined-hash-only corruption.
pub const DEFAULT_AUTO_REPAIR_ADMIN_HASH: bool = true;
