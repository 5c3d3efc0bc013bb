use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

/// The four content hashes stored alongside a record.
///
/// Computed once at creation (or correction) time and stored; the engine
/// never recomputes them silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordHashes {
    pub canonical: String,
    pub secondary: String,
    pub tertiary: String,
    /// Hash over `canonical ++ secondary ++ tertiary`, the record's single
    /// integrity fingerprint.
    pub combined: String,
}

/// A tri-dimensional record: one logical fact, three redundant encodings.
///
/// `canonical` is the single source of truth; `secondary` and `tertiary` are
/// deterministic functions of it. The asymmetry is what makes correction
/// possible: a damaged derived dimension can be regenerated, a damaged
/// canonical dimension cannot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrifoldRecord {
    /// UUID v4 identifier.
    pub record_id: String,
    /// When this record value was created.
    pub created_at: DateTime<Utc>,
    /// Machine-structured source of truth.
    pub canonical: Value,
    /// Human-narrative form, derived from canonical.
    pub secondary: String,
    /// Numeric/frequency form, derived from canonical.
    pub tertiary: Value,
    /// blake3 hex digest of the canonical representation.
    pub hash_canonical: String,
    /// blake3 hex digest of the secondary representation.
    pub hash_secondary: String,
    /// blake3 hex digest of the tertiary representation.
    pub hash_tertiary: String,
    /// blake3 hex digest of the three representations concatenated.
    pub hash_combined: String,
    /// ID of the record this one superseded, set when a correction produced
    /// this value. Preserves the audit chain.
    pub superseded_id: Option<String>,
}

impl TrifoldRecord {
    /// Assemble a fresh record from its representations and precomputed hashes.
    pub fn new(canonical: Value, secondary: String, tertiary: Value, hashes: RecordHashes) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            canonical,
            secondary,
            tertiary,
            hash_canonical: hashes.canonical,
            hash_secondary: hashes.secondary,
            hash_tertiary: hashes.tertiary,
            hash_combined: hashes.combined,
            superseded_id: None,
        }
    }

    /// The stored hashes as one value.
    pub fn stored_hashes(&self) -> RecordHashes {
        RecordHashes {
            canonical: self.hash_canonical.clone(),
            secondary: self.hash_secondary.clone(),
            tertiary: self.hash_tertiary.clone(),
            combined: self.hash_combined.clone(),
        }
    }

    /// Structural comparison: whether two records carry the same content,
    /// judged by their stored hashes.
    ///
    /// This is distinct from `PartialEq`, which only compares IDs (DDD
    /// Entity pattern).
    pub fn content_eq(&self, other: &Self) -> bool {
        self.hash_canonical == other.hash_canonical
            && self.hash_secondary == other.hash_secondary
            && self.hash_tertiary == other.hash_tertiary
            && self.hash_combined == other.hash_combined
    }
}

/// Identity equality: two records are equal if they have the same ID.
///
/// A record's identity is its UUID, not its content. For structural
/// comparison, use [`TrifoldRecord::content_eq`] instead.
impl PartialEq for TrifoldRecord {
    fn eq(&self, other: &Self) -> bool {
        self.record_id == other.record_id
    }
}
