//! Corruption detection: recompute hashes, compare against stored hashes.
//!
//! This is the byte-level integrity check. It catches storage or
//! transmission damage to a representation's bytes, not semantic drift;
//! drift is the localizer's job.

use trifold_core::record::{Dimension, RecordHashes, TrifoldRecord};
use trifold_core::TrifoldResult;

use crate::hasher;

/// Per-dimension hash comparison results for one record.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    pub canonical_hash_ok: bool,
    pub secondary_hash_ok: bool,
    pub tertiary_hash_ok: bool,
    pub combined_hash_ok: bool,
    /// The freshly recomputed hashes the comparison ran against.
    pub recomputed: RecordHashes,
}

impl DetectionReport {
    /// Whether every representation matches its own stored hash.
    pub fn all_content_ok(&self) -> bool {
        self.canonical_hash_ok && self.secondary_hash_ok && self.tertiary_hash_ok
    }

    /// Combined hash disagrees while all three representations check out:
    /// the stored combined hash itself was damaged.
    pub fn admin_only(&self) -> bool {
        self.all_content_ok() && !self.combined_hash_ok
    }

    /// Dimensions whose stored hash failed the comparison.
    pub fn hash_failures(&self) -> Vec<Dimension> {
        let mut failures = Vec::new();
        if !self.canonical_hash_ok {
            failures.push(Dimension::Canonical);
        }
        if !self.secondary_hash_ok {
            failures.push(Dimension::Secondary);
        }
        if !self.tertiary_hash_ok {
            failures.push(Dimension::Tertiary);
        }
        failures
    }
}

/// Recompute all four hashes for `record` and compare each against the
/// stored value.
pub fn detect(record: &TrifoldRecord) -> TrifoldResult<DetectionReport> {
    let recomputed = hasher::hash_parts(&record.canonical, &record.secondary, &record.tertiary)?;
    Ok(DetectionReport {
        canonical_hash_ok: recomputed.canonical == record.hash_canonical,
        secondary_hash_ok: recomputed.secondary == record.hash_secondary,
        tertiary_hash_ok: recomputed.tertiary == record.hash_tertiary,
        combined_hash_ok: recomputed.combined == record.hash_combined,
        recomputed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trifold_core::record::TrifoldRecord;

    fn make_record() -> TrifoldRecord {
        let canonical = json!({"amount": 42, "unit": "UR"});
        let secondary = "42 UR".to_string();
        let tertiary = json!({"frequency": 420});
        let hashes = hasher::hash_parts(&canonical, &secondary, &tertiary).unwrap();
        TrifoldRecord::new(canonical, secondary, tertiary, hashes)
    }

    #[test]
    fn intact_record_passes_all_checks() {
        let report = detect(&make_record()).unwrap();
        assert!(report.all_content_ok());
        assert!(report.combined_hash_ok);
        assert!(report.hash_failures().is_empty());
    }

    #[test]
    fn mutated_secondary_fails_its_hash_and_combined() {
        let mut record = make_record();
        record.secondary = "43 UR".to_string();
        let report = detect(&record).unwrap();
        assert!(!report.secondary_hash_ok);
        assert!(!report.combined_hash_ok);
        assert!(report.canonical_hash_ok);
        assert_eq!(report.hash_failures(), vec![Dimension::Secondary]);
    }

    #[test]
    fn damaged_combined_hash_is_admin_only() {
        let mut record = make_record();
        record.hash_combined = "0000".to_string();
        let report = detect(&record).unwrap();
        assert!(report.admin_only());
    }
}
