//! Dimension hashing: blake3 hex digests over canonical serializations.
//!
//! Structured representations are hashed via their JSON text, narrative
//! representations via their UTF-8 bytes. Digests never depend on memory
//! layout or platform endianness.

use serde_json::Value;
use trifold_core::record::{Dimension, RecordHashes};
use trifold_core::{TrifoldError, TrifoldResult};

/// Hash an arbitrary byte sequence. Total function, no failure modes.
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Hash a narrative representation.
pub fn hash_text(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// Hash a structured representation via its JSON serialization.
pub fn hash_value(dimension: Dimension, value: &Value) -> TrifoldResult<String> {
    let serialized = serialize_value(dimension, value)?;
    Ok(hash_bytes(serialized.as_bytes()))
}

/// Hash the concatenation `canonical ++ secondary ++ tertiary`.
pub fn combined_hash(
    canonical: &Value,
    secondary: &str,
    tertiary: &Value,
) -> TrifoldResult<String> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(serialize_value(Dimension::Canonical, canonical)?.as_bytes());
    hasher.update(secondary.as_bytes());
    hasher.update(serialize_value(Dimension::Tertiary, tertiary)?.as_bytes());
    Ok(hasher.finalize().to_hex().to_string())
}

/// Compute all four stored hashes for a record's representations.
pub fn hash_parts(
    canonical: &Value,
    secondary: &str,
    tertiary: &Value,
) -> TrifoldResult<RecordHashes> {
    Ok(RecordHashes {
        canonical: hash_value(Dimension::Canonical, canonical)?,
        secondary: hash_text(secondary),
        tertiary: hash_value(Dimension::Tertiary, tertiary)?,
        combined: combined_hash(canonical, secondary, tertiary)?,
    })
}

fn serialize_value(dimension: Dimension, value: &Value) -> TrifoldResult<String> {
    serde_json::to_string(value).map_err(|e| TrifoldError::Serialization {
        dimension,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digests_are_stable() {
        let v = json!({"amount": 42, "unit": "UR"});
        assert_eq!(
            hash_value(Dimension::Canonical, &v).unwrap(),
            hash_value(Dimension::Canonical, &v).unwrap()
        );
        assert_eq!(hash_text("42 UR"), hash_text("42 UR"));
    }

    #[test]
    fn different_content_different_digest() {
        assert_ne!(hash_text("42 UR"), hash_text("43 UR"));
    }

    #[test]
    fn combined_matches_manual_concatenation() {
        let canonical = json!({"amount": 42});
        let tertiary = json!({"frequency": 420});
        let combined = combined_hash(&canonical, "42", &tertiary).unwrap();

        let mut manual = String::new();
        manual.push_str(&serde_json::to_string(&canonical).unwrap());
        manual.push_str("42");
        manual.push_str(&serde_json::to_string(&tertiary).unwrap());
        assert_eq!(combined, hash_text(&manual));
    }

    #[test]
    fn hash_parts_is_consistent_with_individual_hashers() {
        let canonical = json!([1, 2, 3]);
        let tertiary = json!(6);
        let parts = hash_parts(&canonical, "one two three", &tertiary).unwrap();
        assert_eq!(
            parts.canonical,
            hash_value(Dimension::Canonical, &canonical).unwrap()
        );
        assert_eq!(parts.secondary, hash_text("one two three"));
        assert_eq!(
            parts.combined,
            combined_hash(&canonical, "one two three", &tertiary).unwrap()
        );
    }
}
