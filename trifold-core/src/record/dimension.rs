use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The three representations of a record.
///
/// This is the stable identifier external consumers (threat monitoring,
/// persistence) use to correlate corruption reports with engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Machine-structured source of truth. Not reconstructible.
    Canonical,
    /// Human-narrative form, derived from canonical.
    Secondary,
    /// Numeric/frequency form, derived from canonical.
    Tertiary,
}

impl Dimension {
    /// The two derived dimensions, in classification order.
    pub const DERIVED: [Dimension; 2] = [Dimension::Secondary, Dimension::Tertiary];

    /// Whether this dimension is reconstructible from canonical.
    pub fn is_derived(self) -> bool {
        !matches!(self, Dimension::Canonical)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Canonical => write!(f, "canonical"),
            Dimension::Secondary => write!(f, "secondary"),
            Dimension::Tertiary => write!(f, "tertiary"),
        }
    }
}

/// What a minor diagnostic proposes to repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "dimension")]
pub enum CorrectionTarget {
    /// Regenerate one derived dimension from canonical.
    Dimension(Dimension),
    /// Recompute the stored combined hash. Content is untouched.
    CombinedHash,
}

impl fmt::Display for CorrectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionTarget::Dimension(d) => write!(f, "{d}"),
            CorrectionTarget::CombinedHash => write!(f, "combined_hash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_is_not_derived() {
        assert!(!Dimension::Canonical.is_derived());
        assert!(Dimension::Secondary.is_derived());
        assert!(Dimension::Tertiary.is_derived());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Dimension::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
    }
}
