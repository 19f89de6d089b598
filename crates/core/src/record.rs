use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Car identity
// ---------------------------------------------------------------------------
//
// A car number is 3-5 uppercase letters followed by 4-6 digits, with internal
// whitespace stripped at extraction time. It is carried as a plain `String`
// and compared with exact, case-sensitive equality — the join key between
// work orders and inventory.

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One work-order entry: a car and the spot it should be moved to.
///
/// The store holds at most one record per car number; later uploads merge
/// into the existing record rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderRecord {
    /// Normalized car number (letters+digits, whitespace stripped).
    pub car: String,
    /// Spot code of the form `digits-digits`; empty string = unknown.
    pub spot: String,
}

/// One car observed in an inventory scan.
///
/// Duplicates are preserved: inventory is a snapshot with one record per
/// matching source line, not a keyed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Normalized car number.
    pub car: String,
    /// The full trimmed source line the car was found on.
    pub raw: String,
}

/// One row of the reconciliation output. Derived, never stored —
/// regenerated on every reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub car: String,
    /// Spot from the matching work order, or empty if unmatched.
    pub spot: String,
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_order_json_shape() {
        let rec = WorkOrderRecord {
            car: "ABCD1234".into(),
            spot: "12-34".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["car"].as_str(), Some("ABCD1234"));
        assert_eq!(json["spot"].as_str(), Some("12-34"));
    }

    #[test]
    fn match_result_roundtrip() {
        let rec = MatchResult {
            car: "TILX40023".into(),
            spot: "".into(),
            matched: false,
        };
        let json = serde_json::to_string(&rec).unwrap();
        let back: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
