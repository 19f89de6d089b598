//! Line-oriented record extraction from recognized text.
//!
//! OCR output is noisy and unstructured; extraction is deliberately
//! permissive. A line that contains no car number contributes nothing —
//! that is normal control flow, not an error. Both parsers are pure
//! functions of their input text.

use regex::Regex;

use railpal_core::{InventoryRecord, WorkOrderRecord};

/// Car number: 3-5 uppercase letters (reporting mark) then 4-6 digits.
const CAR_PATTERN: &str = r"[A-Z]{3,5}[0-9]{4,6}";

/// Spot code: `digits-digits`, e.g. `12-34`.
const SPOT_PATTERN: &str = r"\b[0-9]+-[0-9]+\b";

fn car_regex() -> Regex {
    Regex::new(CAR_PATTERN).unwrap()
}

fn spot_regex() -> Regex {
    Regex::new(SPOT_PATTERN).unwrap()
}

/// Strip whitespace the recognizer may have injected inside a match.
fn normalize_car(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Extract work-order records: every car number on a line, each paired with
/// the line's spot code (or empty if the line has none).
///
/// When a line carries several car numbers and one spot code, every car on
/// that line receives the same spot. Ambiguous, but it is what the upstream
/// data means today; callers that care should keep one car per line.
pub fn parse_work_orders(text: &str) -> Vec<WorkOrderRecord> {
    let car_re = car_regex();
    let spot_re = spot_regex();

    let mut orders = Vec::new();
    for line in text.split('\n') {
        let spot = spot_re
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        for m in car_re.find_iter(line) {
            orders.push(WorkOrderRecord {
                car: normalize_car(m.as_str()),
                spot: spot.clone(),
            });
        }
    }
    orders
}

/// Extract inventory records: every car number on a line, each carrying the
/// full trimmed line for later display.
pub fn parse_inventory(text: &str) -> Vec<InventoryRecord> {
    let car_re = car_regex();

    let mut list = Vec::new();
    for line in text.split('\n') {
        for m in car_re.find_iter(line) {
            list.push(InventoryRecord {
                car: normalize_car(m.as_str()),
                raw: line.trim().to_string(),
            });
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn work_order_with_spot() {
        let orders = parse_work_orders("ABCD1234 12-34");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].car, "ABCD1234");
        assert_eq!(orders[0].spot, "12-34");
    }

    #[test]
    fn work_order_without_spot() {
        let orders = parse_work_orders("move GATX204155 to the east lead");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].car, "GATX204155");
        assert_eq!(orders[0].spot, "");
    }

    #[test]
    fn too_few_letters_is_not_a_car() {
        // XY12345: only two letters before the digits
        assert!(parse_work_orders("XY12345").is_empty());
        assert!(parse_inventory("XY12345").is_empty());
    }

    #[test]
    fn lines_without_matches_are_dropped() {
        let text = "Work orders for track 4\n\nABCD1234 12-34\n(end of sheet)\n";
        let orders = parse_work_orders(text);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].car, "ABCD1234");
    }

    #[test]
    fn multi_car_line_shares_the_spot() {
        // Both cars on the line get the one spot code found on it.
        let orders = parse_work_orders("TILX40023 UTLX95310 7-12");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].car, "TILX40023");
        assert_eq!(orders[0].spot, "7-12");
        assert_eq!(orders[1].car, "UTLX95310");
        assert_eq!(orders[1].spot, "7-12");
    }

    #[test]
    fn first_spot_on_line_wins() {
        let orders = parse_work_orders("ABCD1234 12-34 56-78");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].spot, "12-34");
    }

    #[test]
    fn spot_requires_word_boundary() {
        // Digits glued to letters are not a spot code.
        let orders = parse_work_orders("ABCD1234 x12-34y");
        assert_eq!(orders[0].spot, "");
    }

    #[test]
    fn inventory_carries_trimmed_line() {
        let list = parse_inventory("  TILX40023  loaded, bad order tag  \n");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].car, "TILX40023");
        assert_eq!(list[0].raw, "TILX40023  loaded, bad order tag");
    }

    #[test]
    fn inventory_preserves_duplicates() {
        let list = parse_inventory("TILX40023\nTILX40023\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].car, list[1].car);
    }

    #[test]
    fn inventory_multi_car_line_one_record_each() {
        let list = parse_inventory("TILX40023 UTLX95310");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].raw, "TILX40023 UTLX95310");
        assert_eq!(list[1].raw, "TILX40023 UTLX95310");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_work_orders("").is_empty());
        assert!(parse_inventory("").is_empty());
    }

    proptest! {
        // Parsing is pure: the same text always yields the same records.
        #[test]
        fn parse_is_deterministic(text in "[A-Z0-9 \n-]{0,120}") {
            prop_assert_eq!(parse_work_orders(&text), parse_work_orders(&text));
            prop_assert_eq!(parse_inventory(&text), parse_inventory(&text));
        }

        // Every well-formed car number is extracted and comes back verbatim.
        #[test]
        fn well_formed_car_is_extracted(mark in "[A-Z]{3,5}", digits in "[0-9]{4,6}") {
            let car = format!("{mark}{digits}");
            let orders = parse_work_orders(&car);
            prop_assert_eq!(orders.len(), 1);
            prop_assert_eq!(&orders[0].car, &car);
        }
    }
}
