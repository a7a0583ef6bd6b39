//! Typed cell values and the comparison rules shared by sorting and search.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// One cell of a record as seen by the table view.
///
/// Accessors map each record field to one of these variants; missing or
/// inapplicable fields map to [`CellValue::Null`]. The `Names` variant covers
/// fields holding a list of named objects (for example booked items), which
/// match a search when any element name contains the needle.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent or inapplicable value. Sorts to the end ascending.
    Null,
    /// Boolean flag. `true` sorts before `false` ascending.
    Bool(bool),
    /// Numeric value compared by total order.
    Number(f64),
    /// Free text compared case-insensitively.
    Text(String),
    /// Point in time compared by epoch milliseconds.
    Timestamp(DateTime<Utc>),
    /// Names of the elements of a named-object list field.
    Names(Vec<String>),
}

impl CellValue {
    /// Whether any part of the stringified value contains `needle`.
    ///
    /// `needle` must already be lowercased by the caller.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        match self {
            Self::Names(names) => names
                .iter()
                .any(|name| name.to_lowercase().contains(needle)),
            other => other.to_string().to_lowercase().contains(needle),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Timestamp(value) => write!(f, "{}", value.to_rfc3339()),
            Self::Names(names) => f.write_str(&names.join(", ")),
        }
    }
}

/// Ascending comparison between two cells.
///
/// Same-variant pairs compare by their natural order; nulls sort after any
/// concrete value so they land at the end of an ascending sort (and at the
/// start of a descending one, which reverses the whole ordering). Mixed
/// variants fall back to comparing their stringified forms.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Greater,
        (_, CellValue::Null) => Ordering::Less,
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => compare_text(x, y),
        // True-first ascending mirrors "active before inactive" listings.
        (CellValue::Bool(x), CellValue::Bool(y)) => y.cmp(x),
        (CellValue::Timestamp(x), CellValue::Timestamp(y)) => {
            x.timestamp_millis().cmp(&y.timestamp_millis())
        }
        (x, y) => compare_text(&x.to_string(), &y.to_string()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    //! Comparison and search-matching rules for each cell variant.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CellValue::Number(2.0), CellValue::Number(10.0), Ordering::Less)]
    #[case(
        CellValue::Text("alpha".into()),
        CellValue::Text("Beta".into()),
        Ordering::Less
    )]
    #[case(CellValue::Bool(true), CellValue::Bool(false), Ordering::Less)]
    #[case(CellValue::Null, CellValue::Text("x".into()), Ordering::Greater)]
    #[case(CellValue::Null, CellValue::Null, Ordering::Equal)]
    fn orders_same_variant_pairs(
        #[case] a: CellValue,
        #[case] b: CellValue,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_cells(&a, &b), expected);
    }

    #[test]
    fn orders_timestamps_by_epoch_millis() {
        let earlier = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).single();
        let later = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).single();
        let (earlier, later) = match (earlier, later) {
            (Some(e), Some(l)) => (e, l),
            _ => panic!("fixture timestamps must be valid"),
        };
        assert_eq!(
            compare_cells(&CellValue::Timestamp(earlier), &CellValue::Timestamp(later)),
            Ordering::Less
        );
    }

    #[test]
    fn mixed_variants_fall_back_to_string_comparison() {
        let a = CellValue::Number(12.0);
        let b = CellValue::Text("9 rooms".into());
        assert_eq!(compare_cells(&a, &b), Ordering::Less);
    }

    #[rstest]
    #[case(CellValue::Text("Main Hall".into()), "hall", true)]
    #[case(CellValue::Text("Main Hall".into()), "annex", false)]
    #[case(CellValue::Number(1500.0), "500", true)]
    #[case(
        CellValue::Names(vec!["Room 12".into(), "Room 14".into()]),
        "room 14",
        true
    )]
    #[case(CellValue::Names(vec!["Room 12".into()]), "hall", false)]
    #[case(CellValue::Null, "anything", false)]
    fn matches_lowercased_needles(
        #[case] value: CellValue,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(value.matches(needle), expected);
    }
}
