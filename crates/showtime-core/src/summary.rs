//! # Booking Summary
//!
//! Count and total of the current selection. Recomputed on every query.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::selection::SelectionState;

/// What the "Seats: N / Total: $X" line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub count: usize,
    pub total: Money,
}

/// `count = selected seats`, `total = count × price per seat`.
pub fn summarize(selection: &SelectionState) -> BookingSummary {
    let count = selection.selected_count();
    BookingSummary {
        count,
        total: selection.price_per_seat().times(count),
    }
}

impl From<&SelectionState> for BookingSummary {
    fn from(selection: &SelectionState) -> Self {
        summarize(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookingKey, SeatIndex};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_selection_is_zero() {
        let mut selection = SelectionState::new();
        assert_eq!(summarize(&selection), BookingSummary::default());

        selection.set_key(
            BookingKey::new("sp-championship", NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(), ""),
            Money::from_major(80),
        );
        let summary = summarize(&selection);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_total_is_count_times_price() {
        let mut selection = SelectionState::new();
        selection.set_key(
            BookingKey::new("mv-neo-noir", NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(), ""),
            Money::from_major(15),
        );
        let none = BTreeSet::new();
        selection.toggle(SeatIndex(0), &none);
        selection.toggle(SeatIndex(13), &none);

        let summary = BookingSummary::from(&selection);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, Money::from_major(30));
    }

    #[test]
    fn test_huge_price_saturates_total() {
        let mut selection = SelectionState::new();
        selection.set_key(
            BookingKey::new("ct-rock-legends", NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(), ""),
            Money::from_cents(i64::MAX / 2 + 1),
        );
        let none = BTreeSet::new();
        selection.toggle(SeatIndex(0), &none);
        selection.toggle(SeatIndex(1), &none);

        assert_eq!(summarize(&selection).total, Money::from_cents(i64::MAX));
    }
}
