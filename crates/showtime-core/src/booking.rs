//! # Booking Finalizer
//!
//! Turns a non-empty selection into a confirmation record.
//!
//! ## Confirm, Then Reset
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Submit                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  finalize(show, date, time, &selection, &grid)                          │
//! │    │                                                                    │
//! │    ├── 0 seats ──► Err(EmptySelection)   selection untouched           │
//! │    │                                                                    │
//! │    └── N seats ──► Ok(BookingConfirmation)                              │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                  caller: selection.clear()                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `finalize` takes the selection by shared reference, so it cannot reset it.
//! Seat availability is not re-checked here: the selection never holds an
//! occupied seat in the first place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::SelectionState;
use crate::summary::summarize;
use crate::types::{GridConfig, ShowRecord};

/// A confirmed booking. Ephemeral; nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub show_id: String,
    pub show_title: String,
    pub venue: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub time: String,
    /// `R{row}S{seat}` labels, ascending by seat index.
    pub seats: Vec<String>,
    pub seat_count: usize,
    pub price_per_seat: Money,
    pub total: Money,
}

/// Builds the confirmation for the current selection.
///
/// ## Errors
/// [`CoreError::EmptySelection`] when no seat is selected.
pub fn finalize(
    show: &ShowRecord,
    date: NaiveDate,
    time: &str,
    selection: &SelectionState,
    grid: &GridConfig,
) -> CoreResult<BookingConfirmation> {
    if selection.is_empty() {
        return Err(CoreError::EmptySelection);
    }

    let seats = selection
        .selected_indices()
        .into_iter()
        .map(|index| grid.label(index))
        .collect();
    let summary = summarize(selection);

    Ok(BookingConfirmation {
        show_id: show.id.clone(),
        show_title: show.title.clone(),
        venue: show.venue.clone(),
        date,
        time: time.to_string(),
        seats,
        seat_count: summary.count,
        price_per_seat: selection.price_per_seat(),
        total: summary.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{BookingKey, SeatIndex};
    use std::collections::BTreeSet;

    fn neo_noir() -> ShowRecord {
        Catalog::showcase().find_show("mv-neo-noir").cloned().unwrap()
    }

    #[test]
    fn test_finalize_empty_selection_fails_and_leaves_state() {
        let show = neo_noir();
        let mut selection = SelectionState::new();
        selection.set_key(BookingKey::new(&show.id, show.date, ""), show.price);
        let before = selection.clone();

        let result = finalize(&show, show.date, "", &selection, &GridConfig::default());
        assert_eq!(result, Err(CoreError::EmptySelection));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_finalize_labels_sorted_and_totals() {
        let show = neo_noir();
        let mut selection = SelectionState::new();
        selection.set_key(BookingKey::new(&show.id, show.date, "19:30"), show.price);
        let none = BTreeSet::new();
        // Click order is not label order
        selection.toggle(SeatIndex(13), &none);
        selection.toggle(SeatIndex(0), &none);

        let confirmation =
            finalize(&show, show.date, "19:30", &selection, &GridConfig::default()).unwrap();
        assert_eq!(confirmation.seats, vec!["R1S1", "R2S2"]);
        assert_eq!(confirmation.seat_count, 2);
        assert_eq!(confirmation.total, Money::from_major(30));
        assert_eq!(confirmation.show_title, "Neon City – A Noir Saga");
        assert_eq!(confirmation.time, "19:30");

        // finalize does not reset; that is the caller's second step
        assert_eq!(selection.selected_count(), 2);
    }

    #[test]
    fn test_labels_follow_grid_width() {
        let show = neo_noir();
        let mut selection = SelectionState::new();
        selection.set_key(BookingKey::new(&show.id, show.date, ""), show.price);
        selection.toggle(SeatIndex(13), &BTreeSet::new());

        let narrow = GridConfig::new(10, 10).unwrap();
        let confirmation = finalize(&show, show.date, "", &selection, &narrow).unwrap();
        assert_eq!(confirmation.seats, vec!["R2S4"]);
    }
}
