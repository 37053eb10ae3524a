//! # Seat Selection State
//!
//! The seats a user has picked but not yet booked, for one showing.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection State Operations                           │
//! │                                                                         │
//! │  UI Action                Operation              State Change           │
//! │  ─────────                ─────────              ────────────           │
//! │                                                                         │
//! │  Change show/date/time ──► set_key() ──────────► key, price replaced    │
//! │                                                  selected cleared       │
//! │                                                                         │
//! │  Click free seat ────────► toggle() ───────────► insert / remove index  │
//! │                                                                         │
//! │  Click occupied seat ────► toggle() ───────────► (nothing)              │
//! │                                                                         │
//! │  After booking ──────────► clear() ────────────► selected cleared       │
//! │                                                                         │
//! │  INVARIANT: selected ∩ occupied(key) = ∅ after every operation.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{BookingKey, SeatIndex};

/// Result of a [`SelectionState::toggle`], so a caller can repaint one
/// seat without rescanning the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
    /// Seat was added to the selection.
    Selected,
    /// Seat was removed from the selection.
    Deselected,
    /// Seat is occupied; nothing changed.
    Unavailable,
}

impl SelectionChange {
    /// Whether the seat is selected after the toggle.
    pub const fn is_selected(&self) -> bool {
        matches!(self, SelectionChange::Selected)
    }
}

/// Current showing, picked seats and price per seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    key: Option<BookingKey>,
    selected: BTreeSet<SeatIndex>,
    price_per_seat: Money,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Switches to a showing and clears the selection.
    ///
    /// Clears even when `key` equals the current key.
    pub fn set_key(&mut self, key: BookingKey, price_per_seat: Money) {
        self.key = Some(key);
        self.price_per_seat = price_per_seat;
        self.selected.clear();
    }

    /// Flips `index` unless it is in `occupied`.
    ///
    /// `occupied` must be the occupied set of the current key; the
    /// disjointness invariant rests on that.
    pub fn toggle(&mut self, index: SeatIndex, occupied: &BTreeSet<SeatIndex>) -> SelectionChange {
        if occupied.contains(&index) {
            return SelectionChange::Unavailable;
        }

        if self.selected.remove(&index) {
            SelectionChange::Deselected
        } else {
            self.selected.insert(index);
            SelectionChange::Selected
        }
    }

    /// Empties the selection, keeping key and price.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected seats, ascending.
    pub fn selected_indices(&self) -> Vec<SeatIndex> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, index: SeatIndex) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn key(&self) -> Option<&BookingKey> {
        self.key.as_ref()
    }

    pub fn price_per_seat(&self) -> Money {
        self.price_per_seat
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
