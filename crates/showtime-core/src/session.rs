//! # Booking Session
//!
//! One user's booking context: catalog, seat grid, occupancy, selection and
//! random source, owned together instead of living in process-wide globals.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BookingSession                                    │
//! │                                                                         │
//! │  select_showing(id, date, time)                                         │
//! │     │  catalog.require_show(id)        ── ShowNotFound? stop, no grid   │
//! │     │  key = (id, date ∨ show.date, time)                               │
//! │     │  selection.set_key(key, show.price)                               │
//! │     │  occupancy.occupied_seats(key, rows × cols)                       │
//! │     ▼                                                                   │
//! │  SeatMap ◄──────────── seat_map()                                       │
//! │     │                                                                   │
//! │  toggle_seat(i) ──► SelectionChange     summary() ──► BookingSummary    │
//! │     │                                                                   │
//! │  confirm_booking() ──► finalize() ──► Ok? selection.clear()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions are independent: two sessions never share occupancy or
//! selection, so a server could give each user its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::booking::{finalize, BookingConfirmation};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::occupancy::{OccupancyMap, RandomSource, RngSource};
use crate::selection::{SelectionChange, SelectionState};
use crate::summary::{summarize, BookingSummary};
use crate::types::{BookingKey, GridConfig, SeatIndex, SeatPosition, ShowRecord};

// =============================================================================
// Seat Map
// =============================================================================

/// Display state of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

/// Row-major snapshot of the current showing's seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub key: BookingKey,
    pub rows: usize,
    pub cols: usize,
    pub seats: Vec<SeatStatus>,
}

impl SeatMap {
    pub fn status(&self, index: SeatIndex) -> Option<SeatStatus> {
        self.seats.get(index.get()).copied()
    }

    /// Seats of one row, left to right.
    pub fn row(&self, row: usize) -> &[SeatStatus] {
        let start = (row * self.cols).min(self.seats.len());
        let end = (start + self.cols).min(self.seats.len());
        &self.seats[start..end]
    }

    pub fn count(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|s| **s == status).count()
    }
}

// =============================================================================
// Booking Session
// =============================================================================

/// Explicit booking context. See the module docs for the flow.
#[derive(Debug)]
pub struct BookingSession<R = RngSource<rand::rngs::StdRng>> {
    catalog: Catalog,
    grid: GridConfig,
    occupancy: OccupancyMap,
    selection: SelectionState,
    rng: R,
}

impl<R: RandomSource> BookingSession<R> {
    pub fn new(catalog: Catalog, grid: GridConfig, rng: R) -> Self {
        BookingSession {
            catalog,
            grid,
            occupancy: OccupancyMap::new(),
            selection: SelectionState::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    /// The show behind the current key, if any.
    pub fn current_show(&self) -> Option<&ShowRecord> {
        self.selection
            .key()
            .and_then(|key| self.catalog.find_show(&key.show_id))
    }

    /// Switches to a showing instance and returns its seat map.
    ///
    /// `date` defaults to the show's own date. `time` is used verbatim as
    /// part of the key; pass `""` when no time is chosen.
    ///
    /// ## Errors
    /// [`CoreError::ShowNotFound`]; the previous showing stays active.
    pub fn select_showing(
        &mut self,
        show_id: &str,
        date: Option<NaiveDate>,
        time: &str,
    ) -> CoreResult<SeatMap> {
        let show = self.catalog.require_show(show_id)?;
        let key = BookingKey::new(&show.id, date.unwrap_or(show.date), time);
        let price = show.price;

        debug!(key = %key, price = %price, "Selecting showing");
        self.selection.set_key(key.clone(), price);
        self.occupancy
            .occupied_seats(&key, self.grid.total_seats(), &mut self.rng);

        self.seat_map().ok_or(CoreError::NoShowingSelected)
    }

    /// Toggles a seat of the current showing.
    ///
    /// ## Errors
    /// - [`CoreError::NoShowingSelected`] before any `select_showing`
    /// - [`CoreError::SeatOutOfRange`] for an index outside the grid
    pub fn toggle_seat(&mut self, index: SeatIndex) -> CoreResult<SelectionChange> {
        let key = self
            .selection
            .key()
            .cloned()
            .ok_or(CoreError::NoShowingSelected)?;

        if !self.grid.contains(index) {
            return Err(CoreError::SeatOutOfRange {
                index: index.get(),
                total: self.grid.total_seats(),
            });
        }

        let occupied = self
            .occupancy
            .occupied_seats(&key, self.grid.total_seats(), &mut self.rng);
        let change = self.selection.toggle(index, occupied);
        debug!(key = %key, seat = %index, ?change, "Toggled seat");
        Ok(change)
    }

    /// Toggles a seat by zero-based (row, col).
    pub fn toggle_position(&mut self, position: SeatPosition) -> CoreResult<SelectionChange> {
        let index = self
            .grid
            .index_of(position)
            .ok_or_else(|| CoreError::SeatOutOfRange {
                index: position.row * self.grid.cols() + position.col,
                total: self.grid.total_seats(),
            })?;
        self.toggle_seat(index)
    }

    /// Seat map of the current showing; `None` before any selection.
    pub fn seat_map(&self) -> Option<SeatMap> {
        let key = self.selection.key()?;
        let occupied = self.occupancy.peek(key)?;

        let seats = self
            .grid
            .indices()
            .map(|index| {
                if occupied.contains(&index) {
                    SeatStatus::Occupied
                } else if self.selection.is_selected(index) {
                    SeatStatus::Selected
                } else {
                    SeatStatus::Available
                }
            })
            .collect();

        Some(SeatMap {
            key: key.clone(),
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            seats,
        })
    }

    pub fn summary(&self) -> BookingSummary {
        summarize(&self.selection)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Finalizes the current selection, then clears it.
    ///
    /// ## Errors
    /// - [`CoreError::NoShowingSelected`]
    /// - [`CoreError::EmptySelection`]; the selection is left as it was
    pub fn confirm_booking(&mut self) -> CoreResult<BookingConfirmation> {
        let key = self
            .selection
            .key()
            .cloned()
            .ok_or(CoreError::NoShowingSelected)?;
        let show = self.catalog.require_show(&key.show_id)?;

        let confirmation = finalize(show, key.date, &key.time, &self.selection, &self.grid)?;
        self.selection.clear();

        info!(
            key = %key,
            seats = ?confirmation.seats,
            total = %confirmation.total,
            "Booking confirmed"
        );
        Ok(confirmation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
