//! # showtime-core: Pure Booking Logic for ShowTime
//!
//! This crate is the **heart** of ShowTime. It holds the show catalog and the
//! seat-selection engine as plain data and functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShowTime Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              UI binding (console, or a web page)                │   │
//! │  │    Show list ──► Seat grid ──► Summary line ──► Confirmation    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ showtime-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌───────────┐ ┌───────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │  │ catalog │ │ occupancy │ │ selection │ │ summary │ │booking│ │   │
//! │  │  └─────────┘ └───────────┘ └───────────┘ └─────────┘ └───────┘ │   │
//! │  │                 tied together by session::BookingSession        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • RANDOMNESS ONLY VIA RandomSource          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shows, booking keys, seat indices, grid configuration
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Show list, lookup and search filter
//! - [`occupancy`] - Lazily generated occupied seats per showing
//! - [`selection`] - User-selected seats and their invariants
//! - [`summary`] - Seat count and running total
//! - [`booking`] - Confirmation records
//! - [`session`] - One user's booking context
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use showtime_core::{BookingSession, Catalog, GridConfig, Money, RngSource, SeatIndex};
//!
//! let mut session = BookingSession::new(
//!     Catalog::showcase(),
//!     GridConfig::default(),
//!     RngSource::seeded(7),
//! );
//! let map = session.select_showing("mv-neo-noir", None, "").unwrap();
//! assert_eq!(map.seats.len(), 96);
//!
//! let free = (0..96)
//!     .map(SeatIndex)
//!     .find(|i| !session.occupancy().peek(&map.key).unwrap().contains(i))
//!     .unwrap();
//! session.toggle_seat(free).unwrap();
//! assert_eq!(session.summary().total, Money::from_major(15));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod catalog;
pub mod error;
pub mod money;
pub mod occupancy;
pub mod selection;
pub mod session;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::{finalize, BookingConfirmation};
pub use catalog::{Catalog, ShowFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use occupancy::{occupied_count, OccupancyMap, RandomSource, RngSource};
pub use selection::{SelectionChange, SelectionState};
pub use session::{BookingSession, SeatMap, SeatStatus};
pub use summary::{summarize, BookingSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Share of seats shown as already taken, in percent (rounded down per grid).
pub const OCCUPANCY_RATE_PERCENT: usize = 15;

/// Maximum length of the location search text.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Highest accepted seat price, in cents ($100,000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000;
