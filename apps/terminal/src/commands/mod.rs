//! # Commands Module
//!
//! Every operation the console (or any other front end) can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── list_shows, search_shows, get_show
//! └── booking.rs  ◄─── select_showing, toggle_seat, get_booking,
//!                      clear_selection, confirm_booking
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  console: "select th-hamlet 2025-10-18 19:30"                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  select_showing(                                                        │
//! │      session: &SessionState,   ◄── the one shared session              │
//! │      show_id: String,          ◄── raw text from the line              │
//! │      date: Option<String>,                                              │
//! │      time: Option<String>,                                              │
//! │  ) -> Result<SeatMapResponse, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  console renders text, or serializes the DTO as JSON                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands validate raw text with `showtime_core::validation` before any
//! session state changes.

pub mod booking;
pub mod catalog;
