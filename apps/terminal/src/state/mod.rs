//! # State Module
//!
//! Application state for the console front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐         ┌──────────────────┐             │
//! │          │  SessionState    │         │   ConfigState    │             │
//! │          │                  │         │                  │             │
//! │          │  Arc<Mutex<      │         │  grid            │             │
//! │          │    Booking-      │         │  currency_symbol │             │
//! │          │    Session>>     │         │  rng_seed        │             │
//! │          │                  │         │  output          │             │
//! │          └──────────────────┘         └──────────────────┘             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: one command at a time holds the lock                  │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, OutputFormat, MAX_SEAT_COLS, MAX_SEAT_ROWS};
pub use session::SessionState;
