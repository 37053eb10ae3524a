//! # Session State
//!
//! Wraps the one `BookingSession` this console serves.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console Command        Command Function         Session Change         │
//! │  ───────────────        ────────────────         ──────────────         │
//! │                                                                         │
//! │  select th-hamlet ────► select_showing() ──────► key set, seats drawn   │
//! │                                                                         │
//! │  seat 2 3 ────────────► toggle_seat() ─────────► selection ± seat       │
//! │                                                                         │
//! │  clear ───────────────► clear_selection() ─────► selection emptied      │
//! │                                                                         │
//! │  book ────────────────► confirm_booking() ─────► confirmed, emptied     │
//! │                                                                         │
//! │  summary ─────────────► get_booking() ─────────► (read only)            │
//! │                                                                         │
//! │  NOTE: every operation takes the Mutex exclusively and runs to          │
//! │        completion before the next one starts.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use showtime_core::{BookingSession, Catalog, RngSource};
use tracing::warn;

use super::config::ConfigState;

/// Shared booking session. Clones refer to the same session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<BookingSession>>,
}

impl SessionState {
    pub fn new(session: BookingSession) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Builds the session from configuration: showcase catalog, configured
    /// grid, and a seeded RNG when `SHOWTIME_RNG_SEED` is set.
    pub fn from_config(config: &ConfigState) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        SessionState::new(BookingSession::new(Catalog::showcase(), config.grid, rng))
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = session_state.with_session(|s| s.summary());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingSession) -> R,
    {
        let session = self.lock();
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.toggle_seat(SeatIndex(0)))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingSession) -> R,
    {
        let mut session = self.lock();
        f(&mut session)
    }

    /// Core operations are all-or-nothing, so a poisoned session is still valid.
    fn lock(&self) -> MutexGuard<'_, BookingSession> {
        self.session.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Session lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showtime_core::{GridConfig, SeatIndex, SelectionChange};

    fn seeded() -> SessionState {
        SessionState::new(BookingSession::new(
            Catalog::showcase(),
            GridConfig::default(),
            RngSource::seeded(42),
        ))
    }

    #[test]
    fn test_clones_share_one_session() {
        let state = seeded();
        let other = state.clone();

        state
            .with_session_mut(|s| s.select_showing("th-hamlet", None, ""))
            .unwrap();
        assert!(other.with_session(|s| s.selection().key().is_some()));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let state = seeded();
        state
            .with_session_mut(|s| s.select_showing("mv-neo-noir", None, ""))
            .unwrap();

        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            poisoner.with_session_mut(|_| panic!("command panicked"));
        })
        .join();

        let free = state.with_session(|s| {
            let map = s.seat_map().unwrap();
            (0..map.seats.len())
                .map(SeatIndex)
                .find(|i| map.status(*i) == Some(showtime_core::SeatStatus::Available))
                .unwrap()
        });
        let change = state.with_session_mut(|s| s.toggle_seat(free)).unwrap();
        assert_eq!(change, SelectionChange::Selected);
    }

    #[test]
    fn test_from_config_uses_grid_and_seed() {
        let config = ConfigState {
            grid: GridConfig::new(4, 5).unwrap(),
            rng_seed: Some(9),
            ..ConfigState::default()
        };
        let a = SessionState::from_config(&config);
        let b = SessionState::from_config(&config);

        let map_a = a
            .with_session_mut(|s| s.select_showing("ct-rock-legends", None, ""))
            .unwrap();
        let map_b = b
            .with_session_mut(|s| s.select_showing("ct-rock-legends", None, ""))
            .unwrap();

        assert_eq!(map_a.seats.len(), 20);
        assert_eq!(map_a, map_b);
    }
}
