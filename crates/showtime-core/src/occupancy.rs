//! # Occupancy
//!
//! Synthetic "already sold" seats, fixed per showing instance.
//!
//! ## Keyed Memoization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  occupied_seats(key, 96)                                                │
//! │       │                                                                 │
//! │       ├── key cached? ──yes──► return cached set (never regenerated)   │
//! │       │                                                                 │
//! │       └── no ──► occ_count = floor(96 × 15%) = 14                      │
//! │                  draw random indices in [0, 96) into a set             │
//! │                  until it holds 14 members                              │
//! │                  cache under key, return it                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Switching to another showing and back shows the same occupied seats,
//! while distinct showings get independent draws.

use std::collections::{BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{BookingKey, SeatIndex};
use crate::OCCUPANCY_RATE_PERCENT;

// =============================================================================
// Random Source
// =============================================================================

/// Source of uniform seat draws.
///
/// Tests inject a scripted implementation to assert exact occupied sets.
pub trait RandomSource {
    /// Returns a uniform value in `[0, upper)`. `upper` is always > 0.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    /// OS-seeded generator for normal sessions.
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }

    /// Reproducible generator, for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

// =============================================================================
// Occupancy Map
// =============================================================================

/// Number of occupied seats for a grid of `total_seats`: 15%, rounded down.
pub const fn occupied_count(total_seats: usize) -> usize {
    total_seats * OCCUPANCY_RATE_PERCENT / 100
}

/// Per-showing occupied seat sets, created lazily and never changed.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    entries: HashMap<BookingKey, BTreeSet<SeatIndex>>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        OccupancyMap::default()
    }

    /// Occupied seats of `key`, generating them on first access.
    ///
    /// Repeated calls with the same key return the cached set unchanged,
    /// even if `total_seats` differs from the first call.
    pub fn occupied_seats<R: RandomSource + ?Sized>(
        &mut self,
        key: &BookingKey,
        total_seats: usize,
        rng: &mut R,
    ) -> &BTreeSet<SeatIndex> {
        self.entries.entry(key.clone()).or_insert_with(|| {
            let seats = draw_occupied(total_seats, rng);
            debug!(key = %key, total_seats, occupied = seats.len(), "Generated occupancy");
            seats
        })
    }

    /// Cached set for `key`, without generating.
    pub fn peek(&self, key: &BookingKey) -> Option<&BTreeSet<SeatIndex>> {
        self.entries.get(key)
    }

    /// Number of showing instances materialized so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Distinct uniform draws without replacement.
fn draw_occupied<R: RandomSource + ?Sized>(total_seats: usize, rng: &mut R) -> BTreeSet<SeatIndex> {
    let target = occupied_count(total_seats);
    let mut seats = BTreeSet::new();
    while seats.len() < target {
        seats.insert(SeatIndex(rng.pick(total_seats)));
    }
    seats
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Replays a fixed list of draws, wrapping around.
    struct Scripted {
        draws: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(draws: &[usize]) -> Self {
            Scripted {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, upper: usize) -> usize {
            let value = self.draws[self.next % self.draws.len()] % upper;
            self.next += 1;
            value
        }
    }

    fn key(time: &str) -> BookingKey {
        BookingKey::new(
            "th-hamlet",
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
            time,
        )
    }

    #[test]
    fn test_occupied_count_rounds_down() {
        assert_eq!(occupied_count(96), 14);
        assert_eq!(occupied_count(100), 15);
        assert_eq!(occupied_count(7), 1);
        assert_eq!(occupied_count(6), 0);
        assert_eq!(occupied_count(0), 0);
    }

    #[test]
    fn test_scripted_source_gives_exact_set_and_skips_duplicates() {
        let mut map = OccupancyMap::new();
        // 20 seats → 3 occupied; the repeated 4 must not count twice
        let mut rng = Scripted::new(&[4, 4, 17, 9, 2]);
        let seats = map.occupied_seats(&key(""), 20, &mut rng);
        let expected: BTreeSet<_> = [4, 9, 17].into_iter().map(SeatIndex).collect();
        assert_eq!(seats, &expected);
    }

    #[test]
    fn test_same_key_is_never_regenerated() {
        let mut map = OccupancyMap::new();
        let mut rng = RngSource::seeded(7);
        let first = map.occupied_seats(&key("19:30"), 96, &mut rng).clone();
        let second = map.occupied_seats(&key("19:30"), 96, &mut rng).clone();
        assert_eq!(first, second);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_distinct_keys_get_their_own_entries() {
        let mut map = OccupancyMap::new();
        let mut rng = Scripted::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let matinee = map.occupied_seats(&key("14:00"), 20, &mut rng).clone();
        let evening = map.occupied_seats(&key("19:30"), 20, &mut rng).clone();
        assert_ne!(matinee, evening);
        assert_eq!(map.len(), 2);
        assert_eq!(map.peek(&key("14:00")), Some(&matinee));
        assert!(map.peek(&key("")).is_none());
    }

    #[test]
    fn test_tiny_grid_has_no_occupied_seats() {
        let mut map = OccupancyMap::new();
        let mut rng = RngSource::seeded(1);
        assert!(map.occupied_seats(&key(""), 6, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let mut a = OccupancyMap::new();
        let mut b = OccupancyMap::new();
        let seats_a = a
            .occupied_seats(&key(""), 96, &mut RngSource::seeded(42))
            .clone();
        let seats_b = b
            .occupied_seats(&key(""), 96, &mut RngSource::seeded(42))
            .clone();
        assert_eq!(seats_a, seats_b);
        assert_eq!(seats_a.len(), 14);
        assert!(seats_a.iter().all(|s| s.get() < 96));
    }
}
