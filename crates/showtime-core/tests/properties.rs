//! Property tests for the seat engine invariants.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use showtime_core::{
    finalize, occupied_count, summarize, BookingKey, BookingSession, Catalog, CoreError,
    GridConfig, Money, OccupancyMap, RngSource, SeatIndex, SelectionChange, SelectionState,
};

fn key(show: &str, day: u32, time: &str) -> BookingKey {
    BookingKey::new(show, NaiveDate::from_ymd_opt(2025, 10, day).unwrap(), time)
}

proptest! {
    #[test]
    fn occupancy_is_memoized(seed in any::<u64>(), rows in 1usize..20, cols in 1usize..20) {
        let total = rows * cols;
        let mut map = OccupancyMap::new();
        let mut rng = RngSource::seeded(seed);
        let k = key("th-hamlet", 18, "19:30");

        let first = map.occupied_seats(&k, total, &mut rng).clone();
        let second = map.occupied_seats(&k, total, &mut rng).clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn occupancy_has_exact_size_and_stays_in_range(
        seed in any::<u64>(),
        rows in 1usize..30,
        cols in 1usize..30,
    ) {
        let total = rows * cols;
        let mut map = OccupancyMap::new();
        let seats = map.occupied_seats(&key("mv-neo-noir", 15, ""), total, &mut RngSource::seeded(seed));

        prop_assert_eq!(seats.len(), total * 15 / 100);
        prop_assert_eq!(seats.len(), occupied_count(total));
        prop_assert!(seats.iter().all(|s| s.get() < total));
    }

    #[test]
    fn selection_never_overlaps_occupancy(
        seed in any::<u64>(),
        clicks in prop::collection::vec(0usize..96, 0..200),
    ) {
        let mut session = BookingSession::new(
            Catalog::showcase(),
            GridConfig::default(),
            RngSource::seeded(seed),
        );
        let map = session.select_showing("ct-rock-legends", None, "").unwrap();
        let occupied = session.occupancy().peek(&map.key).unwrap().clone();

        for click in clicks {
            let change = session.toggle_seat(SeatIndex(click)).unwrap();
            if occupied.contains(&SeatIndex(click)) {
                prop_assert_eq!(change, SelectionChange::Unavailable);
            }
            let selected: BTreeSet<_> = session.selection().selected_indices().into_iter().collect();
            prop_assert!(selected.is_disjoint(&occupied));
        }
    }

    #[test]
    fn toggle_twice_is_identity(
        picks in prop::collection::btree_set(0usize..96, 0..20),
        target in 0usize..96,
        occupied in prop::collection::btree_set(0usize..96, 0..14),
    ) {
        let occupied: BTreeSet<SeatIndex> = occupied.into_iter().map(SeatIndex).collect();
        let mut selection = SelectionState::new();
        selection.set_key(key("mv-neo-noir", 15, ""), Money::from_major(15));
        for p in picks {
            selection.toggle(SeatIndex(p), &occupied);
        }
        let before = selection.clone();

        selection.toggle(SeatIndex(target), &occupied);
        selection.toggle(SeatIndex(target), &occupied);
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn set_key_always_empties(
        picks in prop::collection::vec(0usize..96, 0..30),
        cents in 0i64..100_000,
    ) {
        let mut selection = SelectionState::new();
        let none = BTreeSet::new();
        for p in picks {
            selection.toggle(SeatIndex(p), &none);
        }
        selection.set_key(key("sp-championship", 1, "20:00"), Money::from_cents(cents));
        prop_assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn summary_is_linear(
        picks in prop::collection::btree_set(0usize..96, 0..40),
        cents in 0i64..100_000,
    ) {
        let mut selection = SelectionState::new();
        selection.set_key(key("ct-symphony-night", 28, ""), Money::from_cents(cents));
        let none = BTreeSet::new();
        for p in &picks {
            selection.toggle(SeatIndex(*p), &none);
        }
        let summary = summarize(&selection);
        prop_assert_eq!(summary.count, picks.len());
        prop_assert_eq!(summary.total.cents(), picks.len() as i64 * cents);
    }

    #[test]
    fn finalize_sorts_labels_and_totals(picks in prop::collection::vec(0usize..96, 0..30)) {
        let catalog = Catalog::showcase();
        let show = catalog.find_show("th-musical-dreams").unwrap();
        let grid = GridConfig::default();
        let mut selection = SelectionState::new();
        selection.set_key(BookingKey::new(&show.id, show.date, ""), show.price);
        let none = BTreeSet::new();
        for p in picks {
            selection.toggle(SeatIndex(p), &none);
        }

        match finalize(show, show.date, "", &selection, &grid) {
            Err(err) => {
                prop_assert_eq!(err, CoreError::EmptySelection);
                prop_assert!(selection.is_empty());
            }
            Ok(confirmation) => {
                let expected: Vec<String> = selection
                    .selected_indices()
                    .into_iter()
                    .map(|i| grid.label(i))
                    .collect();
                prop_assert_eq!(&confirmation.seats, &expected);
                prop_assert_eq!(confirmation.total, show.price.times(selection.selected_count()));
            }
        }
    }
}

#[test]
fn reference_scenario_eight_by_twelve() {
    let grid = GridConfig::new(8, 12).unwrap();
    assert_eq!(occupied_count(grid.total_seats()), 14);

    let catalog = Catalog::showcase();
    let show = catalog.find_show("mv-neo-noir").unwrap();
    let occupied: BTreeSet<SeatIndex> = [5, 6, 7].into_iter().map(SeatIndex).collect();

    let mut selection = SelectionState::new();
    selection.set_key(BookingKey::new(&show.id, show.date, ""), Money::from_major(15));
    selection.toggle(SeatIndex(0), &occupied);
    selection.toggle(SeatIndex(13), &occupied);

    let summary = summarize(&selection);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total, Money::from_major(30));

    let confirmation = finalize(show, show.date, "", &selection, &grid).unwrap();
    assert_eq!(confirmation.seats, vec!["R1S1", "R2S2"]);
}
