//! # Catalog
//!
//! The static list of shows and the search filter over it.
//!
//! ## Search Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShowFilter { location: "london", date: None, category: Theatre }       │
//! │                                                                         │
//! │  location  → case-insensitive substring of location OR venue           │
//! │  date      → exact match on the show date                              │
//! │  genre     → exact match (search form select)                          │
//! │  category  → exact match (category chip)                                │
//! │                                                                         │
//! │  Unset criteria match everything. Results keep catalog order.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, ShowRecord};
use crate::validation::{validate_price, validate_show_id, ValidationResult};

/// Search criteria from the search form and category chips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowFilter {
    /// Free text matched against location and venue.
    pub location: String,
    pub date: Option<NaiveDate>,
    /// Genre picked in the search form.
    pub genre: Option<Category>,
    /// Category chip. Applied independently of `genre`, so a disagreeing
    /// pair matches nothing.
    pub category: Option<Category>,
}

impl ShowFilter {
    /// Whether `show` satisfies every set criterion.
    pub fn matches(&self, show: &ShowRecord) -> bool {
        let needle = self.location.trim().to_lowercase();
        let location_ok = needle.is_empty()
            || show.location.to_lowercase().contains(&needle)
            || show.venue.to_lowercase().contains(&needle);
        let date_ok = self.date.map_or(true, |d| d == show.date);
        let genre_ok = self.genre.map_or(true, |g| g == show.category);
        let category_ok = self.category.map_or(true, |c| c == show.category);

        location_ok && date_ok && genre_ok && category_ok
    }
}

/// Read-only show catalog, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    shows: Vec<ShowRecord>,
}

impl Catalog {
    /// Builds a catalog, checking ids and prices.
    ///
    /// ## Errors
    /// - `InvalidFormat` / `Required` for a malformed id
    /// - `Duplicate` when two records share an id
    /// - `OutOfRange` for a negative or oversized price
    pub fn new(shows: Vec<ShowRecord>) -> ValidationResult<Self> {
        let mut seen = HashSet::with_capacity(shows.len());
        for show in &shows {
            validate_show_id(&show.id)?;
            validate_price(show.price)?;
            if !seen.insert(show.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "show id".to_string(),
                    value: show.id.clone(),
                });
            }
        }
        Ok(Catalog { shows })
    }

    /// The built-in showcase lineup.
    pub fn showcase() -> Self {
        Catalog {
            shows: showcase_shows(),
        }
    }

    /// All shows in insertion order.
    pub fn list_shows(&self) -> &[ShowRecord] {
        &self.shows
    }

    /// Looks a show up by id. `None` when absent.
    pub fn find_show(&self, id: &str) -> Option<&ShowRecord> {
        self.shows.iter().find(|s| s.id == id)
    }

    /// Like [`Catalog::find_show`] but with a typed not-found error.
    pub fn require_show(&self, id: &str) -> CoreResult<&ShowRecord> {
        self.find_show(id)
            .ok_or_else(|| CoreError::ShowNotFound(id.to_string()))
    }

    /// Shows matching `filter`, catalog order preserved.
    pub fn search(&self, filter: &ShowFilter) -> Vec<&ShowRecord> {
        self.shows.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::showcase()
    }
}

// =============================================================================
// Showcase Data
// =============================================================================

/// (id, title, category, (y, m, d), location, venue, price, image id)
type ShowSeed = (
    &'static str,
    &'static str,
    Category,
    (i32, u32, u32),
    &'static str,
    &'static str,
    i64,
    &'static str,
);

const SHOWCASE: &[ShowSeed] = &[
    (
        "mv-neo-noir",
        "Neon City – A Noir Saga",
        Category::Movie,
        (2025, 10, 15),
        "New York, AMC Empire 25",
        "AMC Empire 25",
        15,
        "photo-1517604931442-7e0c8ed2963f",
    ),
    (
        "ct-rock-legends",
        "Rock Legends Live",
        Category::Concert,
        (2025, 10, 20),
        "Los Angeles, The Forum",
        "The Forum",
        65,
        "photo-1511671782779-c97d3d27a1d4",
    ),
    (
        "th-hamlet",
        "Hamlet – Royal Theatre",
        Category::Theatre,
        (2025, 10, 18),
        "London, West End",
        "Globe Theatre",
        40,
        "photo-1533236897111-3e94666b2edf",
    ),
    (
        "cm-standup-night",
        "Laugh Out Loud – Standup Night",
        Category::Comedy,
        (2025, 10, 25),
        "Chicago, The Laugh Factory",
        "The Laugh Factory",
        30,
        "photo-1461360370896-922624d12aa1",
    ),
    (
        "sp-championship",
        "Championship Finals",
        Category::Sports,
        (2025, 11, 1),
        "Tokyo, National Stadium",
        "National Stadium",
        80,
        "photo-1461896836934-ffe607ba8211",
    ),
    (
        "mv-cosmic-odyssey",
        "Cosmic Odyssey",
        Category::Movie,
        (2025, 10, 22),
        "San Francisco, Alamo Drafthouse",
        "Alamo Drafthouse",
        18,
        "photo-1512428559087-560fa5ceab42",
    ),
    (
        "ct-symphony-night",
        "Symphony Under The Stars",
        Category::Concert,
        (2025, 10, 28),
        "Vienna, City Park",
        "Vienna City Park",
        50,
        "photo-1511379938547-c1f69419868d",
    ),
    (
        "th-musical-dreams",
        "Musical of Dreams",
        Category::Theatre,
        (2025, 10, 26),
        "Paris, Théâtre Mogador",
        "Théâtre Mogador",
        55,
        "photo-1503095396549-807759245b35",
    ),
];

fn showcase_shows() -> Vec<ShowRecord> {
    SHOWCASE
        .iter()
        .filter_map(
            |&(id, title, category, (y, m, d), location, venue, price, image)| {
                // The table above only holds valid calendar dates.
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                Some(ShowRecord {
                    id: id.to_string(),
                    title: title.to_string(),
                    category,
                    date,
                    location: location.to_string(),
                    venue: venue.to_string(),
                    price: Money::from_major(price),
                    image_url: Some(format!(
                        "https://images.unsplash.com/{image}?q=80&w=1200&auto=format&fit=crop"
                    )),
                })
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
