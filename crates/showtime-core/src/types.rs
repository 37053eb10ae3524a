//! # Domain Types
//!
//! Core domain types used throughout ShowTime.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ShowRecord    │   │   BookingKey    │   │   GridConfig    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  show_id        │   │  rows (8)       │       │
//! │  │  title          │   │  date           │   │  cols (12)      │       │
//! │  │  category       │   │  time           │   └────────┬────────┘       │
//! │  │  date, price    │   └─────────────────┘            │                │
//! │  └─────────────────┘                                  ▼                │
//! │                                   ┌─────────────────┐   ┌────────────┐ │
//! │                                   │  SeatPosition   │◄─►│ SeatIndex  │ │
//! │                                   │  row, col       │   │ row*cols+c │ │
//! │                                   └─────────────────┘   └────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;

// =============================================================================
// Category
// =============================================================================

/// Kind of show, used by the category chips and the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Concert,
    Theatre,
    Comedy,
    Sports,
}

impl Category {
    /// All categories in chip order.
    pub const ALL: [Category; 5] = [
        Category::Movie,
        Category::Concert,
        Category::Theatre,
        Category::Comedy,
        Category::Sports,
    ];

    /// Lowercase name, as used on the wire and in the console.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Concert => "concert",
            Category::Theatre => "theatre",
            Category::Comedy => "comedy",
            Category::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Show Record
// =============================================================================

/// A show in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShowRecord {
    /// Unique identifier, e.g. `mv-neo-noir`.
    pub id: String,

    /// Display title.
    pub title: String,

    pub category: Category,

    /// Default date of the show.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// City and venue as free text, e.g. "London, West End".
    pub location: String,

    pub venue: String,

    /// Price per seat.
    pub price: Money,

    /// Poster image for card rendering.
    pub image_url: Option<String>,
}

// =============================================================================
// Booking Key
// =============================================================================

/// Identifies one showing instance: (show, date, time).
///
/// Two keys are equal iff all three components match exactly.
/// An unset time is the empty string, so `"19:30"` and `""` are
/// different showings of the same show on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingKey {
    pub show_id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub time: String,
}

impl BookingKey {
    /// Creates a key. `time` is stored as given; pass `""` when unset.
    pub fn new(show_id: impl Into<String>, date: NaiveDate, time: impl Into<String>) -> Self {
        BookingKey {
            show_id: show_id.into(),
            date,
            time: time.into(),
        }
    }
}

/// `show_id|date|time`
impl fmt::Display for BookingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.show_id, self.date, self.time)
    }
}

// =============================================================================
// Seat Index & Position
// =============================================================================

/// Flat seat index: `row * cols + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeatIndex(pub usize);

impl SeatIndex {
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for SeatIndex {
    fn from(value: usize) -> Self {
        SeatIndex(value)
    }
}

impl fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based (row, col) of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
}

impl SeatPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        SeatPosition { row, col }
    }

    /// Human-readable label, 1-based: row 0 col 0 is `R1S1`.
    pub fn label(&self) -> String {
        format!("R{}S{}", self.row + 1, self.col + 1)
    }
}

// =============================================================================
// Grid Configuration
// =============================================================================

/// Seat grid dimensions. Both sides are always > 0.
///
/// ## Index Mapping
/// ```text
///            col 0  col 1  ...  col 11
///   row 0  [   0 ][   1 ]      [  11 ]
///   row 1  [  12 ][  13 ]      [  23 ]
///   ...
///   row 7  [  84 ][  85 ]      [  95 ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
}

impl GridConfig {
    pub const DEFAULT_ROWS: usize = 8;
    pub const DEFAULT_COLS: usize = 12;

    /// Creates a grid, rejecting zero rows or columns.
    pub fn new(rows: usize, cols: usize) -> ValidationResult<Self> {
        if rows == 0 {
            return Err(ValidationError::MustBePositive {
                field: "rows".to_string(),
            });
        }
        if cols == 0 {
            return Err(ValidationError::MustBePositive {
                field: "cols".to_string(),
            });
        }
        Ok(GridConfig { rows, cols })
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub const fn total_seats(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `index` addresses a seat of this grid.
    #[inline]
    pub const fn contains(&self, index: SeatIndex) -> bool {
        index.0 < self.total_seats()
    }

    /// Flat index of a position, or `None` when the position is off-grid.
    pub fn index_of(&self, position: SeatPosition) -> Option<SeatIndex> {
        (position.row < self.rows && position.col < self.cols)
            .then(|| SeatIndex(position.row * self.cols + position.col))
    }

    /// Inverse of [`GridConfig::index_of`].
    pub const fn position_of(&self, index: SeatIndex) -> SeatPosition {
        SeatPosition {
            row: index.0 / self.cols,
            col: index.0 % self.cols,
        }
    }

    /// `R{row+1}S{col+1}` label for a flat index.
    pub fn label(&self, index: SeatIndex) -> String {
        self.position_of(index).label()
    }

    /// All seat indices in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = SeatIndex> {
        (0..self.total_seats()).map(SeatIndex)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
