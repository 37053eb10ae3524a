//! # Validation Module
//!
//! Input validation for values that arrive from the UI layer as text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console / UI binding                                         │
//! │  ├── Tokenizing, argument counts                                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Show ids, dates, times, search text                               │
//! │  └── Prices                                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  ├── GridConfig (rows, cols > 0)                                       │
//! │  └── SelectionState (never holds an occupied seat)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use showtime_core::validation::{validate_show_date, validate_show_time};
//!
//! let date = validate_show_date("2025-10-18").unwrap();
//! assert_eq!(date.to_string(), "2025-10-18");
//!
//! assert_eq!(validate_show_time("7:30").unwrap(), "07:30");
//! assert_eq!(validate_show_time("").unwrap(), "");
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRICE_CENTS, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a show id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Lowercase letters, digits and hyphens only (`mv-neo-noir`)
pub fn validate_show_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "show id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "show id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "show id".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum [`MAX_SEARCH_QUERY_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Date & Time Validators
// =============================================================================

/// Parses a `YYYY-MM-DD` date, the format of an HTML date input.
pub fn validate_show_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

/// Normalizes a show time to `HH:MM`.
///
/// ## Rules
/// - Empty is allowed (no time chosen); it stays empty
/// - Otherwise must parse as `H:MM` or `HH:MM` on a 24-hour clock
///
/// Normalizing matters because the time is part of the [`crate::BookingKey`]:
/// `7:30` and `07:30` must address the same showing.
pub fn validate_show_time(value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(String::new());
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "expected HH:MM".to_string(),
        })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a seat price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free screenings)
/// - At most [`MAX_PRICE_CENTS`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
