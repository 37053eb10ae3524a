//! # Error Types
//!
//! Domain-specific error types for showtime-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  showtime-core errors (this file)                                      │
//! │  ├── CoreError        - Booking flow errors                            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in app)                                          │
//! │  ├── ConfigError      - Invalid environment configuration              │
//! │  └── ApiError         - What the console sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Toggling an occupied seat and duplicate occupancy draws are prevented by
//! construction. They never surface as error variants.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking flow errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Show id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - A stale "Book Ticket" link after the catalog changed
    /// - A typo in the console `select` command
    ///
    /// Callers must not build a seat grid for a missing show.
    #[error("Show not found: {0}")]
    ShowNotFound(String),

    /// Booking was submitted with zero seats selected.
    ///
    /// ## User Workflow
    /// ```text
    /// Submit booking (0 seats)
    ///      │
    ///      ▼
    /// finalize() → EmptySelection
    ///      │
    ///      ▼
    /// UI shows: "Please select at least one seat."
    /// ```
    #[error("Please select at least one seat.")]
    EmptySelection,

    /// A seat operation arrived before any showing was selected.
    #[error("No showing selected")]
    NoShowingSelected,

    /// Seat index falls outside the configured grid.
    #[error("Seat {index} is outside the seat grid ({total} seats)")]
    SeatOutOfRange { index: usize, total: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before booking logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid date, invalid time).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate show id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SeatOutOfRange {
            index: 120,
            total: 96,
        };
        assert_eq!(
            err.to_string(),
            "Seat 120 is outside the seat grid (96 seats)"
        );
        assert_eq!(
            CoreError::ShowNotFound("th-macbeth".to_string()).to_string(),
            "Show not found: th-macbeth"
        );
    }

    #[test]
    fn test_empty_selection_message_is_user_facing() {
        assert_eq!(
            CoreError::EmptySelection.to_string(),
            "Please select at least one seat."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "show id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: show id is required");
    }
}
