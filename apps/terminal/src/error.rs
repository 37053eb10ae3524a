//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  console line: "seat 9 1"                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Bad input? ──── ValidationError ───────────────┐               │  │
//! │  │         │                                       ▼               │  │
//! │  │  Booking rule? ── CoreError::EmptySelection ── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  text output:  error [EMPTY_SELECTION]: Please select at least one seat.│
//! │  json output:  {"code":"EMPTY_SELECTION","message":"..."}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use showtime_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::state::ConfigError;

/// Failure that stops the console application.
///
/// Command failures are [`ApiError`]s and are rendered to the user; an
/// `AppError` ends the process with a failing exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad `SHOWTIME_*` configuration at startup
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading commands or writing output failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Show not found: mv-unknown"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Show does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Booking submitted with no seats
    EmptySelection,

    /// Seat command before a showing was chosen
    NoShowingSelected,

    /// Seat outside the grid
    SeatOutOfRange,

    /// Console could not parse the line
    UnknownCommand,

    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Wire name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::EmptySelection => "EMPTY_SELECTION",
            ErrorCode::NoShowingSelected => "NO_SHOWING_SELECTED",
            ErrorCode::SeatOutOfRange => "SEAT_OUT_OF_RANGE",
            ErrorCode::UnknownCommand => "UNKNOWN_COMMAND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ShowNotFound(id) => ApiError::not_found("Show", &id),
            CoreError::EmptySelection => {
                ApiError::new(ErrorCode::EmptySelection, CoreError::EmptySelection.to_string())
            }
            CoreError::NoShowingSelected => ApiError::new(
                ErrorCode::NoShowingSelected,
                "Select a showing first (try `select <show-id>`)",
            ),
            err @ CoreError::SeatOutOfRange { .. } => {
                ApiError::new(ErrorCode::SeatOutOfRange, err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
