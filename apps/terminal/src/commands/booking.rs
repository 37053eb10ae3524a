//! # Booking Commands
//!
//! Seat selection and booking confirmation.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ No       │────►│ Showing  │────►│  Seats   │────►│ Receipt  │       │
//! │  │ showing  │     │ selected │     │ selected │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │              select_showing   toggle_seat     confirm_booking           │
//! │                                    │                 │                  │
//! │                                    ▼                 ▼                  │
//! │                             clear_selection ───► (back to no seats)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use showtime_core::validation::{validate_show_date, validate_show_id, validate_show_time};
use showtime_core::{
    BookingConfirmation, BookingKey, BookingSummary, CoreError, SeatMap, SeatPosition,
    SelectionChange, ValidationError,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::catalog::ShowDto;
use crate::error::ApiError;
use crate::state::SessionState;

/// Seat grid of the showing just selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapResponse {
    pub show: ShowDto,
    pub seat_map: SeatMap,
    pub summary: BookingSummary,
}

/// Outcome of one seat click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// `R{row}S{seat}`
    pub seat: String,
    pub change: SelectionChange,
    pub summary: BookingSummary,
}

/// Current booking state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub key: Option<BookingKey>,
    pub show: Option<ShowDto>,
    pub seat_map: Option<SeatMap>,
    /// Labels of selected seats, ascending.
    pub selected_seats: Vec<String>,
    pub summary: BookingSummary,
}

/// Confirmed booking with a reference number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    /// UUID v4
    pub reference: String,
    /// RFC 3339
    pub confirmed_at: String,
    pub booking: BookingConfirmation,
}

/// Switches to a showing and returns its seat map.
///
/// ## Behavior
/// - `date` defaults to the show's own date
/// - `time` is normalized to `HH:MM`; unset means no specific time
/// - Any previous selection is discarded, even when re-selecting the same
///   showing
/// - Occupied seats are drawn the first time a showing is selected and
///   stay fixed for the session
///
/// ## Errors
/// `NOT_FOUND` for unknown shows (no grid is built), `VALIDATION_ERROR`
/// for malformed input.
pub fn select_showing(
    session: &SessionState,
    show_id: String,
    date: Option<String>,
    time: Option<String>,
) -> Result<SeatMapResponse, ApiError> {
    debug!(show_id = %show_id, ?date, ?time, "select_showing command");

    validate_show_id(&show_id)?;
    let date = date.as_deref().map(validate_show_date).transpose()?;
    let time = validate_show_time(time.as_deref().unwrap_or(""))?;

    session.with_session_mut(|s| {
        let seat_map = s.select_showing(show_id.trim(), date, &time)?;
        let show = s.catalog().require_show(&seat_map.key.show_id)?;
        Ok(SeatMapResponse {
            show: ShowDto::from(show),
            seat_map,
            summary: s.summary(),
        })
    })
}

/// Toggles the seat at 1-based `row` and `seat`, as printed on labels.
///
/// Occupied seats answer `unavailable` and change nothing.
pub fn toggle_seat(
    session: &SessionState,
    row: usize,
    seat: usize,
) -> Result<ToggleResponse, ApiError> {
    debug!(row = %row, seat = %seat, "toggle_seat command");

    session.with_session_mut(|s| {
        if s.selection().key().is_none() {
            return Err(CoreError::NoShowingSelected.into());
        }
        let grid = *s.grid();
        let position = SeatPosition::new(
            one_based(row, "row", grid.rows())?,
            one_based(seat, "seat", grid.cols())?,
        );

        let change = s.toggle_position(position)?;
        Ok(ToggleResponse {
            seat: position.label(),
            change,
            summary: s.summary(),
        })
    })
}

/// Gets the current booking: showing, seat map, selected seats and totals.
pub fn get_booking(session: &SessionState) -> BookingResponse {
    debug!("get_booking command");
    session.with_session(|s| BookingResponse {
        key: s.selection().key().cloned(),
        show: s.current_show().map(ShowDto::from),
        seat_map: s.seat_map(),
        selected_seats: s
            .selection()
            .selected_indices()
            .into_iter()
            .map(|i| s.grid().label(i))
            .collect(),
        summary: s.summary(),
    })
}

/// Deselects every seat. The showing stays selected.
pub fn clear_selection(session: &SessionState) -> BookingResponse {
    debug!("clear_selection command");
    session.with_session_mut(|s| s.clear_selection());
    get_booking(session)
}

/// Confirms the selected seats.
///
/// ## Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Finalize the selection (fails with EMPTY_SELECTION if none)         │
/// │  2. Clear the selection; the showing stays selected                     │
/// │  3. Stamp a booking reference and confirmation time                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Nothing is persisted; the receipt is the only record.
pub fn confirm_booking(session: &SessionState) -> Result<ReceiptResponse, ApiError> {
    debug!("confirm_booking command");

    let booking = session.with_session_mut(|s| s.confirm_booking())?;
    let receipt = ReceiptResponse {
        reference: Uuid::new_v4().to_string(),
        confirmed_at: Utc::now().to_rfc3339(),
        booking,
    };

    info!(
        reference = %receipt.reference,
        show_id = %receipt.booking.show_id,
        seats = receipt.booking.seat_count,
        total = %receipt.booking.total,
        "Receipt issued"
    );
    Ok(receipt)
}

/// Converts a 1-based console coordinate to a zero-based one.
fn one_based(value: usize, field: &str, max: usize) -> Result<usize, ValidationError> {
    if (1..=max).contains(&value) {
        Ok(value - 1)
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: max as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use showtime_core::{BookingSession, Catalog, GridConfig, Money, RngSource, SeatIndex, SeatStatus};

    fn seeded() -> SessionState {
        SessionState::new(BookingSession::new(
            Catalog::showcase(),
            GridConfig::default(),
            RngSource::seeded(5),
        ))
    }

    fn free_seat(session: &SessionState) -> (usize, usize) {
        let map = get_booking(session).seat_map.unwrap();
        let index = (0..map.seats.len())
            .find(|i| map.status(SeatIndex(*i)) == Some(SeatStatus::Available))
            .unwrap();
        (index / map.cols + 1, index % map.cols + 1)
    }

    #[test]
    fn test_select_showing_defaults_and_normalizes() {
        let session = seeded();
        let response =
            select_showing(&session, "th-hamlet".into(), None, Some("7:30".into())).unwrap();

        assert_eq!(response.show.title, "Hamlet – Royal Theatre");
        assert_eq!(response.seat_map.key.date.to_string(), "2025-10-18");
        assert_eq!(response.seat_map.key.time, "07:30");
        assert_eq!(response.seat_map.count(SeatStatus::Occupied), 14);
        assert_eq!(response.summary, BookingSummary::default());
    }

    #[test]
    fn test_select_unknown_show_keeps_previous_showing() {
        let session = seeded();
        select_showing(&session, "th-hamlet".into(), None, None).unwrap();

        let err = select_showing(&session, "th-macbeth".into(), None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_booking(&session).key.unwrap().show_id, "th-hamlet");
    }

    #[test]
    fn test_select_rejects_bad_date_and_time() {
        let session = seeded();
        let err =
            select_showing(&session, "th-hamlet".into(), Some("tomorrow".into()), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err =
            select_showing(&session, "th-hamlet".into(), None, Some("25:00".into())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_booking(&session).key.is_none());
    }

    #[test]
    fn test_toggle_requires_showing_and_valid_coordinates() {
        let session = seeded();
        assert_eq!(
            toggle_seat(&session, 1, 1).unwrap_err().code,
            ErrorCode::NoShowingSelected
        );

        select_showing(&session, "mv-neo-noir".into(), None, None).unwrap();
        let err = toggle_seat(&session, 0, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "row must be between 1 and 8");
        assert_eq!(
            toggle_seat(&session, 1, 13).unwrap_err().message,
            "seat must be between 1 and 12"
        );
    }

    #[test]
    fn test_toggle_twice_restores_booking() {
        let session = seeded();
        select_showing(&session, "mv-neo-noir".into(), None, None).unwrap();
        let (row, seat) = free_seat(&session);

        let first = toggle_seat(&session, row, seat).unwrap();
        assert_eq!(first.change, SelectionChange::Selected);
        assert_eq!(first.seat, format!("R{}S{}", row, seat));
        assert_eq!(first.summary.total, Money::from_major(15));

        let second = toggle_seat(&session, row, seat).unwrap();
        assert_eq!(second.change, SelectionChange::Deselected);
        assert_eq!(second.summary, BookingSummary::default());
    }

    #[test]
    fn test_occupied_seat_is_unavailable() {
        let session = seeded();
        let response = select_showing(&session, "sp-championship".into(), None, None).unwrap();
        let map = response.seat_map;
        let taken = (0..map.seats.len())
            .find(|i| map.status(SeatIndex(*i)) == Some(SeatStatus::Occupied))
            .unwrap();

        let toggle = toggle_seat(&session, taken / map.cols + 1, taken % map.cols + 1).unwrap();
        assert_eq!(toggle.change, SelectionChange::Unavailable);
        assert_eq!(toggle.summary.count, 0);
    }

    #[test]
    fn test_confirm_booking_issues_receipt_and_clears() {
        let session = seeded();
        select_showing(&session, "ct-rock-legends".into(), None, Some("20:00".into())).unwrap();
        let (row, seat) = free_seat(&session);
        toggle_seat(&session, row, seat).unwrap();

        let receipt = confirm_booking(&session).unwrap();
        assert!(Uuid::parse_str(&receipt.reference).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&receipt.confirmed_at).is_ok());
        assert_eq!(receipt.booking.seats, vec![format!("R{}S{}", row, seat)]);
        assert_eq!(receipt.booking.total, Money::from_major(65));
        assert_eq!(receipt.booking.time, "20:00");

        let after = get_booking(&session);
        assert!(after.selected_seats.is_empty());
        assert_eq!(after.key.unwrap().show_id, "ct-rock-legends");
    }

    #[test]
    fn test_confirm_empty_booking_fails() {
        let session = seeded();
        assert_eq!(
            confirm_booking(&session).unwrap_err().code,
            ErrorCode::NoShowingSelected
        );

        select_showing(&session, "cm-standup-night".into(), None, None).unwrap();
        let err = confirm_booking(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptySelection);
        assert_eq!(err.message, "Please select at least one seat.");
    }

    #[test]
    fn test_clear_selection_keeps_showing() {
        let session = seeded();
        select_showing(&session, "th-musical-dreams".into(), None, None).unwrap();
        let (row, seat) = free_seat(&session);
        toggle_seat(&session, row, seat).unwrap();
        assert_eq!(get_booking(&session).selected_seats.len(), 1);

        let cleared = clear_selection(&session);
        assert!(cleared.selected_seats.is_empty());
        assert_eq!(cleared.summary.count, 0);
        assert!(cleared.seat_map.is_some());
    }
}
