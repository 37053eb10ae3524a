//! # Console Front End
//!
//! Line-oriented interface over the command layer.
//!
//! ## Console Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► ConsoleCommand::parse ──► execute ──► commands::*      │
//! │                      │                       │                          │
//! │                 bad syntax               Result<Dto, ApiError>          │
//! │                      │                       │                          │
//! │                      ▼                       ▼                          │
//! │                 ApiError ──────────────► render (text | json) ──► stdout│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In JSON mode every response is exactly one line, so the console can be
//! driven by another program.

use serde::Serialize;
use showtime_core::{BookingSummary, SeatMap, SeatStatus, SelectionChange};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::commands::booking::{
    self, BookingResponse, ReceiptResponse, SeatMapResponse, ToggleResponse,
};
use crate::commands::catalog::{self, ShowDto};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat, SessionState};

/// Usage line and description of every console command.
const HELP: &[(&str, &str)] = &[
    ("shows", "List all shows"),
    (
        "search [location=..] [date=YYYY-MM-DD] [genre=..] [category=..]",
        "Filter shows",
    ),
    ("show <show-id>", "Show details"),
    ("select <show-id> [YYYY-MM-DD] [HH:MM]", "Pick a showing and view its seats"),
    ("seat <row> <seat>", "Select or deselect a seat (also: seat R2S3)"),
    ("seats", "Redraw the seat map"),
    ("summary", "Selected seats and total"),
    ("clear", "Deselect all seats"),
    ("book", "Confirm the selected seats"),
    ("help", "This list"),
    ("quit", "Leave the console"),
];

// =============================================================================
// Parsing
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Shows,
    Search {
        location: Option<String>,
        date: Option<String>,
        genre: Option<String>,
        category: Option<String>,
    },
    Show(String),
    Select {
        show_id: String,
        date: Option<String>,
        time: Option<String>,
    },
    /// 1-based, as printed on seat labels.
    Seat { row: usize, seat: usize },
    Seats,
    Summary,
    Clear,
    Book,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ApiError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let verb = verb.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("shows" | "list", []) => ConsoleCommand::Shows,
            ("search", args) => parse_search(args)?,
            ("show", [id]) => ConsoleCommand::Show(id.to_string()),
            ("select", [id]) => ConsoleCommand::Select {
                show_id: id.to_string(),
                date: None,
                time: None,
            },
            // A lone second argument with a colon is a time, not a date
            ("select", [id, time]) if time.contains(':') => ConsoleCommand::Select {
                show_id: id.to_string(),
                date: None,
                time: Some(time.to_string()),
            },
            ("select", [id, date]) => ConsoleCommand::Select {
                show_id: id.to_string(),
                date: Some(date.to_string()),
                time: None,
            },
            ("select", [id, date, time]) => ConsoleCommand::Select {
                show_id: id.to_string(),
                date: Some(date.to_string()),
                time: Some(time.to_string()),
            },
            ("seat", [label]) => parse_label(label)?,
            ("seat", [row, seat]) => ConsoleCommand::Seat {
                row: parse_number(row, "row")?,
                seat: parse_number(seat, "seat")?,
            },
            ("seats" | "map", []) => ConsoleCommand::Seats,
            ("summary", []) => ConsoleCommand::Summary,
            ("clear", []) => ConsoleCommand::Clear,
            ("book" | "confirm", []) => ConsoleCommand::Book,
            ("help" | "?", []) => ConsoleCommand::Help,
            ("quit" | "exit", []) => ConsoleCommand::Quit,
            (verb, _) => return Err(usage_error(verb)),
        };
        Ok(Some(command))
    }
}

/// `search` takes `key=value` words; bare words extend the previous value,
/// so `location=new york` works.
fn parse_search(args: &[&str]) -> Result<ConsoleCommand, ApiError> {
    let mut location: Vec<&str> = Vec::new();
    let mut date = None;
    let mut genre = None;
    let mut category = None;
    let mut current = "location";

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                current = key;
                match key {
                    "location" => location.push(value),
                    "date" => date = Some(value.to_string()),
                    "genre" => genre = Some(value.to_string()),
                    "category" => category = Some(value.to_string()),
                    other => {
                        return Err(ApiError::validation(format!(
                            "Unknown search field `{}`; use location, date, genre or category",
                            other
                        )))
                    }
                }
            }
            None if current == "location" => location.push(*arg),
            None => {
                return Err(ApiError::validation(format!(
                    "Unexpected `{}` after {}=",
                    arg, current
                )))
            }
        }
    }

    Ok(ConsoleCommand::Search {
        location: (!location.is_empty()).then(|| location.join(" ")),
        date,
        genre,
        category,
    })
}

/// Accepts seat labels such as `R2S3`, case-insensitive.
fn parse_label(label: &str) -> Result<ConsoleCommand, ApiError> {
    let upper = label.to_ascii_uppercase();
    let parsed = upper
        .strip_prefix('R')
        .and_then(|rest| rest.split_once('S'))
        .and_then(|(row, seat)| Some((row.parse().ok()?, seat.parse().ok()?)));

    match parsed {
        Some((row, seat)) => Ok(ConsoleCommand::Seat { row, seat }),
        None => Err(ApiError::validation(format!(
            "Expected `seat <row> <seat>` or a label like R2S3, got `{}`",
            label
        ))),
    }
}

fn parse_number(value: &str, field: &str) -> Result<usize, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a number, got `{}`", field, value)))
}

fn usage_error(verb: &str) -> ApiError {
    match HELP
        .iter()
        .find(|(usage, _)| usage.split_whitespace().next() == Some(verb))
    {
        Some((usage, _)) => ApiError::validation(format!("Usage: {}", usage)),
        None => ApiError::unknown_command(format!("Unknown command `{}` (try `help`)", verb)),
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Rendered response to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn show(output: String) -> Self {
        Reply {
            output,
            quit: false,
        }
    }

    fn error(config: &ConfigState, err: ApiError) -> Self {
        Reply::show(render::<(), _>(config, Err(err), |_| String::new()))
    }
}

#[derive(Debug, Serialize)]
struct HelpEntry {
    usage: &'static str,
    description: &'static str,
}

/// Runs one command against the session and renders the result.
pub fn execute(command: ConsoleCommand, session: &SessionState, config: &ConfigState) -> Reply {
    debug!(?command, "Console command");

    let output = match command {
        ConsoleCommand::Shows => render(config, Ok(catalog::list_shows(session)), |shows| {
            text::show_list(config, shows)
        }),
        ConsoleCommand::Search {
            location,
            date,
            genre,
            category,
        } => render(
            config,
            catalog::search_shows(session, location, date, genre, category),
            |shows| text::show_list(config, shows),
        ),
        ConsoleCommand::Show(id) => render(config, catalog::get_show(session, id), |show| {
            text::show_detail(config, show)
        }),
        ConsoleCommand::Select {
            show_id,
            date,
            time,
        } => render(
            config,
            booking::select_showing(session, show_id, date, time),
            |response| text::showing(config, response),
        ),
        ConsoleCommand::Seat { row, seat } => render(
            config,
            booking::toggle_seat(session, row, seat),
            |response| text::toggle(config, response),
        ),
        ConsoleCommand::Seats => render(config, Ok(booking::get_booking(session)), |booking| {
            text::seats(booking)
        }),
        ConsoleCommand::Summary => render(config, Ok(booking::get_booking(session)), |booking| {
            text::booking_summary(config, booking)
        }),
        ConsoleCommand::Clear => render(config, Ok(booking::clear_selection(session)), |booking| {
            format!("Selection cleared.\n{}", text::summary_line(config, &booking.summary))
        }),
        ConsoleCommand::Book => render(config, booking::confirm_booking(session), |receipt| {
            text::receipt(config, receipt)
        }),
        ConsoleCommand::Help => {
            let entries: Vec<HelpEntry> = HELP
                .iter()
                .map(|&(usage, description)| HelpEntry { usage, description })
                .collect();
            render(config, Ok(entries), |_| text::help())
        }
        ConsoleCommand::Quit => {
            let output = match config.output {
                OutputFormat::Text => "Goodbye.".to_string(),
                OutputFormat::Json => String::new(),
            };
            return Reply { output, quit: true };
        }
    };

    Reply::show(output)
}

fn render<T, F>(config: &ConfigState, result: Result<T, ApiError>, text: F) -> String
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match (config.output, result) {
        (OutputFormat::Text, Ok(value)) => text(&value),
        (OutputFormat::Text, Err(err)) => format!("error [{}]: {}", err.code.as_str(), err.message),
        (OutputFormat::Json, Ok(value)) => to_json(&value),
        (OutputFormat::Json, Err(err)) => to_json(&err),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        let err = ApiError::internal(err.to_string());
        serde_json::json!({ "code": err.code, "message": err.message }).to_string()
    })
}

/// Reads commands until `quit` or end of input.
pub async fn run_console<R, W>(
    reader: R,
    mut writer: W,
    session: &SessionState,
    config: &ConfigState,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if config.output == OutputFormat::Text {
        writer
            .write_all(b"ShowTime booking console. Type `help` for commands.\n")
            .await?;
        writer.flush().await?;
    }

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match ConsoleCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => execute(command, session, config),
            Err(err) => {
                debug!(line = %line, error = %err, "Rejected console line");
                Reply::error(config, err)
            }
        };

        if !reply.output.is_empty() {
            writer.write_all(reply.output.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;

        if reply.quit {
            break;
        }
    }

    Ok(())
}

// =============================================================================
// Text Rendering
// =============================================================================

mod text {
    use super::*;

    pub(super) fn show_list(config: &ConfigState, shows: &[ShowDto]) -> String {
        if shows.is_empty() {
            return "No shows match.".to_string();
        }
        shows
            .iter()
            .map(|s| {
                format!(
                    "{:<20} {}  {:<8} {:>8}  {} ({})",
                    s.id,
                    s.date,
                    s.category.as_str(),
                    config.format_currency(s.price),
                    s.title,
                    s.location
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn show_detail(config: &ConfigState, show: &ShowDto) -> String {
        format!(
            "{}\n  id:       {}\n  category: {}\n  date:     {}\n  where:    {}, {}\n  price:    {} per seat",
            show.title,
            show.id,
            show.category,
            show.date,
            show.venue,
            show.location,
            config.format_currency(show.price)
        )
    }

    pub(super) fn showing(config: &ConfigState, response: &SeatMapResponse) -> String {
        let key = &response.seat_map.key;
        format!(
            "{} | {}{}\n{}, {}\n\n{}\n{}",
            response.show.title,
            key.date,
            if key.time.is_empty() {
                String::new()
            } else {
                format!(" {}", key.time)
            },
            response.show.venue,
            response.show.location,
            seat_map(&response.seat_map),
            summary_line(config, &response.summary)
        )
    }

    pub(super) fn toggle(config: &ConfigState, response: &ToggleResponse) -> String {
        let what = match response.change {
            SelectionChange::Selected => "selected",
            SelectionChange::Deselected => "deselected",
            SelectionChange::Unavailable => "is already taken",
        };
        format!(
            "{} {}\n{}",
            response.seat,
            what,
            summary_line(config, &response.summary)
        )
    }

    pub(super) fn seats(booking: &BookingResponse) -> String {
        match &booking.seat_map {
            Some(map) => seat_map(map),
            None => no_showing(),
        }
    }

    pub(super) fn booking_summary(config: &ConfigState, booking: &BookingResponse) -> String {
        let (Some(key), Some(show)) = (&booking.key, &booking.show) else {
            return no_showing();
        };
        let selected = if booking.selected_seats.is_empty() {
            "none".to_string()
        } else {
            booking.selected_seats.join(", ")
        };
        format!(
            "{} | {}{}\nSelected: {}\n{}",
            show.title,
            key.date,
            if key.time.is_empty() {
                String::new()
            } else {
                format!(" {}", key.time)
            },
            selected,
            summary_line(config, &booking.summary)
        )
    }

    pub(super) fn receipt(config: &ConfigState, receipt: &ReceiptResponse) -> String {
        let booking = &receipt.booking;
        format!(
            "Booking confirmed\n  reference: {}\n  show:      {}\n  venue:     {}\n  date:      {}{}\n  seats:     {}\n  total:     {} x {} = {}",
            receipt.reference,
            booking.show_title,
            booking.venue,
            booking.date,
            if booking.time.is_empty() {
                String::new()
            } else {
                format!(" {}", booking.time)
            },
            booking.seats.join(", "),
            booking.seat_count,
            config.format_currency(booking.price_per_seat),
            config.format_currency(booking.total)
        )
    }

    pub(super) fn summary_line(config: &ConfigState, summary: &BookingSummary) -> String {
        format!(
            "Seats: {} | Total: {}",
            summary.count,
            config.format_currency(summary.total)
        )
    }

    pub(super) fn help() -> String {
        let mut out = String::from("Commands:");
        for (usage, description) in HELP {
            out.push_str(&format!("\n  {:<54} {}", usage, description));
        }
        out
    }

    /// Column numbers, then one line per row: `.` free, `x` taken, `*` yours.
    pub(super) fn seat_map(map: &SeatMap) -> String {
        let mut out = String::from("    ");
        for col in 1..=map.cols {
            out.push_str(&format!("{:>3}", col));
        }
        for row in 0..map.rows {
            out.push_str(&format!("\nR{:<3}", row + 1));
            for status in map.row(row) {
                let symbol = match status {
                    SeatStatus::Available => '.',
                    SeatStatus::Occupied => 'x',
                    SeatStatus::Selected => '*',
                };
                out.push_str(&format!("{:>3}", symbol));
            }
        }
        out.push_str("\n    . free   x taken   * selected");
        out
    }

    fn no_showing() -> String {
        "No showing selected. Use `select <show-id>` first.".to_string()
    }
}
