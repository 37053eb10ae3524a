//! # ShowTime Terminal Library
//!
//! Console front end for the ShowTime booking engine.
//!
//! ## Module Organization
//! ```text
//! showtime_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── console.rs      ◄─── Line parsing and rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Shared booking session
//! │   └── config.rs   ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Show listing and search
//! │   └── booking.rs  ◄─── Seat selection and confirmation
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! Two focused state types, each command taking only what it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌────────────────────────────┐     ┌──────────────────────────────┐   │
//! │  │       SessionState         │     │        ConfigState           │   │
//! │  │                            │     │                              │   │
//! │  │  • Arc<Mutex<Booking-      │     │  • Seat grid size            │   │
//! │  │      Session>>             │     │  • Currency symbol           │   │
//! │  │  • catalog, occupancy,     │     │  • RNG seed                  │   │
//! │  │    selection               │     │  • Output format             │   │
//! │  └────────────────────────────┘     └──────────────────────────────┘   │
//! │                                                                         │
//! │  ConfigState is read-only after startup.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use state::{ConfigState, SessionState};

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,showtime=debug; override with RUST_LOG              │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • SHOWTIME_SEAT_ROWS / SHOWTIME_SEAT_COLS / SHOWTIME_RNG_SEED ...   │
/// │                                                                         │
/// │  3. Initialize State                                                    │
/// │     • SessionState: showcase catalog, configured grid                   │
/// │                                                                         │
/// │  4. Console Loop                                                        │
/// │     • One line, one command, until `quit` or EOF                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// - [`AppError::Config`] for an invalid `SHOWTIME_*` variable
/// - [`AppError::Io`] when stdin or stdout fails mid-session
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(
        rows = config.grid.rows(),
        cols = config.grid.cols(),
        seeded = config.rng_seed.is_some(),
        output = ?config.output,
        "Starting ShowTime console"
    );

    let session = SessionState::from_config(&config);
    info!(shows = session.with_session(|s| s.catalog().len()), "Session initialized");

    if let Err(err) = console::run_console(BufReader::new(stdin()), stdout(), &session, &config).await {
        tracing::error!(error = %err, "Console I/O failed");
        return Err(err.into());
    }

    info!("ShowTime console stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=showtime_core=trace` - Trace the booking engine only
/// - Default: `info,showtime=debug`
///
/// Logs go to stderr so stdout carries only console output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,showtime=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
