//! # ShowTime Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `SHOWTIME_*` variables
//! 3. Build the booking session
//! 4. Run the console until `quit` or end of input

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match showtime_terminal_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("showtime: {err}");
            ExitCode::FAILURE
        }
    }
}
