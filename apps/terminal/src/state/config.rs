//! # Configuration State
//!
//! Console configuration, loaded once at startup from environment variables.
//!
//! ## Environment Variables
//! | Variable                   | Default | Meaning                          |
//! |----------------------------|---------|----------------------------------|
//! | `SHOWTIME_SEAT_ROWS`       | `8`     | Seat rows per showing (1..=26)   |
//! | `SHOWTIME_SEAT_COLS`       | `12`    | Seats per row (1..=40)           |
//! | `SHOWTIME_CURRENCY_SYMBOL` | `$`     | Prefix for displayed prices      |
//! | `SHOWTIME_RNG_SEED`        | unset   | Fixed seed for occupancy draws   |
//! | `SHOWTIME_OUTPUT`          | `text`  | `text` or `json`                 |
//!
//! Read-only after initialization, so no mutex needed.

use std::env;
use std::str::FromStr;

use serde::Serialize;
use showtime_core::{GridConfig, Money};

/// Largest row count the console seat map can render.
pub const MAX_SEAT_ROWS: usize = 26;

/// Largest row width the console seat map can render.
pub const MAX_SEAT_COLS: usize = 40;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Seat grid shared by every showing.
    pub grid: GridConfig,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Seed for the occupancy generator; `None` seeds from the OS.
    pub rng_seed: Option<u64>,

    /// How console responses are printed.
    pub output: OutputFormat,
}

/// Console output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines and seat maps
    #[default]
    Text,

    /// One JSON document per response
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("SHOWTIME_OUTPUT".to_string())),
        }
    }
}

impl Default for ConfigState {
    /// 8 x 12 grid, "$", OS-seeded, text output.
    fn default() -> Self {
        ConfigState {
            grid: GridConfig::default(),
            currency_symbol: "$".to_string(),
            rng_seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rows = parse_bounded(&lookup, "SHOWTIME_SEAT_ROWS", GridConfig::DEFAULT_ROWS, MAX_SEAT_ROWS)?;
        let cols = parse_bounded(&lookup, "SHOWTIME_SEAT_COLS", GridConfig::DEFAULT_COLS, MAX_SEAT_COLS)?;
        let grid = GridConfig::new(rows, cols)
            .map_err(|_| ConfigError::InvalidValue("SHOWTIME_SEAT_ROWS/SHOWTIME_SEAT_COLS".to_string()))?;

        let rng_seed = lookup("SHOWTIME_RNG_SEED")
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SHOWTIME_RNG_SEED".to_string()))
            })
            .transpose()?;

        let output = match lookup("SHOWTIME_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(ConfigState {
            grid,
            currency_symbol: lookup("SHOWTIME_CURRENCY_SYMBOL").unwrap_or_else(|| "$".to_string()),
            rng_seed,
            output,
        })
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part().abs()
        )
    }
}

fn parse_bounded<F>(lookup: &F, name: &str, default: usize, max: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(ConfigError::InvalidValue(name.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOWTIME_SEAT_ROWS", "10"),
            ("SHOWTIME_SEAT_COLS", " 10 "),
            ("SHOWTIME_CURRENCY_SYMBOL", "£"),
            ("SHOWTIME_RNG_SEED", "1234"),
            ("SHOWTIME_OUTPUT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.grid.total_seats(), 100);
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.rng_seed, Some(1234));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        assert_eq!(
            load(&[("SHOWTIME_SEAT_ROWS", "0")]).unwrap_err(),
            ConfigError::InvalidValue("SHOWTIME_SEAT_ROWS".to_string())
        );
        assert_eq!(
            load(&[("SHOWTIME_SEAT_COLS", "41")]).unwrap_err(),
            ConfigError::InvalidValue("SHOWTIME_SEAT_COLS".to_string())
        );
        assert_eq!(
            load(&[("SHOWTIME_RNG_SEED", "-1")]).unwrap_err(),
            ConfigError::InvalidValue("SHOWTIME_RNG_SEED".to_string())
        );
        assert_eq!(
            load(&[("SHOWTIME_OUTPUT", "yaml")]).unwrap_err(),
            ConfigError::InvalidValue("SHOWTIME_OUTPUT".to_string())
        );
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_major(15)), "$15.00");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");

        let pounds = ConfigState {
            currency_symbol: "£".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(pounds.format_currency(Money::from_cents(4550)), "£45.50");
    }
}
