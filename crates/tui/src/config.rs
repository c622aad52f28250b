//! Environment-driven configuration for the terminal frontend.

use std::env;

/// Terminal frontend configuration.
///
/// Environment variables:
/// - `ROLLCALL_SEED_RECORDS` - sample registrations created at startup (default: 0)
/// - `ROLLCALL_SAMPLE_SEED` - RNG seed for reproducible sample data (default: entropy)
/// - `ROLLCALL_STATUS_PANEL_HEIGHT` - status panel height in lines (default: 6, min: 3)
/// - `ROLLCALL_STATUS_CAPACITY` - messages the status log keeps (default: 64, min: 1)
#[derive(Clone, Debug, Default)]
pub struct TuiConfig {
    pub ui: UiConfig,
    /// Sample registrations created before the first frame.
    pub seed_records: u32,
    /// Fixed RNG seed for sample data; `None` seeds from entropy.
    pub sample_seed: Option<u64>,
}

impl TuiConfig {
    /// Creates configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(count) = read_env::<u32>("ROLLCALL_SEED_RECORDS") {
            config.seed_records = count;
        }

        config.sample_seed = read_env::<u64>("ROLLCALL_SAMPLE_SEED");

        if let Some(height) = read_env::<u16>("ROLLCALL_STATUS_PANEL_HEIGHT") {
            config.ui.status_panel_height = height.max(3);
        }

        if let Some(capacity) = read_env::<usize>("ROLLCALL_STATUS_CAPACITY") {
            config.ui.status_capacity = capacity.max(1);
        }

        config
    }
}

/// UI layout configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the status panel in lines (borders included).
    pub status_panel_height: u16,
    /// How many status messages the log keeps before dropping old ones.
    pub status_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_panel_height: 6,
            status_capacity: 64,
        }
    }
}

/// Reads and parses an environment variable, `None` when missing or invalid.
fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
