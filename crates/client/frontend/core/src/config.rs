//! Frontend configuration structures and loaders.
//!
//! UI settings shared across frontend implementations (CLI, GUI, etc.).

use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_COIN_MESSAGES` - Log every coin pickup (default: false)
    /// - `SHOW_CLEAR_MESSAGES` - Log jumped/slid obstacles (default: false)
    /// - `SHOW_POWER_UP_MESSAGES` - Log power-up pickups and expiry (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("SHOW_COIN_MESSAGES") {
            config.messages.visibility.show_coins = show;
        }
        if let Some(show) = read_env_bool("SHOW_CLEAR_MESSAGES") {
            config.messages.visibility.show_clears = show;
        }
        if let Some(show) = read_env_bool("SHOW_POWER_UP_MESSAGES") {
            config.messages.visibility.show_power_ups = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Which simulation events produce messages.
///
/// Phase changes, run summaries and milestones are always shown.
#[derive(Clone, Debug)]
pub struct MessageVisibility {
    /// Coins are frequent and already visible on the scoreboard.
    pub show_coins: bool,
    pub show_clears: bool,
    pub show_power_ups: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_coins: false,
            show_clears: false,
            show_power_ups: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
