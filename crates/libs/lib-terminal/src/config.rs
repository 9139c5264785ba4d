//! # Terminal Configuration
//!
//! Page-level settings with built-in defaults. Overrides may be supplied as JSON
//! (any omitted field keeps its default) and are validated before use.
//!
//! ## Global Config Access
//!
//! Use [`terminal_config()`] to read the process-wide configuration. Call
//! [`init_config()`] once at startup to install overrides; without it the
//! defaults are used.
//!
//! ```rust
//! use lib_terminal::config::terminal_config;
//!
//! let config = terminal_config();
//! assert_eq!(config.clock_tick_ms, 1000);
//! ```

use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_BRAND: &str = "Verbot Terminal";
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome to Verbot Terminal. I'm your AI trading assistant. How can I help you today?";
pub const DEFAULT_WALLET_INSTALL_URL: &str = "https://phantom.app/";
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;
pub const DEFAULT_ENTRANCE_DELAY_MS: u64 = 100;

/// Terminal page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Product name shown in the terminal header
    pub brand: String,

    /// Text of the bot message every session starts with
    pub welcome_message: String,

    /// Page opened when no wallet provider is injected
    pub wallet_install_url: String,

    /// Clock refresh period in milliseconds
    pub clock_tick_ms: u64,

    /// Delay between first render and the entrance animation, in milliseconds
    pub entrance_delay_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            wallet_install_url: DEFAULT_WALLET_INSTALL_URL.to_string(),
            clock_tick_ms: DEFAULT_CLOCK_TICK_MS,
            entrance_delay_ms: DEFAULT_ENTRANCE_DELAY_MS,
        }
    }
}

impl TerminalConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("invalid terminal config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.clock_tick_ms == 0 {
            return Err(AppError::Config("clock_tick_ms must be greater than 0".to_string()));
        }

        if self.welcome_message.trim().is_empty() {
            return Err(AppError::Config("welcome_message must not be empty".to_string()));
        }

        if !(self.wallet_install_url.starts_with("https://")
            || self.wallet_install_url.starts_with("http://"))
        {
            return Err(AppError::Config(format!(
                "wallet_install_url must be an http(s) URL, got '{}'",
                self.wallet_install_url
            )));
        }

        Ok(())
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }
}

/// Global configuration instance (initialized at most once).
static CONFIG: OnceLock<TerminalConfig> = OnceLock::new();

/// Install the global configuration.
///
/// Fails if the configuration is invalid or was already installed.
pub fn init_config(config: TerminalConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("terminal config already initialized".to_string()))
}

/// Get the global configuration, falling back to defaults.
pub fn terminal_config() -> &'static TerminalConfig {
    CONFIG.get_or_init(TerminalConfig::default)
}
