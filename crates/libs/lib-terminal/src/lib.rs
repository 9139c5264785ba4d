//! # Verbot Terminal Core
//!
//! Platform-independent state and behavior behind the terminal page. Nothing in
//! this crate touches the DOM: browser capabilities (wallet providers, window
//! opening, timers) arrive through traits so the page can be driven and tested
//! natively.
//!
//! ## Modules
//!
//! - [`session`] - Message log and transient UI state of the terminal view
//! - [`clock`] - UTC clock display driven by a recurring task
//! - [`entrance`] - One-shot entrance animation trigger
//! - [`node_status`] / [`panels`] - Static side-panel content
//! - [`wallet`] - Wallet connection flow over injected providers
//! - [`chat`] - Chat backend contract (offline in this release)
//! - [`schedule`] - Scheduler abstraction with cancel-on-drop task handles
//! - [`config`] - Page configuration
//! - [`error`] - Error types

pub mod chat;
pub mod clock;
pub mod config;
pub mod entrance;
pub mod error;
pub mod node_status;
pub mod panels;
pub mod schedule;
pub mod session;
pub mod wallet;

pub use config::{init_config, terminal_config, TerminalConfig};
pub use error::{AppError, Result};
pub use session::{LoadPhase, MessageLog, TerminalSession};
