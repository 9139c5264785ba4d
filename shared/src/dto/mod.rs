//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the terminal page and the chat backend contract.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat messages, message kinds, and the chat request/response pair
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Timestamps**: RFC 3339 strings via chrono's serde support
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "content": "What is SOL trading at?",
//!   "wallet_address": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"
//! }
//! ```
//!
//! ```text
//! {
//!   "reply": {
//!     "id": "1",
//!     "kind": "bot",
//!     "content": "SOL is trading at ...",
//!     "timestamp": "2026-10-16T12:00:00Z"
//!   }
//! }
//! ```

pub mod chat;

pub use chat::*;
