//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the terminal page and a future chat backend.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::chat`]**: Chat messages and the message-exchange request/response pair
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in both Rust and JSON
//! - Optional fields are omitted from JSON when `None`
//! - Enums serialize to lowercase strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::chat::{Message, MessageId, MessageKind};
//!
//! let welcome = Message::bot(MessageId::new("0"), "Welcome aboard.");
//! assert_eq!(welcome.kind, MessageKind::Bot);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
