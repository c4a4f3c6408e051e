//! Telegram Bot API transport.
//!
//! Outbound: send the admin notification with its decision buttons, edit it
//! after a decision, answer the callback query. Inbound: serde types for
//! the webhook update envelope. All sends are single best-effort attempts
//! with a bounded timeout; callers decide whether a failure matters.

pub mod client;
pub mod outcome;
pub mod update;

pub use client::{TelegramClient, TelegramConfig, TelegramError};
pub use outcome::NotifyOutcome;
