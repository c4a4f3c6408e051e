//! Inbound webhook envelope types.
//!
//! Only the fields this service reads are modeled; unknown fields in the
//! Bot API payload are ignored. A plain message update (or any update that
//! is not a button press) deserializes with `callback_query: None`.

use serde::Deserialize;

/// The top-level webhook update.
#[derive(Debug, Deserialize)]
pub struct Update {
    /// Present when an administrator pressed an inline button.
    pub callback_query: Option<CallbackQuery>,
}

/// A button press on an inline keyboard.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Id used to answer the query.
    pub id: String,
    /// The button's callback token.
    pub data: Option<String>,
    /// The message the keyboard was attached to. Absent for presses on
    /// messages too old for Telegram to include.
    pub message: Option<MessageRef>,
}

/// The notification message a button press refers to.
#[derive(Debug, Deserialize)]
pub struct MessageRef {
    pub message_id: i64,
    pub chat: ChatRef,
}

/// The chat the notification message lives in.
#[derive(Debug, Deserialize)]
pub struct ChatRef {
    pub id: i64,
}
