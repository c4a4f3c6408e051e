//! Explicit result of the best-effort notification side channel.
//!
//! Creating a request and notifying the administrator are separate
//! outcomes: the first decides the HTTP response, the second is logged and
//! only controls whether a notification reference gets persisted.

use crate::client::TelegramError;

/// What happened to the admin notification for a newly created request.
#[derive(Debug)]
pub enum NotifyOutcome {
    /// The notification was sent; the message id becomes the request's
    /// notification reference.
    Sent { message_id: i64 },
    /// The transport is not configured; nothing was attempted.
    Skipped,
    /// The send was attempted and failed.
    Failed(TelegramError),
}

impl NotifyOutcome {
    /// The message id to persist, if the send succeeded.
    pub fn message_id(&self) -> Option<i64> {
        match self {
            NotifyOutcome::Sent { message_id } => Some(*message_id),
            _ => None,
        }
    }

    /// Wrap a send result into an outcome.
    pub fn from_result(result: Result<i64, TelegramError>) -> Self {
        match result {
            Ok(message_id) => NotifyOutcome::Sent { message_id },
            Err(err) => NotifyOutcome::Failed(err),
        }
    }
}
