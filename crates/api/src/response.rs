//! Shared response envelope types for API handlers.
//!
//! The wire shapes here are the public contract of the service: the intake
//! and override endpoints answer with a `success` flag, the Telegram
//! webhook endpoint acknowledges with `{ "ok": true }` regardless of
//! internal outcome.

use serde::Serialize;
use tipline_core::types::DbId;

/// Response for a successfully created donation request.
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub request_id: DbId,
}

/// Response for the status override endpoint.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

/// Acknowledgement for the Telegram webhook endpoint.
///
/// Telegram re-delivers updates whose webhook call did not answer 200, so
/// the callback handler returns this for every processable envelope.
#[derive(Debug, Serialize)]
pub struct CallbackAck {
    pub ok: bool,
}
