//! Decision token protocol.
//!
//! A callback button carries a compact token `<action>_<request_id>` where
//! `action` is `paid` or `unpaid` and `request_id` is the decimal primary
//! key of the donation request. [`Decision::token`] produces the encoding,
//! [`DecisionToken::parse`] reverses it. Anything that does not match this
//! exact shape is rejected; no alternate encodings are guessed.

use crate::error::CoreError;
use crate::status::Decision;
use crate::types::DbId;

/// A parsed callback token: the decision and the request it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionToken {
    pub decision: Decision,
    pub request_id: DbId,
}

impl Decision {
    /// Encode this decision as a callback token for the given request.
    pub fn token(self, request_id: DbId) -> String {
        format!("{}_{request_id}", self.action())
    }
}

impl DecisionToken {
    /// Parse a callback token of the shape `<action>_<request_id>`.
    ///
    /// The action must be exactly `paid` or `unpaid` and the id must be a
    /// decimal integer with no extra segments.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let (action, id_part) = token
            .split_once('_')
            .ok_or_else(|| CoreError::Protocol(token.to_string()))?;

        let decision = match action {
            "paid" => Decision::Paid,
            "unpaid" => Decision::NotPaid,
            _ => return Err(CoreError::Protocol(token.to_string())),
        };

        let request_id: DbId = id_part
            .parse()
            .map_err(|_| CoreError::Protocol(token.to_string()))?;

        Ok(DecisionToken {
            decision,
            request_id,
        })
    }
}
