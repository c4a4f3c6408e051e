//! Donation request model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tipline_core::types::{DbId, Timestamp};

/// A row from the `donation_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonationRequest {
    pub id: DbId,
    pub nickname: String,
    pub amount: i64,
    pub status: String,
    /// Telegram message id of the admin notification, if one was sent.
    pub notification_ref: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for the intake endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonationRequest {
    pub nickname: String,
    pub amount: i64,
}

/// Request body for the status override endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideStatusRequest {
    pub request_id: DbId,
    pub status: String,
}

/// Projection returned by a decision UPDATE, used to re-render the
/// notification message without a second query.
#[derive(Debug, Clone, FromRow)]
pub struct DecisionContext {
    pub nickname: String,
    pub amount: i64,
}
