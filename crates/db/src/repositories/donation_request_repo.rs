//! Repository for the `donation_requests` table.

use sqlx::PgPool;
use tipline_core::types::DbId;

use crate::models::donation_request::{DecisionContext, DonationRequest};

/// Column list for donation_requests queries.
const REQUEST_COLUMNS: &str =
    "id, nickname, amount, status, notification_ref, created_at, updated_at";

/// Provides persistence operations for donation requests.
pub struct DonationRequestRepo;

impl DonationRequestRepo {
    /// Insert a new pending request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        nickname: &str,
        amount: i64,
    ) -> Result<DonationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO donation_requests (nickname, amount, status)
             VALUES ($1, $2, 'pending')
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, DonationRequest>(&query)
            .bind(nickname)
            .bind(amount)
            .fetch_one(pool)
            .await
    }

    /// Record the notification message id after a successful send.
    ///
    /// Called at most once per request, right after creation.
    pub async fn set_notification_ref(
        pool: &PgPool,
        id: DbId,
        notification_ref: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE donation_requests SET notification_ref = $1 WHERE id = $2")
            .bind(notification_ref)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Apply an administrator decision in a single atomic statement.
    ///
    /// Updates the status and `updated_at`, returning the nickname and
    /// amount needed to re-render the notification. `None` means no row
    /// with that id exists (a stale callback). Concurrent decisions for the
    /// same id race here; last write wins, with no `status = 'pending'`
    /// guard.
    pub async fn apply_decision(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<DecisionContext>, sqlx::Error> {
        sqlx::query_as::<_, DecisionContext>(
            "UPDATE donation_requests
             SET status = $1, updated_at = now()
             WHERE id = $2
             RETURNING nickname, amount",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite the status unconditionally.
    ///
    /// No existence check and no validation of the status value; a missing
    /// id is a no-op. This is the administrative bypass.
    pub async fn override_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE donation_requests
             SET status = $1, updated_at = now()
             WHERE id = $2",
        )
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DonationRequest>, sqlx::Error> {
        let query = format!("SELECT {REQUEST_COLUMNS} FROM donation_requests WHERE id = $1");
        sqlx::query_as::<_, DonationRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
