//! Handlers for donation request intake and status override.
//!
//! Intake persists the request first and treats the admin notification as
//! a best-effort side channel: a missing or failing transport never fails
//! the request itself, it only leaves the notification reference unset.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tipline_core::notification::render_request_notification;
use tipline_core::status::is_known_status;
use tipline_core::validation::validate_new_request;
use tipline_db::models::donation_request::{
    CreateDonationRequest, DonationRequest, OverrideStatusRequest,
};
use tipline_db::repositories::DonationRequestRepo;
use tipline_telegram::NotifyOutcome;

use crate::error::AppResult;
use crate::response::{AckResponse, IntakeResponse};
use crate::state::AppState;

/// POST /intake
///
/// Validate and persist a new donation request, then notify the
/// administrator. The response reports creation success regardless of the
/// notification outcome.
pub async fn create_donation(
    State(state): State<AppState>,
    Json(input): Json<CreateDonationRequest>,
) -> AppResult<impl IntoResponse> {
    validate_new_request(&input.nickname, input.amount)?;

    let request = DonationRequestRepo::create(&state.pool, &input.nickname, input.amount).await?;

    tracing::info!(
        request_id = request.id,
        nickname = %request.nickname,
        amount = request.amount,
        "Donation request created"
    );

    let outcome = notify_admin(&state, &request).await;
    match &outcome {
        NotifyOutcome::Sent { message_id } => {
            // The send already succeeded; a failure to record its id must
            // not turn the created request into an error response.
            if let Err(err) =
                DonationRequestRepo::set_notification_ref(&state.pool, request.id, &message_id.to_string())
                    .await
            {
                tracing::error!(
                    request_id = request.id,
                    error = %err,
                    "Failed to persist notification reference"
                );
            }
            tracing::info!(
                request_id = request.id,
                message_id,
                "Admin notification sent"
            );
        }
        NotifyOutcome::Skipped => {
            tracing::info!(
                request_id = request.id,
                "Telegram transport not configured, notification skipped"
            );
        }
        NotifyOutcome::Failed(err) => {
            tracing::warn!(
                request_id = request.id,
                error = %err,
                "Admin notification failed"
            );
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(IntakeResponse {
            success: true,
            request_id: request.id,
        }),
    ))
}

/// Send the admin notification for a freshly created request.
async fn notify_admin(state: &AppState, request: &DonationRequest) -> NotifyOutcome {
    let Some(client) = &state.telegram else {
        return NotifyOutcome::Skipped;
    };

    let text = render_request_notification(&request.nickname, request.amount, request.id);
    NotifyOutcome::from_result(client.send_request_notification(&text, request.id).await)
}

/// PUT /intake
///
/// Unconditionally overwrite the stored status for a request id: no
/// validation of the value, no existence check, no notification edit. This
/// is the administrative bypass around the callback flow.
pub async fn override_status(
    State(state): State<AppState>,
    Json(input): Json<OverrideStatusRequest>,
) -> AppResult<impl IntoResponse> {
    if !is_known_status(&input.status) {
        tracing::warn!(
            request_id = input.request_id,
            status = %input.status,
            "Override writes a status outside the known set"
        );
    }

    DonationRequestRepo::override_status(&state.pool, input.request_id, &input.status).await?;

    tracing::info!(
        request_id = input.request_id,
        status = %input.status,
        "Donation request status overridden"
    );

    Ok(Json(AckResponse { success: true }))
}
