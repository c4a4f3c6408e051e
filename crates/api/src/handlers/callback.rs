//! Handler for the Telegram webhook.
//!
//! Telegram re-delivers any update that was not answered with HTTP 200, so
//! this endpoint acknowledges everything it can parse: health-check
//! traffic, malformed tokens, and stale callbacks are all logged and
//! acked without side effects. Only a storage failure surfaces as an
//! error response.

use axum::extract::State;
use axum::Json;

use tipline_core::decision::DecisionToken;
use tipline_core::notification::{render_callback_confirmation, render_decision_notification};
use tipline_core::types::DbId;
use tipline_db::models::donation_request::DecisionContext;
use tipline_db::repositories::DonationRequestRepo;
use tipline_telegram::update::{CallbackQuery, Update};

use crate::error::AppResult;
use crate::response::CallbackAck;
use crate::state::AppState;

/// POST /callback
///
/// Apply the administrator's decision carried by an inline-button press:
/// parse the decision token, transition the request, edit the original
/// notification, and answer the callback query.
pub async fn telegram_callback(
    State(state): State<AppState>,
    Json(update): Json<Update>,
) -> AppResult<Json<CallbackAck>> {
    // Updates without a button press (health checks, plain messages) are
    // acknowledged with no side effects.
    let Some(query) = update.callback_query else {
        return Ok(Json(CallbackAck { ok: true }));
    };

    let Some(data) = query.data.as_deref() else {
        tracing::warn!(callback_id = %query.id, "Callback query without data, ignoring");
        return Ok(Json(CallbackAck { ok: true }));
    };

    let token = match DecisionToken::parse(data) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(callback_id = %query.id, error = %err, "Ignoring malformed callback");
            return Ok(Json(CallbackAck { ok: true }));
        }
    };

    let status = token.decision.target_status();

    // Single atomic statement: transition + fetch the fields needed to
    // re-render the notification. Zero rows means the callback references
    // a request that no longer exists (stale button); skip silently.
    let Some(context) =
        DonationRequestRepo::apply_decision(&state.pool, token.request_id, status).await?
    else {
        tracing::warn!(
            request_id = token.request_id,
            "Decision callback for unknown request, skipping"
        );
        return Ok(Json(CallbackAck { ok: true }));
    };

    tracing::info!(
        request_id = token.request_id,
        status,
        "Donation request status updated via callback"
    );

    sync_notification(&state, &query, status, &context, token.request_id).await;

    Ok(Json(CallbackAck { ok: true }))
}

/// Edit the notification message and answer the callback query.
///
/// Both sends are independent and best-effort; a failure of either leaves
/// the stored transition in place.
async fn sync_notification(
    state: &AppState,
    query: &CallbackQuery,
    status: &str,
    context: &DecisionContext,
    request_id: DbId,
) {
    let Some(client) = &state.telegram else {
        return;
    };

    // The edit targets the message the button lives under, addressed by
    // the ids the callback itself carries.
    if let Some(message) = &query.message {
        let text =
            render_decision_notification(status, &context.nickname, context.amount, request_id);
        if let Err(err) = client
            .edit_message_text(message.chat.id, message.message_id, &text)
            .await
        {
            tracing::warn!(request_id, error = %err, "Failed to edit notification message");
        }
    }

    let confirmation = render_callback_confirmation(status);
    if let Err(err) = client.answer_callback_query(&query.id, &confirmation).await {
        tracing::warn!(request_id, error = %err, "Failed to answer callback query");
    }
}
