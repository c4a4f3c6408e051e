//! Text rendering for the admin notification channel.
//!
//! Three renderings share one body format (nickname, amount, request id):
//! the initial notification, the post-decision edit, and the short
//! confirmation shown to the administrator after pressing a button.

use crate::status::{Decision, STATUS_PAID};
use crate::types::DbId;

/// Body lines shared by the notification and its post-decision edit.
fn request_summary(nickname: &str, amount: i64, request_id: DbId) -> String {
    format!("\u{1F464} Nick: {nickname}\n\u{1F4B0} Amount: {amount}\n\u{1F194} Request ID: {request_id}")
}

/// The message sent to the administrator when a request is created.
pub fn render_request_notification(nickname: &str, amount: i64, request_id: DbId) -> String {
    format!(
        "\u{1F514} New donation request!\n\n{}",
        request_summary(nickname, amount, request_id)
    )
}

/// The marker line for a terminal decision.
pub fn decision_marker(status: &str) -> &'static str {
    if status == STATUS_PAID {
        "\u{2705} PAID"
    } else {
        "\u{274C} REJECTED"
    }
}

/// The text the original notification is edited to after a decision.
pub fn render_decision_notification(
    status: &str,
    nickname: &str,
    amount: i64,
    request_id: DbId,
) -> String {
    format!(
        "{}\n\n{}",
        decision_marker(status),
        request_summary(nickname, amount, request_id)
    )
}

/// The short confirmation answered back to the callback.
pub fn render_callback_confirmation(status: &str) -> String {
    format!("Status updated: {}", decision_marker(status))
}

/// Button labels paired with each decision.
pub fn button_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Paid => "\u{2705} Paid",
        Decision::NotPaid => "\u{274C} Not paid",
    }
}
