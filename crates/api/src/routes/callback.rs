//! Route definition for the Telegram webhook.
//!
//! ```text
//! POST   /callback    telegram_callback
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::callback;
use crate::routes::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/callback",
        post(callback::telegram_callback).fallback(method_not_allowed),
    )
}
