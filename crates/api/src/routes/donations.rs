//! Route definitions for donation request intake and override.
//!
//! ```text
//! POST   /intake    create_donation     (public donation form)
//! PUT    /intake    override_status     (administrative bypass)
//! ```
//!
//! Any other method on `/intake` answers 405 with a JSON error body.

use axum::routing::post;
use axum::Router;

use crate::handlers::donations;
use crate::routes::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/intake",
        post(donations::create_donation)
            .put(donations::override_status)
            .fallback(method_not_allowed),
    )
}
