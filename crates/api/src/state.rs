use std::sync::Arc;

use tipline_telegram::TelegramClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tipline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Telegram transport, `None` when credentials are not configured.
    /// Handlers treat every send as best-effort.
    pub telegram: Option<Arc<TelegramClient>>,
}
