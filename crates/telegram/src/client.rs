//! Telegram Bot API client.
//!
//! [`TelegramClient`] wraps a timeout-bounded `reqwest::Client` and speaks
//! the three Bot API methods this service needs: `sendMessage` (with an
//! inline decision keyboard), `editMessageText`, and `answerCallbackQuery`.
//! Every call is a single attempt; there is no retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use tipline_core::notification::button_label;
use tipline_core::status::Decision;
use tipline_core::types::DbId;

/// HTTP request timeout for a single Bot API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default Bot API host.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for Bot API call failures.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Bot API returned a non-2xx status code.
    #[error("Telegram returned HTTP {0}")]
    HttpStatus(u16),

    /// The Bot API answered 2xx but the body did not carry the expected
    /// result payload.
    #[error("Malformed Telegram response: {0}")]
    MalformedResponse(String),
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Credentials and destination for the admin notification channel.
///
/// Built once at startup and passed in; business logic never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot credential used in the API path.
    pub bot_token: String,
    /// Chat id of the administrator who approves requests.
    pub admin_chat_id: String,
    /// Bot API host, overridable for tests.
    pub api_base: String,
}

impl TelegramConfig {
    /// Load the transport configuration from environment variables.
    ///
    /// | Env Var                  | Meaning                     |
    /// |--------------------------|-----------------------------|
    /// | `TELEGRAM_BOT_TOKEN`     | bot credential              |
    /// | `TELEGRAM_ADMIN_CHAT_ID` | admin destination chat      |
    /// | `TELEGRAM_API_BASE`      | API host (optional)         |
    ///
    /// Returns `None` when either credential is missing or empty; the
    /// service then runs with notifications disabled.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let admin_chat_id = std::env::var("TELEGRAM_ADMIN_CHAT_ID").ok()?;
        if bot_token.is_empty() || admin_chat_id.is_empty() {
            return None;
        }
        let api_base =
            std::env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        Some(Self {
            bot_token,
            admin_chat_id,
            api_base,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Inline keyboard markup attached to the notification message.
#[derive(Debug, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// A single inline keyboard button carrying a decision token.
#[derive(Debug, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardMarkup {
    /// The one-row, two-button decision keyboard for a request.
    pub fn decision_keyboard(request_id: DbId) -> Self {
        let buttons = [Decision::Paid, Decision::NotPaid]
            .into_iter()
            .map(|decision| InlineKeyboardButton {
                text: button_label(decision).to_string(),
                callback_data: decision.token(request_id),
            })
            .collect();
        Self {
            inline_keyboard: vec![buttons],
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

// ---------------------------------------------------------------------------
// TelegramClient
// ---------------------------------------------------------------------------

/// Sends admin notifications and callback responses through the Bot API.
pub struct TelegramClient {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a new client with a pre-configured HTTP client.
    pub fn new(config: TelegramConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Full URL for a Bot API method.
    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.config.api_base, self.config.bot_token
        )
    }

    /// Send the admin notification for a new request.
    ///
    /// Returns the Telegram message id on success; the caller persists it
    /// as the request's notification reference.
    pub async fn send_request_notification(
        &self,
        text: &str,
        request_id: DbId,
    ) -> Result<i64, TelegramError> {
        let payload = serde_json::json!({
            "chat_id": self.config.admin_chat_id,
            "text": text,
            "reply_markup": InlineKeyboardMarkup::decision_keyboard(request_id),
        });

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TelegramError::HttpStatus(response.status().as_u16()));
        }

        let body: SendMessageResponse = response.json().await?;
        let message_id = body
            .result
            .map(|m| m.message_id)
            .ok_or_else(|| TelegramError::MalformedResponse("missing result".into()))?;
        Ok(message_id)
    }

    /// Edit a previously sent message to the given text.
    ///
    /// Addressed by the chat and message ids carried in the callback
    /// envelope, not by the stored notification reference.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> Result<(), TelegramError> {
        let payload = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        self.post_checked("editMessageText", &payload).await
    }

    /// Answer a callback query with a short confirmation.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: &str,
    ) -> Result<(), TelegramError> {
        let payload = serde_json::json!({
            "callback_query_id": callback_query_id,
            "text": text,
        });
        self.post_checked("answerCallbackQuery", &payload).await
    }

    /// Execute a single POST request and check the response status.
    async fn post_checked(
        &self,
        method: &str,
        payload: &serde_json::Value,
    ) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TelegramError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
