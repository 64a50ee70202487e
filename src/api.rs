//! HTTP client for the Thomas backend.
//!
//! One thin facade over reqwest: each endpoint method sends a single request
//! with the configured timeout and normalizes the response. There is no retry
//! or backoff; a failure surfaces once and degrades to a visible error
//! bubble at the call site. The backend attaches a structured `error` field
//! to both 200 and 4xx payloads, so that field is checked before the HTTP
//! status.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::types::{
    ChatRequest, ChatResponse, ConversationCreated, ConversationHistory, ConversationId,
    DeleteOutcome, NewsRequest, NewsResponse, StoredMessage,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A successful `/chat` exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Assistant reply text.
    pub response: String,
    /// Conversation the exchange was stored under, when the server reports
    /// one (it allocates an id on the first message of a conversation).
    pub conversation_id: Option<ConversationId>,
}

/// Backend operations the app layer depends on.
///
/// `ApiClient` is the production implementation; tests substitute a mock so
/// the event loop can be exercised without a server.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Send a chat message, optionally into an existing conversation.
    async fn chat(
        &self,
        message: &str,
        conversation: Option<ConversationId>,
    ) -> Result<ChatReply, ApiError>;

    /// Request a news summary for a topic.
    async fn news(&self, query: &str) -> Result<String, ApiError>;

    /// Fetch the stored messages of a conversation.
    async fn conversation(&self, id: ConversationId) -> Result<Vec<StoredMessage>, ApiError>;

    /// Create a fresh, empty conversation.
    async fn create_conversation(&self) -> Result<ConversationId, ApiError>;

    /// Delete a conversation; returns whether the server removed it.
    async fn delete_conversation(&self, id: ConversationId) -> Result<bool, ApiError>;
}

/// reqwest-backed client for the Thomas backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from resolved server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        // Fall back to reqwest defaults if builder creation fails for any reason.
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Normalize a response: structured `error` payloads win over the HTTP
    /// status, non-2xx without one becomes a status error, and a 2xx body
    /// parses into the endpoint's payload type.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Some(message) = extract_error_field(&body) {
                return Err(ApiError::Backend(message));
            }
            return Err(ApiError::Status(status.as_u16(), body));
        }
        response.json::<T>().await.map_err(ApiError::from)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn chat(
        &self,
        message: &str,
        conversation: Option<ConversationId>,
    ) -> Result<ChatReply, ApiError> {
        debug!(conversation = ?conversation, "sending chat message");
        let request = ChatRequest {
            message: message.to_string(),
            conversation_id: conversation,
        };
        let response = self.http.post(self.url("/chat")).json(&request).send().await?;
        let payload: ChatResponse = Self::parse(response).await?;
        if let Some(message) = payload.error {
            return Err(ApiError::Backend(message));
        }
        let response = payload
            .response
            .ok_or_else(|| ApiError::Backend("backend returned no response".to_string()))?;
        Ok(ChatReply {
            response,
            conversation_id: payload.conversation_id,
        })
    }

    async fn news(&self, query: &str) -> Result<String, ApiError> {
        debug!(query, "requesting news");
        let request = NewsRequest {
            query: query.to_string(),
        };
        let response = self.http.post(self.url("/news")).json(&request).send().await?;
        let payload: NewsResponse = Self::parse(response).await?;
        if let Some(message) = payload.error {
            return Err(ApiError::Backend(message));
        }
        payload
            .news
            .ok_or_else(|| ApiError::Backend("backend returned no news".to_string()))
    }

    async fn conversation(&self, id: ConversationId) -> Result<Vec<StoredMessage>, ApiError> {
        debug!(%id, "loading conversation");
        let response = self
            .http
            .get(self.url(&format!("/conversation/{id}")))
            .send()
            .await?;
        let payload: ConversationHistory = Self::parse(response).await?;
        Ok(payload.messages)
    }

    async fn create_conversation(&self) -> Result<ConversationId, ApiError> {
        debug!("creating conversation");
        let response = self
            .http
            .post(self.url("/conversation/new"))
            .send()
            .await?;
        let payload: ConversationCreated = Self::parse(response).await?;
        Ok(payload.id)
    }

    async fn delete_conversation(&self, id: ConversationId) -> Result<bool, ApiError> {
        debug!(%id, "deleting conversation");
        let response = self
            .http
            .delete(self.url(&format!("/conversation/{id}/delete")))
            .send()
            .await?;
        let payload: DeleteOutcome = Self::parse(response).await?;
        Ok(payload.success)
    }
}

/// Pull the `error` field out of a JSON body, if there is one.
fn extract_error_field(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorEnvelope {
        error: Option<String>,
    }
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `count` connections, answering each with a fixed HTTP response.
    async fn one_shot_server(response: String, count: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for _ in 0..count {
                let (mut stream, _) = listener.accept().await.expect("accept");
                let mut request_buf = [0u8; 4096];
                let _ = stream.read(&mut request_buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(base_url: String) -> ApiClient {
        ApiClient::new(&ServerConfig {
            base_url,
            timeout_secs: 3,
        })
    }

    #[tokio::test]
    async fn chat_returns_reply_and_conversation_id() {
        let body = r#"{"response": "Hello!", "conversation_id": 12}"#;
        let base = one_shot_server(http_response("200 OK", body), 1).await;

        let reply = client_for(base)
            .chat("hi", None)
            .await
            .expect("chat should succeed");
        assert_eq!(reply.response, "Hello!");
        assert_eq!(reply.conversation_id, Some(ConversationId(12)));
    }

    // A 200 payload carrying `error` is an application failure, not a reply.
    #[tokio::test]
    async fn chat_surfaces_error_payload() {
        let body = r#"{"error": "No message provided"}"#;
        let base = one_shot_server(http_response("200 OK", body), 1).await;

        let err = client_for(base).chat("", None).await.expect_err("must fail");
        match err {
            ApiError::Backend(message) => assert_eq!(message, "No message provided"),
            other => panic!("expected backend error, got: {other}"),
        }
    }

    // 4xx with a structured error body surfaces the message, not the status.
    #[tokio::test]
    async fn error_field_wins_over_status_code() {
        let body = r#"{"error": "No message provided"}"#;
        let base = one_shot_server(http_response("400 Bad Request", body), 1).await;

        let err = client_for(base).chat("", None).await.expect_err("must fail");
        assert!(matches!(err, ApiError::Backend(_)), "got: {err}");
    }

    #[tokio::test]
    async fn unstructured_failure_keeps_status_code() {
        let base =
            one_shot_server(http_response("500 Internal Server Error", "boom"), 1).await;

        let err = client_for(base).news("tech").await.expect_err("must fail");
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn news_returns_summary() {
        let body = r#"{"news": "Latest tech trends..."}"#;
        let base = one_shot_server(http_response("200 OK", body), 1).await;

        let news = client_for(base)
            .news("technology trends")
            .await
            .expect("news should succeed");
        assert_eq!(news, "Latest tech trends...");
    }

    #[tokio::test]
    async fn conversation_returns_stored_messages() {
        let body = r#"{"messages": [
            {"content": "hi", "role": "user"},
            {"content": "hello!", "role": "assistant"}
        ]}"#;
        let base = one_shot_server(http_response("200 OK", body), 1).await;

        let messages = client_for(base)
            .conversation(ConversationId(4))
            .await
            .expect("load should succeed");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_user());
    }

    #[tokio::test]
    async fn create_and_delete_round_trip_ids() {
        let base = one_shot_server(http_response("200 OK", r#"{"id": 9}"#), 1).await;
        let id = client_for(base)
            .create_conversation()
            .await
            .expect("create should succeed");
        assert_eq!(id, ConversationId(9));

        let base =
            one_shot_server(http_response("200 OK", r#"{"success": true}"#), 1).await;
        assert!(client_for(base)
            .delete_conversation(id)
            .await
            .expect("delete should succeed"));
    }

    #[tokio::test]
    async fn client_respects_timeout_policy() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and intentionally keep it open so the client
        // must hit its configured timeout.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = ApiClient::new(&ServerConfig {
            base_url: format!("http://{addr}"),
            timeout_secs: 1,
        });
        let err = client.chat("hello", None).await.expect_err("timeout expected");
        match err {
            ApiError::Http(inner) => assert!(inner.is_timeout(), "unexpected error: {inner}"),
            other => panic!("expected timeout Http error, got: {other}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ServerConfig {
            base_url: "http://example.com/".to_string(),
            timeout_secs: 3,
        });
        assert_eq!(client.url("/chat"), "http://example.com/chat");
    }
}
