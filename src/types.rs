//! Data model for the Thomas backend HTTP API.
//!
//! These types serialize/deserialize directly to/from the JSON payloads the
//! backend exchanges on `/chat`, `/news`, and `/conversation/*`. Optional
//! fields are omitted from requests when absent; responses tolerate missing
//! fields because the server only populates the branch it took.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Conversation identity
// ---------------------------------------------------------------------------

/// Opaque integer identifier for a stored conversation.
///
/// The client never interprets the value; it only routes requests with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

// ---------------------------------------------------------------------------
// Stored messages
// ---------------------------------------------------------------------------

/// Conversation participant role.
///
/// The server distinguishes only "user" from everything else when it replays
/// history, so unknown roles deserialize as `Assistant`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End-user message.
    User,
    /// Assistant/model message (and any unrecognized role).
    #[serde(other)]
    Assistant,
}

/// A single message as returned by `GET /conversation/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Raw message text, prior to any rendering.
    pub content: String,
    /// Author role for this conversation turn.
    pub role: Role,
}

impl StoredMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::User,
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::Assistant,
        }
    }

    /// True for messages authored by the end user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Raw user message text.
    pub message: String,

    /// Conversation to append to. Omitted for a fresh exchange; the server
    /// then allocates one and returns its id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
}

/// Response body from `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text, present on success.
    #[serde(default)]
    pub response: Option<String>,
    /// Conversation id the exchange was stored under, when the server
    /// allocated or confirmed one.
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    /// Application-level failure description.
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for `POST /news`.
#[derive(Debug, Clone, Serialize)]
pub struct NewsRequest {
    /// Topic to summarize.
    pub query: String,
}

/// Response body from `POST /news`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    /// News summary text, present on success.
    #[serde(default)]
    pub news: Option<String>,
    /// Application-level failure description.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body from `GET /conversation/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationHistory {
    /// Stored messages in submission order.
    pub messages: Vec<StoredMessage>,
}

/// Response body from `POST /conversation/new`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationCreated {
    /// Identifier of the freshly created conversation.
    pub id: ConversationId,
}

/// Response body from `DELETE /conversation/{id}/delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOutcome {
    /// Whether the server removed the conversation.
    #[serde(default)]
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Verifies the conversation id is omitted from fresh-exchange requests.
    #[test]
    fn serialize_chat_request_without_conversation() {
        let req = ChatRequest {
            message: "hello".into(),
            conversation_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "hello");
        assert!(json.get("conversation_id").is_none());
    }

    // Verifies the conversation id serializes as a bare integer.
    #[test]
    fn serialize_chat_request_with_conversation() {
        let req = ChatRequest {
            message: "hello".into(),
            conversation_id: Some(ConversationId(7)),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["conversation_id"], 7);
    }

    // Verifies success responses deserialize with the error branch absent.
    #[test]
    fn deserialize_chat_response_success() {
        let json = r#"{"response": "Hi there!", "conversation_id": 3}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.as_deref(), Some("Hi there!"));
        assert_eq!(resp.conversation_id, Some(ConversationId(3)));
        assert!(resp.error.is_none());
    }

    // Verifies error responses deserialize with the success branch absent.
    #[test]
    fn deserialize_chat_response_error() {
        let json = r#"{"error": "No message provided"}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.response.is_none());
        assert_eq!(resp.error.as_deref(), Some("No message provided"));
    }

    // Verifies stored history and its role mapping deserialize correctly.
    #[test]
    fn deserialize_conversation_history() {
        let json = r#"{"messages": [
            {"content": "hi", "role": "user"},
            {"content": "hello!", "role": "assistant"}
        ]}"#;
        let history: ConversationHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.messages.len(), 2);
        assert!(history.messages[0].is_user());
        assert!(!history.messages[1].is_user());
    }

    // Unknown roles must fall back to assistant rather than failing the load.
    #[test]
    fn unknown_role_maps_to_assistant() {
        let json = r#"{"content": "configured", "role": "system"}"#;
        let msg: StoredMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn conversation_id_parses_from_trimmed_text() {
        assert_eq!(" 42 ".parse::<ConversationId>().unwrap(), ConversationId(42));
        assert!("abc".parse::<ConversationId>().is_err());
    }

    #[test]
    fn delete_outcome_defaults_to_failure() {
        let outcome: DeleteOutcome = serde_json::from_str("{}").unwrap();
        assert!(!outcome.success);
    }

    #[test]
    fn message_constructors() {
        let usr = StoredMessage::user("hello");
        assert_eq!(usr.role, Role::User);
        assert_eq!(usr.content, "hello");

        let ai = StoredMessage::assistant("world");
        assert_eq!(ai.role, Role::Assistant);
    }
}
