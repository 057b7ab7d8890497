//! Wire shapes exchanged with the catalogue/assistant backend.

use serde::{Deserialize, Serialize};

use crate::item::Item;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TilesResponse {
    #[serde(default)]
    pub tiles: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizesRequest {
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizesResponse {
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// `"user"` or `"bot"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: "user".into(),
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            kind: "bot".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub suggested_options: Option<Vec<String>>,
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
