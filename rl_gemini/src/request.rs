use rl_core::types::message::{Message, ROLE_ASSISTANT};
use serde::{Deserialize, Serialize};

/// Role name the Gemini API uses for assistant turns.
pub const ROLE_MODEL: &str = "model";

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    // Finish chunks may carry a content object with no parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_messages(messages: &[Message]) -> Self {
        GenerateContentRequest {
            contents: messages.iter().map(Content::from).collect(),
        }
    }
}

impl From<&Message> for Content {
    fn from(message: &Message) -> Self {
        // Gemini only accepts "user" and "model" content roles.
        let role = if message.role == ROLE_ASSISTANT {
            ROLE_MODEL
        } else {
            "user"
        };
        Content {
            role: role.to_string(),
            parts: vec![Part {
                text: message.content.clone(),
            }],
        }
    }
}
