use crate::types::message::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateTextRequest {
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_messages_payload() {
        let json = r#"{"messages":[{"role":"user","content":"Hello"}]}"#;
        let request: GenerateTextRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "Hello");
    }

    #[test]
    fn parse_preserves_message_order() {
        let json = r#"{"messages":[
            {"role":"system","content":"be brief"},
            {"role":"user","content":"hi"},
            {"role":"assistant","content":"hey"},
            {"role":"user","content":"bye"}
        ]}"#;
        let request: GenerateTextRequest = serde_json::from_str(json).unwrap();
        let contents: Vec<&str> = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["be brief", "hi", "hey", "bye"]);
    }

    #[test]
    fn missing_messages_is_an_error() {
        let result = serde_json::from_str::<GenerateTextRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"messages":[],"model":"whatever","stream":true}"#;
        let request: GenerateTextRequest = serde_json::from_str(json).unwrap();
        assert!(request.messages.is_empty());
    }
}
