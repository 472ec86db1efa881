//! # Conversation
//!
//! The append-only record of the chat. Messages are only ever pushed;
//! nothing mutates or removes an entry once it is in.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat turn. `content` is stored exactly as it will be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Ordered message sequence. Append-only by construction: the only
/// mutating operations are the push methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: String) {
        self.push(Message {
            role: Role::User,
            content,
        });
    }

    pub fn push_assistant(&mut self, content: String) {
        self.push(Message {
            role: Role::Assistant,
            content,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut conv = Conversation::new();
        conv.push_user("first".to_string());
        conv.push_assistant("second".to_string());
        conv.push_user("third".to_string());

        let contents: Vec<&str> = conv.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_roles_are_recorded() {
        let mut conv = Conversation::new();
        conv.push_user("q".to_string());
        conv.push_assistant("a".to_string());
        assert_eq!(conv.messages[0].role, Role::User);
        assert_eq!(conv.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_empty_and_len() {
        let mut conv = Conversation::new();
        assert!(conv.is_empty());
        assert_eq!(conv.len(), 0);
        conv.push_user("x".to_string());
        assert!(!conv.is_empty());
        assert_eq!(conv.len(), 1);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message {
            role: Role::Assistant,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_message_round_trips_through_serde() {
        let msg = Message {
            role: Role::User,
            content: "Buy milk".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
