//! Common type definitions for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a chat-platform user as handed to command logic.
///
/// The chat layer constructs this from the message author, so command
/// handlers and the store never touch platform-specific user objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatUser {
    /// External chat-platform identity (Discord snowflake as text).
    pub id: String,
    /// Display name at the time of the interaction.
    pub name: String,
}

impl ChatUser {
    /// Creates a new chat user identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum TallyError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_user_display() {
        let user = ChatUser::new("123456789", "horst");
        assert_eq!(format!("{user}"), "horst (123456789)");
    }

    #[test]
    fn test_chat_user_roundtrips_through_serde() {
        let user = ChatUser::new("42", "anna");
        let yaml = serde_yaml::to_string(&user).unwrap();
        let back: ChatUser = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, user);
    }
}
