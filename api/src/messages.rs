//! Anonymous messages: submission with a local word cap, plus queries.

use serde_json::json;
use store::SessionStore;

use crate::client::Client;
use crate::error::Error;
use crate::types::{AnonymousMessage, Envelope, MessagesPayload};

/// Upper bound the backend enforces; checked locally too so the user gets
/// immediate feedback.
pub const MAX_MESSAGE_WORDS: usize = 100;

/// Trim and bound-check a message before submission.
pub fn validate_message(text: &str) -> Result<String, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Please write a message before sending."));
    }
    if trimmed.split_whitespace().count() > MAX_MESSAGE_WORDS {
        return Err(Error::validation("Messages are limited to 100 words."));
    }
    Ok(trimmed.to_string())
}

impl<S: SessionStore> Client<S> {
    /// Send an anonymous message.
    pub async fn send_message(&self, text: &str) -> Result<String, Error> {
        let message = validate_message(text)?;
        let body = json!({ "message": message });
        let envelope: Envelope<serde_json::Value> = self.post("/messages/send", &body).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Message sent successfully!".into()))
    }

    /// The current user's own messages.
    pub async fn my_messages(&self) -> Result<Vec<AnonymousMessage>, Error> {
        let envelope: Envelope<MessagesPayload> = self.get("/messages/my-messages").await?;
        Ok(envelope
            .data
            .map(|payload| payload.messages)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_trimmed() {
        assert_eq!(validate_message("  hi there  ").unwrap(), "hi there");
    }

    #[test]
    fn empty_messages_are_rejected() {
        assert!(matches!(validate_message("   "), Err(Error::Validation(_))));
    }

    #[test]
    fn the_word_cap_is_inclusive() {
        let hundred = vec!["word"; MAX_MESSAGE_WORDS].join(" ");
        assert!(validate_message(&hundred).is_ok());

        let over = vec!["word"; MAX_MESSAGE_WORDS + 1].join(" ");
        assert!(matches!(validate_message(&over), Err(Error::Validation(_))));
    }
}
