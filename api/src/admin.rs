//! Admin-only endpoints. The backend enforces the role; these wrappers are
//! only reachable from admin-guarded screens.

use serde_json::json;
use store::SessionStore;

use crate::client::Client;
use crate::error::Error;
use crate::types::{
    AnonymousMessage, Candidate, CandidatePayload, Category, Envelope, MessagesPayload,
    SongSuggestion, SongsPayload, UserMessages,
};

impl<S: SessionStore> Client<S> {
    /// Register a new candidate in a category.
    pub async fn create_candidate(
        &self,
        name: &str,
        category: Category,
    ) -> Result<Candidate, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Candidate name is required."));
        }
        let body = json!({ "name": name, "category": category.api_name() });
        let envelope: Envelope<CandidatePayload> = self.post("/admin", &body).await?;
        envelope
            .data
            .map(|payload| payload.candidate)
            .ok_or(Error::UnexpectedResponse)
    }

    /// Every submitted song suggestion, across all users.
    pub async fn all_song_suggestions(&self) -> Result<Vec<SongSuggestion>, Error> {
        let envelope: Envelope<SongsPayload> = self.get("/songs/all").await?;
        Ok(envelope
            .data
            .map(|payload| payload.suggestions)
            .unwrap_or_default())
    }

    /// Every anonymous message, across all users.
    pub async fn all_messages(&self) -> Result<Vec<AnonymousMessage>, Error> {
        let envelope: Envelope<MessagesPayload> = self.get("/messages/all").await?;
        Ok(envelope
            .data
            .map(|payload| payload.messages)
            .unwrap_or_default())
    }

    /// Look up one user's messages by email.
    pub async fn messages_by_email(&self, email: &str) -> Result<UserMessages, Error> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::validation("Please enter a valid email address."));
        }
        let envelope: Envelope<UserMessages> = self.get(&format!("/messages/user/{email}")).await?;
        envelope.data.ok_or(Error::UnexpectedResponse)
    }
}
