//! # Wire types — the response envelope and per-endpoint payloads
//!
//! Every backend response arrives in the same envelope:
//!
//! ```json
//! { "status": "success", "message": "...", "token": "...",
//!   "results": 4, "data": { ... } }
//! ```
//!
//! [`Envelope`] decodes that shell once, and each endpoint names a single
//! typed payload for `data`. Fields the backend renders inconsistently
//! across deployments (`_id` vs `id`, `vote` vs `voteCount`, `Mr` vs
//! `Mr_Fresher`) are reconciled here with serde aliases so no other module
//! ever probes alternative field names.

use serde::{Deserialize, Serialize};
use store::UserProfile;

/// The common response shell. `data` is endpoint-specific.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub results: Option<u64>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Body of a non-2xx response; only the message is interesting.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// The two fixed voting categories.
///
/// The wire format is `Mr_Fresher` / `Miss_Fresher`; older backend data
/// used bare `Mr` / `Miss`, accepted via aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Mr_Fresher", alias = "Mr")]
    MrFresher,
    #[serde(rename = "Miss_Fresher", alias = "Miss")]
    MissFresher,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::MrFresher, Category::MissFresher];

    /// Path/payload segment the backend expects.
    pub fn api_name(self) -> &'static str {
        match self {
            Category::MrFresher => "Mr_Fresher",
            Category::MissFresher => "Miss_Fresher",
        }
    }

    /// Display name used across the screens.
    pub fn label(self) -> &'static str {
        match self {
            Category::MrFresher => "Mr. Fresher",
            Category::MissFresher => "Ms. Freshie",
        }
    }
}

/// A candidate in one of the two categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(rename = "voteCount", alias = "vote", default)]
    pub votes: u64,
}

/// One user's batch of suggested song links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSuggestion {
    #[serde(rename = "id", alias = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub song_links: Vec<String>,
    #[serde(default)]
    pub submitted_by: Option<String>,
}

/// An anonymous message as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousMessage {
    #[serde(rename = "id", alias = "_id", default)]
    pub id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Result of the admin per-user message lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserMessages {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub messages: Vec<AnonymousMessage>,
}

// Per-endpoint `data` payloads.

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserPayload {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CandidatesPayload {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CandidatePayload {
    pub candidate: Candidate,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MySongsPayload {
    pub suggestions: SongSuggestion,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SongsPayload {
    #[serde(default)]
    pub suggestions: Vec<SongSuggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessagesPayload {
    #[serde(default)]
    pub messages: Vec<AnonymousMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_auth_response() {
        let body = r#"{
            "status": "success",
            "message": "Login successful",
            "token": "jwt-token",
            "data": { "user": { "_id": "u1", "name": "Asha",
                                "email": "a@iitdh.ac.in", "role": "ADMIN" } }
        }"#;
        let envelope: Envelope<UserPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.token.as_deref(), Some("jwt-token"));
        let user = envelope.data.unwrap().user;
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
    }

    #[test]
    fn envelope_tolerates_missing_optional_fields() {
        let envelope: Envelope<CandidatesPayload> = serde_json::from_str("{}").unwrap();
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn candidate_reconciles_legacy_field_names() {
        let body = r#"{ "_id": "c1", "name": "Ravi", "category": "Mr",
                        "department": "CSE", "rollNumber": "23BCS001", "vote": 12 }"#;
        let candidate: Candidate = serde_json::from_str(body).unwrap();
        assert_eq!(candidate.id, "c1");
        assert_eq!(candidate.category, Category::MrFresher);
        assert_eq!(candidate.votes, 12);
        assert_eq!(candidate.roll_number.as_deref(), Some("23BCS001"));
    }

    #[test]
    fn candidate_accepts_current_field_names() {
        let body = r#"{ "id": "c2", "name": "Meera", "category": "Miss_Fresher",
                        "voteCount": 3 }"#;
        let candidate: Candidate = serde_json::from_str(body).unwrap();
        assert_eq!(candidate.category, Category::MissFresher);
        assert_eq!(candidate.votes, 3);
        assert!(candidate.department.is_none());
    }

    #[test]
    fn category_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::MrFresher).unwrap(),
            "\"Mr_Fresher\""
        );
        assert_eq!(Category::MissFresher.api_name(), "Miss_Fresher");
    }
}
