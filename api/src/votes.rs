//! # Voting — candidate queries, vote casting, and the one-shot gate
//!
//! The authoritative "one vote per user per category" constraint lives on
//! the server. [`VoteLocks`] only mirrors it for the current page session so
//! the UI can disable buttons; a server rejection always wins over the local
//! state (after a reload the lock is empty but the server still refuses).

use serde_json::json;
use store::SessionStore;

use crate::client::Client;
use crate::error::Error;
use crate::types::{Candidate, CandidatesPayload, Category, Envelope};

impl<S: SessionStore> Client<S> {
    /// Cast a vote. Returns the server's confirmation message; the caller
    /// should re-fetch the candidate list for fresh tallies rather than
    /// incrementing locally.
    pub async fn cast_vote(&self, candidate_id: &str) -> Result<String, Error> {
        let body = json!({ "candidateID": candidate_id });
        let envelope: Envelope<serde_json::Value> = self.post("/vote", &body).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Vote registered successfully".into()))
    }

    /// Candidates of one category, with current tallies.
    pub async fn candidates_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Candidate>, Error> {
        let path = format!("/vote/category/{}", category.api_name());
        let envelope: Envelope<CandidatesPayload> = self.get(&path).await?;
        Ok(envelope
            .data
            .map(|payload| payload.candidates)
            .unwrap_or_default())
    }

    /// All candidates across both categories.
    pub async fn all_candidates(&self) -> Result<Vec<Candidate>, Error> {
        let envelope: Envelope<CandidatesPayload> = self.get("/vote/all").await?;
        Ok(envelope
            .data
            .map(|payload| payload.candidates)
            .unwrap_or_default())
    }
}

/// What the client remembers about a category it may no longer vote in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lock {
    /// The user voted for this candidate in the current session.
    Chosen(String),
    /// The server refused a vote ("already voted"); which candidate was
    /// originally chosen is unknown here.
    Blocked,
}

/// Session-scoped memory of which categories the user has voted in.
///
/// Never persisted: it exists to disable the vote buttons, not to enforce
/// anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLocks {
    mr_fresher: Option<Lock>,
    miss_fresher: Option<Lock>,
}

impl VoteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, category: Category) -> &Option<Lock> {
        match category {
            Category::MrFresher => &self.mr_fresher,
            Category::MissFresher => &self.miss_fresher,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Lock> {
        match category {
            Category::MrFresher => &mut self.mr_fresher,
            Category::MissFresher => &mut self.miss_fresher,
        }
    }

    /// Remember a successful vote.
    pub fn record_choice(&mut self, category: Category, candidate_id: impl Into<String>) {
        *self.slot_mut(category) = Some(Lock::Chosen(candidate_id.into()));
    }

    /// Remember a server-side "already voted" rejection.
    pub fn record_blocked(&mut self, category: Category) {
        let slot = self.slot_mut(category);
        // Don't downgrade a known choice to an anonymous block.
        if !matches!(slot, Some(Lock::Chosen(_))) {
            *slot = Some(Lock::Blocked);
        }
    }

    /// True once any further vote in this category should be disabled.
    pub fn has_voted(&self, category: Category) -> bool {
        self.slot(category).is_some()
    }

    /// The candidate voted for in this session, if known.
    pub fn choice(&self, category: Category) -> Option<&str> {
        match self.slot(category) {
            Some(Lock::Chosen(id)) => Some(id.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_start_open_for_both_categories() {
        let locks = VoteLocks::new();
        for category in Category::ALL {
            assert!(!locks.has_voted(category));
            assert!(locks.choice(category).is_none());
        }
    }

    #[test]
    fn recording_a_choice_closes_only_that_category() {
        let mut locks = VoteLocks::new();
        locks.record_choice(Category::MrFresher, "c1");

        assert!(locks.has_voted(Category::MrFresher));
        assert_eq!(locks.choice(Category::MrFresher), Some("c1"));
        assert!(!locks.has_voted(Category::MissFresher));
    }

    #[test]
    fn server_rejection_closes_the_category_without_a_choice() {
        let mut locks = VoteLocks::new();
        locks.record_blocked(Category::MissFresher);

        assert!(locks.has_voted(Category::MissFresher));
        assert!(locks.choice(Category::MissFresher).is_none());
    }

    #[test]
    fn a_block_never_erases_a_known_choice() {
        let mut locks = VoteLocks::new();
        locks.record_choice(Category::MrFresher, "c1");
        locks.record_blocked(Category::MrFresher);

        assert_eq!(locks.choice(Category::MrFresher), Some("c1"));
    }
}
