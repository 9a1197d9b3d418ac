//! # Session model and the storage trait behind it
//!
//! A session is the pairing of an opaque bearer token and a cached
//! [`UserProfile`]. Both halves are persisted independently (two keys), and
//! the session only counts as authenticated when **both** are present —
//! a token without a readable profile, or vice versa, reads as logged out.
//!
//! [`SessionStore`] abstracts where the two halves live so the same auth
//! logic runs against the browser's LocalStorage ([`crate::WebStore`]) and
//! an in-memory map in tests ([`crate::MemoryStore`]). The trait is
//! synchronous: both backends answer without awaiting, which lets the auth
//! provider resolve the initial session check before the first paint.

use crate::models::UserProfile;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "userData";

/// A snapshot of the persisted session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// True iff both the token and the profile are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Durable key/value persistence for the session. No business logic,
/// no network calls.
pub trait SessionStore {
    /// Persist both halves of the session.
    fn save(&self, token: &str, user: &UserProfile);

    /// Remove both halves.
    fn clear(&self);

    /// Read the current session. Never panics: unreadable or malformed
    /// entries read as absent.
    fn read(&self) -> Session;
}
