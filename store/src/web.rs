//! # LocalStorage session store — browser-side persistence
//!
//! [`WebStore`] persists the session into the browser's LocalStorage via
//! the [`gloo_storage`] crate, under two independent keys (`authToken` and
//! `userData`). LocalStorage survives reloads and tabs, which is what makes
//! the session durable.
//!
//! All reads silently degrade: a missing key, a profile that fails to
//! deserialize, or a storage API error (private-browsing quota, disabled
//! storage) reads as "logged out" rather than crashing. A corrupted profile
//! is logged and dropped so the next login overwrites it.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::models::UserProfile;
use crate::session::{Session, SessionStore, TOKEN_KEY, USER_KEY};

/// LocalStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly: LocalStorage itself is the shared state,
/// so every instance observes the same session.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for WebStore {
    fn save(&self, token: &str, user: &UserProfile) {
        if let Err(err) = LocalStorage::set(USER_KEY, user) {
            tracing::error!("failed to persist user profile: {err}");
            return;
        }
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            tracing::error!("failed to persist auth token: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }

    fn read(&self) -> Session {
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let user: Option<UserProfile> = match LocalStorage::get(USER_KEY) {
            Ok(user) => Some(user),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!("stored user profile is unreadable: {err}");
                None
            }
        };
        Session { token, user }
    }
}
