use std::sync::{Arc, Mutex};

use crate::models::UserProfile;
use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and native fallback.
///
/// The profile is kept as serialized JSON, exactly as the web backend
/// stores it, so the fail-closed deserialization path is exercised here too.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Entries>>,
}

#[derive(Debug, Default)]
struct Entries {
    token: Option<String>,
    user: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str, user: &UserProfile) {
        let mut entries = self.inner.lock().unwrap();
        match serde_json::to_string(user) {
            Ok(json) => {
                entries.user = Some(json);
                entries.token = Some(token.to_string());
            }
            Err(err) => {
                tracing::error!("failed to serialize user profile: {err}");
            }
        }
    }

    fn clear(&self) {
        let mut entries = self.inner.lock().unwrap();
        entries.token = None;
        entries.user = None;
    }

    fn read(&self) -> Session {
        let entries = self.inner.lock().unwrap();
        let user = entries.user.as_deref().and_then(|json| {
            serde_json::from_str::<UserProfile>(json)
                .map_err(|err| tracing::warn!("stored user profile is not valid JSON: {err}"))
                .ok()
        });
        Session {
            token: entries.token.clone(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn profile(role: &str) -> UserProfile {
        serde_json::from_str(&format!(
            r#"{{"id":"u1","name":"Asha","email":"a@iitdh.ac.in","role":"{role}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn save_then_read_round_trips() {
        let store = MemoryStore::new();
        assert!(!store.read().is_authenticated());

        store.save("tok-1", &profile("user"));
        let session = store.read();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.user.unwrap().role, Role::User);
    }

    #[test]
    fn clear_removes_both_halves() {
        let store = MemoryStore::new();
        store.save("tok-1", &profile("admin"));
        store.clear();

        let session = store.read();
        assert!(session.token.is_none());
        assert!(session.user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn token_without_profile_is_not_authenticated() {
        let store = MemoryStore::new();
        store.inner.lock().unwrap().token = Some("orphan".into());

        let session = store.read();
        assert!(session.token.is_some());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn malformed_profile_json_reads_as_absent() {
        let store = MemoryStore::new();
        {
            let mut entries = store.inner.lock().unwrap();
            entries.token = Some("tok-1".into());
            entries.user = Some("{not json".into());
        }

        let session = store.read();
        assert!(session.user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn role_is_normalized_on_save() {
        let store = MemoryStore::new();
        store.save("tok-1", &profile("ADMIN"));

        let stored = store.inner.lock().unwrap().user.clone().unwrap();
        assert!(stored.contains(r#""role":"admin""#));
        assert!(store.read().user.unwrap().is_admin());
    }

    #[test]
    fn clones_share_the_same_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.save("tok-1", &profile("user"));
        assert!(handle.read().is_authenticated());
    }
}
