//! # User profile and role models
//!
//! [`UserProfile`] is the cached profile half of a session, persisted as JSON
//! next to the bearer token. [`Role`] classifies what the profile may access.
//!
//! Role normalization happens here, at the type boundary, and nowhere else:
//! the backend sends roles as free-form strings (`"admin"`, `"ADMIN"`,
//! `"user"`, sometimes nothing at all), and every write into a session runs
//! the string through [`Role::parse`]. Read sites then compare enum variants
//! and can never drift on casing. Parsing lower-cases but does **not** trim:
//! `"Admin "` is not an admin.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Access level attached to a user profile.
///
/// Anything that is not exactly `admin` or `user` (case-insensitive)
/// collapses to `Guest`, including a missing role field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Guest,
    User,
    Admin,
}

impl Role {
    /// Normalize a raw role string. Lower-cases, never trims.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Guest,
        }
    }

    /// The canonical lower-case form written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// The profile half of a session, safe to cache client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive_for_exact_matches() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("USER"), Role::User);
    }

    #[test]
    fn role_parse_never_trims_or_guesses() {
        assert_eq!(Role::parse("Admin "), Role::Guest);
        assert_eq!(Role::parse(" admin"), Role::Guest);
        assert_eq!(Role::parse(""), Role::Guest);
        assert_eq!(Role::parse("administrator"), Role::Guest);
        assert_eq!(Role::parse("guest"), Role::Guest);
    }

    #[test]
    fn role_normalization_is_idempotent() {
        for raw in ["admin", "ADMIN", "user", "weird"] {
            let once = Role::parse(raw);
            let twice = Role::parse(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn profile_accepts_mongo_style_ids_and_defaults_role() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"_id":"abc123","name":"Asha","email":"a@iitdh.ac.in"}"#)
                .unwrap();
        assert_eq!(profile.id, "abc123");
        assert_eq!(profile.role, Role::Guest);
        assert!(!profile.is_admin());
    }

    #[test]
    fn profile_round_trips_with_normalized_role() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"u1","name":"Ravi","email":"r@iitdh.ac.in","role":"ADMIN"}"#,
        )
        .unwrap();
        assert!(profile.is_admin());

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains(r#""role":"admin""#));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
