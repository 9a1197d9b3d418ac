//! # API crate — typed client for the Freshers' Night backend
//!
//! Every screen talks to the remote REST API through this crate. It owns the
//! HTTP plumbing (bearer token injection, 30 s timeout, response envelope
//! decoding), the error taxonomy, and all client-side validation, so view
//! code never needs `try`/`catch` gymnastics — every operation returns a
//! plain `Result`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`] — request plumbing plus the signup / OTP / login / logout surface |
//! | [`votes`] | Candidate queries, vote casting, and the session-scoped [`VoteLocks`] gate |
//! | [`songs`] | Song suggestion submission with Spotify-link validation and wire padding |
//! | [`messages`] | Anonymous message submission and queries |
//! | [`admin`] | Admin-only endpoints (candidate creation, full listings, per-user lookup) |
//! | [`types`] | Response envelope and the typed payloads behind each endpoint |
//! | [`error`] | [`Error`] — validation / auth / rejection / network taxonomy |
//! | [`config`] | Base URL and push-channel endpoint, fixed at build time |
//!
//! ## Session handling
//!
//! [`Client`] is generic over [`store::SessionStore`] and is the only writer
//! of it: successful `login`/`verify_otp` calls persist the token and the
//! (role-normalized) profile before returning, `logout` clears both halves,
//! and any 401 response clears the store before the error surfaces so a
//! stale token is never silently retried.

pub mod admin;
pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod songs;
pub mod types;
pub mod votes;

pub use client::{Client, SignUpRequest, OTP_LEN};
pub use error::Error;
pub use messages::MAX_MESSAGE_WORDS;
pub use songs::{MAX_SONG_LINKS, PLACEHOLDER_SONG_LINK, SONG_LINK_PREFIX};
pub use types::{AnonymousMessage, Candidate, Category, SongSuggestion, UserMessages};
pub use votes::VoteLocks;

pub use store::{Role, Session, SessionStore, UserProfile};
