//! # Client — request plumbing and the authentication surface
//!
//! [`Client`] wraps a [`reqwest::Client`] with everything every endpoint
//! needs: the base URL, bearer-token injection from the session store, a
//! 30 second timeout, and envelope decoding with the 401-clears-session
//! rule. The voting/song/message/admin operations live in sibling modules
//! as further `impl` blocks on the same type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{SessionStore, UserProfile};

use crate::config;
use crate::error::Error;
use crate::types::{Envelope, ErrorBody, UserPayload};

/// Number of digits in a signup OTP.
pub const OTP_LEN: usize = 6;

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
#[cfg(target_arch = "wasm32")]
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Typed client for the remote API.
///
/// Generic over the session store so tests inject a fresh in-memory store
/// per case. This is the single writer of the store: nothing else persists
/// or clears session state.
#[derive(Debug, Clone)]
pub struct Client<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

/// Profile data collected by the signup form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl<S: SessionStore> Client<S> {
    /// Client against the build-time configured backend.
    pub fn new(store: S) -> Self {
        Self::with_base_url(config::base_url(), store)
    }

    /// Client against an explicit base URL (tests, previews).
    pub fn with_base_url(base_url: impl Into<String>, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- session read surface -------------------------------------------

    /// True iff both the token and the profile are stored.
    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    /// The cached profile, or `None` when the session is absent or
    /// incomplete (fail-closed).
    pub fn current_user(&self) -> Option<UserProfile> {
        let session = self.store.read();
        if session.is_authenticated() {
            session.user
        } else {
            None
        }
    }

    /// True iff the current user's normalized role is exactly `admin`.
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin())
    }

    // ---- authentication --------------------------------------------------

    /// Register a new account. The backend mails an OTP; no session is
    /// established until [`verify_otp`](Self::verify_otp) succeeds.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<String, Error> {
        let envelope: Envelope<serde_json::Value> = self.post("/signup", request).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Signup successful. Please check your email for the OTP.".into()))
    }

    /// Confirm a signup with the emailed OTP. On success the session is
    /// persisted before this returns.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<UserProfile, Error> {
        if otp.len() != OTP_LEN || !otp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation("Please enter all 6 digits"));
        }
        let body = serde_json::json!({ "email": email, "otp": otp });
        let envelope: Envelope<UserPayload> = self.post("/verify-otp", &body).await?;
        self.establish(envelope)
    }

    /// Log in with email and password. Same persistence contract as
    /// [`verify_otp`](Self::verify_otp).
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, Error> {
        let body = serde_json::json!({ "email": email, "password": password });
        let envelope: Envelope<UserPayload> = self.post("/login", &body).await?;
        self.establish(envelope)
    }

    /// Drop the session. Local-only, so nothing can block it.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Re-persist an updated profile against the existing token. A no-op
    /// when no session is active.
    pub fn update_user(&self, user: &UserProfile) {
        if let Some(token) = self.store.read().token {
            self.store.save(&token, user);
        }
    }

    fn establish(&self, envelope: Envelope<UserPayload>) -> Result<UserProfile, Error> {
        let token = envelope.token.ok_or(Error::UnexpectedResponse)?;
        let user = envelope
            .data
            .map(|payload| payload.user)
            .ok_or(Error::UnexpectedResponse)?;
        // Role was normalized when the payload decoded; persist both halves
        // before handing the profile back.
        self.store.save(&token, &user);
        Ok(user)
    }

    // ---- request plumbing ------------------------------------------------

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, Error> {
        let request = self.http.get(self.url(path));
        self.request(request).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, Error> {
        let request = self.http.post(self.url(path)).json(body);
        self.request(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, Error> {
        let request = match self.store.read().token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = send_with_timeout(request).await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Stale or expired token. Drop the session so it is never
            // silently retried, whatever call happened to trip it.
            self.store.clear();
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Request failed ({status})"));
            return Err(Error::Rejected(message));
        }

        response.json::<Envelope<T>>().await.map_err(|err| {
            tracing::warn!("response envelope did not match the contract: {err}");
            Error::UnexpectedResponse
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_with_timeout(request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
    request.timeout(REQUEST_TIMEOUT).send().await.map_err(|err| {
        tracing::warn!("request failed: {err}");
        Error::Network
    })
}

#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
    use futures::FutureExt;

    let mut send = Box::pin(request.send().fuse());
    let mut timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse());
    futures::select! {
        response = send => response.map_err(|err| {
            tracing::warn!("request failed: {err}");
            Error::Network
        }),
        _ = timeout => {
            tracing::warn!("request timed out after {REQUEST_TIMEOUT_MS}ms");
            Err(Error::Network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, Role};

    fn profile(role: &str) -> UserProfile {
        serde_json::from_str(&format!(
            r#"{{"id":"u1","name":"Asha","email":"a@iitdh.ac.in","role":"{role}"}}"#
        ))
        .unwrap()
    }

    fn client_with_session(role: &str) -> Client<MemoryStore> {
        let store = MemoryStore::new();
        store.save("tok-1", &profile(role));
        Client::with_base_url("http://unreachable.invalid/api/v1/fresherParty", store)
    }

    #[test]
    fn read_surface_reflects_the_store() {
        let client = client_with_session("user");
        assert!(client.is_authenticated());
        assert!(!client.is_admin());
        assert_eq!(client.current_user().unwrap().name, "Asha");
    }

    #[test]
    fn admin_requires_the_exact_normalized_role() {
        assert!(client_with_session("ADMIN").is_admin());
        assert!(!client_with_session("Admin ").is_admin());
        assert!(!client_with_session("user").is_admin());
    }

    #[test]
    fn logout_clears_both_halves() {
        let client = client_with_session("user");
        client.logout();
        assert!(!client.is_authenticated());
        assert!(client.current_user().is_none());
    }

    #[test]
    fn update_user_is_idempotent_and_keeps_the_token() {
        let client = client_with_session("user");
        let mut updated = profile("ADMIN");
        updated.name = "Asha K".into();

        client.update_user(&updated);
        let once = client.store().read();
        client.update_user(&updated);
        let twice = client.store().read();

        assert_eq!(once, twice);
        assert_eq!(twice.token.as_deref(), Some("tok-1"));
        assert_eq!(twice.user.as_ref().unwrap().role, Role::Admin);
        assert_eq!(twice.user.unwrap().name, "Asha K");
    }

    #[test]
    fn update_user_without_a_session_is_a_no_op() {
        let client = Client::with_base_url("http://unreachable.invalid", MemoryStore::new());
        client.update_user(&profile("admin"));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn establishing_a_session_persists_token_and_normalized_profile() {
        let client = Client::with_base_url("http://unreachable.invalid", MemoryStore::new());
        let envelope: Envelope<UserPayload> = serde_json::from_str(
            r#"{ "token": "jwt-1",
                 "data": { "user": { "_id": "u9", "name": "Meera",
                                     "email": "m@iitdh.ac.in", "role": "ADMIN" } } }"#,
        )
        .unwrap();

        let user = client.establish(envelope).unwrap();
        assert_eq!(user.id, "u9");
        assert!(client.is_authenticated());
        assert!(client.is_admin());
        assert_eq!(client.store().read().token.as_deref(), Some("jwt-1"));
    }

    #[test]
    fn establishing_without_a_token_fails_closed() {
        let client = Client::with_base_url("http://unreachable.invalid", MemoryStore::new());
        let envelope: Envelope<UserPayload> = serde_json::from_str(
            r#"{ "data": { "user": { "_id": "u9", "name": "Meera",
                                     "email": "m@iitdh.ac.in" } } }"#,
        )
        .unwrap();

        assert_eq!(
            client.establish(envelope).unwrap_err(),
            Error::UnexpectedResponse
        );
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn verify_otp_rejects_short_codes_before_any_network_call() {
        // The base URL is unresolvable, so reaching the network would fail
        // with Error::Network; a Validation error proves nothing was sent.
        let client = Client::with_base_url("http://unreachable.invalid", MemoryStore::new());
        for otp in ["", "1", "12345", "12a456", "1234567"] {
            let err = client.verify_otp("a@b.com", otp).await.unwrap_err();
            assert_eq!(err, Error::Validation("Please enter all 6 digits".into()));
        }
        assert!(!client.is_authenticated());
    }
}
