//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{Role, SessionStore, UserProfile};

/// Authentication state for the application.
///
/// Three states: `loading == true` while the initial session check runs,
/// then `user: None` (anonymous) or `user: Some(profile)` (authenticated).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Role of the current user; `Guest` when anonymous.
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|user| user.role).unwrap_or_default()
    }

    /// True iff the normalized role is exactly `admin`.
    pub fn is_admin_user(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Display name; empty string when anonymous.
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map(|user| user.name.as_str()).unwrap_or("")
    }

    /// Email address; empty string when anonymous.
    pub fn user_email(&self) -> &str {
        self.user.as_ref().map(|user| user.email.as_str()).unwrap_or("")
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Build an API client against the platform's session store.
pub fn make_client() -> api::Client<impl SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::Client::new(store::WebStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::Client::new(store::MemoryStore::new())
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // The session store answers synchronously, so the initial check
    // resolves here, before any guarded child renders.
    let auth_state = use_signal(|| {
        let client = make_client();
        AuthState {
            user: client.current_user(),
            loading: false,
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Replace the cached profile in both the store and the reactive state.
/// Session validity is unchanged; the role is re-normalized on persist.
pub fn update_user(mut auth: Signal<AuthState>, user: UserProfile) {
    make_client().update_user(&user);
    auth.set(AuthState::authenticated(user));
}

/// Drop the reactive session after the client reported a 401 and return
/// to the login screen. The session store itself is already cleared by
/// the time an `Unauthorized` error surfaces.
pub fn session_expired(mut auth: Signal<AuthState>) {
    auth.set(AuthState::anonymous());
    redirect_to_login();
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        make_client().logout();
        auth.set(AuthState::anonymous());
        redirect_to_login();
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: &str) -> UserProfile {
        serde_json::from_str(&format!(
            r#"{{"id":"u1","name":"Asha","email":"a@iitdh.ac.in","role":"{role}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn anonymous_state_has_safe_derived_values() {
        let state = AuthState::anonymous();
        assert_eq!(state.role(), Role::Guest);
        assert!(!state.is_admin_user());
        assert_eq!(state.user_name(), "");
        assert_eq!(state.user_email(), "");
    }

    #[test]
    fn admin_flag_follows_the_normalized_role() {
        assert!(AuthState::authenticated(profile("ADMIN")).is_admin_user());
        assert!(!AuthState::authenticated(profile("user")).is_admin_user());
        assert!(!AuthState::authenticated(profile("Admin ")).is_admin_user());
    }

    #[test]
    fn initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
    }
}
