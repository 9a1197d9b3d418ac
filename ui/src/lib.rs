//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    make_client, session_expired, update_user, use_auth, AuthProvider, AuthState, LogoutButton,
};

mod otp;
pub use otp::{OtpCode, OtpInput};

mod live;
pub use live::use_live_votes;
