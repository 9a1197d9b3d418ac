//! Signup view: collect the profile, then verify the emailed OTP.
//!
//! Two phases in one screen. Submitting the profile form asks the backend
//! to mail a six-digit code; no session exists until that code verifies.
//! Going back to the form discards the entered digits and any error.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use ui::icons::FaArrowLeft;
use ui::{make_client, use_auth, AuthState, Icon, OtpCode, OtpInput};

use crate::Route;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Profile,
    Otp { email: String },
}

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut phase = use_signal(|| Phase::Profile);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut otp = use_signal(OtpCode::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut info = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip signup entirely.
    let state = auth();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            info.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < MIN_PASSWORD_LEN {
                error.set(Some(
                    "Password must be at least 6 characters long".to_string(),
                ));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let request = api::SignUpRequest {
                name: n,
                email: e.clone(),
                password: p,
            };
            match make_client().sign_up(&request).await {
                Ok(message) => {
                    loading.set(false);
                    info.set(Some(message));
                    phase.set(Phase::Otp { email: e });
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let Phase::Otp { email } = phase() else {
                return;
            };
            // Nothing leaves the client until all six digits are present.
            let Some(code) = otp().code() else {
                error.set(Some("Please enter all 6 digits".to_string()));
                return;
            };

            loading.set(true);
            match make_client().verify_otp(&email, &code).await {
                Ok(user) => {
                    auth.set(AuthState::authenticated(user));
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    // Digits stay in place for correction.
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let handle_back = move |_| {
        otp.write().reset();
        error.set(None);
        info.set(None);
        phase.set(Phase::Profile);
    };

    let body = match phase() {
        Phase::Profile => rsx! {
            h1 { class: "auth-title", "Join the Party!" }
            p {
                class: "auth-subtitle",
                "Create your account to participate in IIT Dharwad Freshers' 2025"
            }

            form {
                onsubmit: handle_signup,
                class: "auth-form",

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, "{err}" }
                }

                label { class: "field-label", "Full Name *" }
                Input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Your full name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                label { class: "field-label", "Institute Email Address *" }
                Input {
                    r#type: "email",
                    name: "email",
                    placeholder: "your.email@iitdh.ac.in",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { class: "field-label", "Password *" }
                Input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Min. 6 characters",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { class: "field-label", "Confirm Password *" }
                Input {
                    r#type: "password",
                    name: "confirm_password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating your account..." } else { "Create Account & Join the Party" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                Link { class: "auth-link", to: Route::Login {}, "Login here" }
            }
        },
        Phase::Otp { email } => rsx! {
            h1 { class: "auth-title", "Check your inbox" }
            p {
                class: "auth-subtitle",
                "We sent a 6-digit code to "
                span { class: "auth-email", "{email}" }
            }

            form {
                onsubmit: handle_verify,
                class: "auth-form",

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, "{err}" }
                }
                if let Some(message) = info() {
                    Alert { kind: AlertKind::Success, "{message}" }
                }

                OtpInput { code: otp, disabled: loading() }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Verifying..." } else { "Verify & Continue" }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: handle_back,
                    Icon { icon: FaArrowLeft, width: 13, height: 13 }
                    span { "Back to the form" }
                }
            }
        },
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "card auth-card",
                {body}
            }
        }
    }
}
