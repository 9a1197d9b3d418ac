//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use ui::{make_client, use_auth, AuthState};

use crate::guard::use_redirect_target;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut redirect = use_redirect_target();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    let state = auth();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter your email and password.".to_string()));
                return;
            }

            loading.set(true);
            match make_client().login(&e, &p).await {
                Ok(user) => {
                    auth.set(AuthState::authenticated(user));
                    // Return to wherever the guard bounced the visitor from.
                    let target = redirect.0.write().take().unwrap_or(Route::Dashboard {});
                    nav.replace(target);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "card auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-subtitle", "Sign in to manage your Freshers' Night experience." }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    if let Some(err) = error() {
                        Alert { kind: AlertKind::Error, "{err}" }
                    }

                    label { class: "field-label", "Institute Email Address" }
                    Input {
                        r#type: "email",
                        name: "email",
                        placeholder: "your.email@iitdh.ac.in",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { class: "field-label", "Password" }
                    Input {
                        r#type: "password",
                        name: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { class: "auth-link", to: Route::Signup {}, "Sign up here" }
                }
            }
        }
    }
}
