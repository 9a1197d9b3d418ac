//! Song suggestion screen: up to three Spotify links, one shot per session.
//!
//! After one successful submission the form stays hidden until the page is
//! reloaded. That flag is deliberately not persisted or re-checked against
//! the server on mount; the backend's own idempotency is the real backstop.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use ui::icons::{FaMusic, FaPaperPlane, FaPlus};
use ui::{make_client, session_expired, use_auth, Icon};

use crate::guard::RequireAuth;

const SUCCESS_COPY: &str = "Your songs are with the DJ. Watch for them on both nights—and if \
                            something sounds off, it might just be your song.";

#[component]
pub fn Music() -> Element {
    rsx! {
        RequireAuth {
            MusicScreen {}
        }
    }
}

#[component]
fn MusicScreen() -> Element {
    let auth = use_auth();
    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut has_submitted = use_signal(|| false);
    let mut link1 = use_signal(String::new);
    let mut link2 = use_signal(String::new);
    let mut link3 = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            success.set(None);
            submitting.set(true);

            let links = vec![link1(), link2(), link3()];
            match make_client().submit_songs(&links).await {
                Ok(_) => {
                    success.set(Some(SUCCESS_COPY.to_string()));
                    link1.set(String::new());
                    link2.set(String::new());
                    link3.set(String::new());
                    show_form.set(false);
                    has_submitted.set(true);
                }
                Err(err) if err.is_unauthorized() => {
                    session_expired(auth);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "music-screen",
            div {
                class: "screen-header",
                Icon { icon: FaMusic, width: 32, height: 32 }
                h1 { "Curate the Freshers soundtrack" }
                p {
                    "Drop up to three Spotify links. The DJ booth reviews every submission and \
                     slips them into the set across both nights."
                }
                div {
                    class: "card howto-card",
                    p {
                        strong { "How to share your track:" }
                    }
                    p { "1. Open Spotify · find your song" }
                    p { "2. Tap ··· → Share → Copy link" }
                    p { "3. Paste it below (links must start with https://open.spotify.com/)" }
                }
            }

            if !has_submitted() {
                div {
                    class: "center-row",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| show_form.set(!show_form()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span {
                            if show_form() { "Hide form" } else { "Add song suggestions" }
                        }
                    }
                }
            }

            if has_submitted() {
                if let Some(message) = success() {
                    div {
                        class: "card submitted-card",
                        Icon { icon: FaMusic, width: 26, height: 26 }
                        p { "{message}" }
                    }
                }
            }

            if show_form() && !has_submitted() {
                div {
                    class: "card song-form-card",
                    h2 {
                        class: "song-form-title",
                        Icon { icon: FaMusic, width: 18, height: 18 }
                        span { "Submit your songs" }
                    }

                    if let Some(err) = error() {
                        Alert { kind: AlertKind::Error, "{err}" }
                    }

                    form {
                        onsubmit: handle_submit,
                        class: "song-form",

                        label { class: "field-label", "Spotify song link #1" }
                        Input {
                            r#type: "url",
                            name: "song_link_1",
                            placeholder: "https://open.spotify.com/track/...",
                            value: link1(),
                            oninput: move |evt: FormEvent| link1.set(evt.value()),
                        }

                        label { class: "field-label", "Spotify song link #2 (optional)" }
                        Input {
                            r#type: "url",
                            name: "song_link_2",
                            placeholder: "https://open.spotify.com/track/...",
                            value: link2(),
                            oninput: move |evt: FormEvent| link2.set(evt.value()),
                        }

                        label { class: "field-label", "Spotify song link #3 (optional)" }
                        Input {
                            r#type: "url",
                            name: "song_link_3",
                            placeholder: "https://open.spotify.com/track/...",
                            value: link3(),
                            oninput: move |evt: FormEvent| link3.set(evt.value()),
                        }

                        div {
                            class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() {
                                    "Submitting..."
                                } else {
                                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                                    span { "Submit songs" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| show_form.set(false),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
