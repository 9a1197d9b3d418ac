//! Anonymous message screen: send a note, see your own past ones.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Spinner};
use ui::icons::{FaEnvelope, FaPaperPlane};
use ui::{make_client, session_expired, use_auth, Icon};

use api::{AnonymousMessage, MAX_MESSAGE_WORDS};

use crate::guard::RequireAuth;

#[component]
pub fn Messages() -> Element {
    rsx! {
        RequireAuth {
            MessagesScreen {}
        }
    }
}

#[component]
fn MessagesScreen() -> Element {
    let auth = use_auth();
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| Option::<String>::None);
    let mut mine = use_signal(Vec::<AnonymousMessage>::new);
    let mut loading_mine = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _manual = refresh();
        match make_client().my_messages().await {
            Ok(messages) => mine.set(messages),
            Err(err) if err.is_unauthorized() => {
                session_expired(auth);
                return;
            }
            Err(err) => tracing::warn!("could not load own messages: {err}"),
        }
        loading_mine.set(false);
    });

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            sent.set(None);
            sending.set(true);

            match make_client().send_message(&message()).await {
                Ok(confirmation) => {
                    sent.set(Some(confirmation));
                    message.set(String::new());
                    refresh += 1;
                }
                Err(err) if err.is_unauthorized() => {
                    session_expired(auth);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            sending.set(false);
        });
    };

    let word_count = message().split_whitespace().count();

    rsx! {
        div {
            class: "messages-screen",
            div {
                class: "screen-header",
                Icon { icon: FaEnvelope, width: 32, height: 32 }
                h1 { "Anonymous messages" }
                p {
                    "Slip in a compliment, confession, or hype message. We scrub your name, \
                     log the words, and let the vibes travel."
                }
            }

            div {
                class: "card message-form-card",
                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, "{err}" }
                }
                if let Some(confirmation) = sent() {
                    Alert { kind: AlertKind::Success, "{confirmation}" }
                }

                form {
                    onsubmit: handle_send,
                    class: "message-form",

                    textarea {
                        class: "dark-input message-input",
                        rows: "4",
                        placeholder: "Write your message (up to 100 words)...",
                        value: message(),
                        oninput: move |evt| message.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        span {
                            class: if word_count > MAX_MESSAGE_WORDS { "word-count word-count-over" } else { "word-count" },
                            "{word_count}/{MAX_MESSAGE_WORDS} words"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: sending(),
                            if sending() {
                                "Sending..."
                            } else {
                                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                                span { "Send anonymously" }
                            }
                        }
                    }
                }

                p {
                    class: "privacy-note",
                    "We just store the words. No names, no timestamps on the public side."
                }
            }

            section {
                class: "my-messages",
                h2 { "Your messages" }
                if loading_mine() {
                    Spinner {}
                } else if mine().is_empty() {
                    p { class: "empty-note", "Nothing sent yet." }
                } else {
                    ul {
                        class: "message-list",
                        for (key, text) in mine().into_iter().enumerate().map(|(idx, entry)| {
                            (entry.id.unwrap_or_else(|| idx.to_string()), entry.message)
                        }) {
                            li {
                                key: "{key}",
                                class: "card message-item",
                                "{text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
