//! Candidate registration for organisers.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input, Spinner};
use ui::icons::FaPlus;
use ui::{make_client, session_expired, use_auth, Icon};

use api::{Candidate, Category};

use crate::guard::RequireAdmin;

#[component]
pub fn AddCandidate() -> Element {
    rsx! {
        RequireAdmin {
            AddCandidateScreen {}
        }
    }
}

#[component]
fn AddCandidateScreen() -> Element {
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut category = use_signal(|| Category::MrFresher);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| Option::<(AlertKind, String)>::None);
    let mut candidates = use_signal(Vec::<Candidate>::new);
    let mut loading = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _manual = refresh();
        match make_client().all_candidates().await {
            Ok(list) => candidates.set(list),
            Err(err) if err.is_unauthorized() => {
                session_expired(auth);
                return;
            }
            Err(err) => status.set(Some((AlertKind::Error, err.to_string()))),
        }
        loading.set(false);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            status.set(None);
            submitting.set(true);

            match make_client().create_candidate(&name(), category()).await {
                Ok(created) => {
                    status.set(Some((
                        AlertKind::Success,
                        format!(
                            "{} has been added as a candidate for {}!",
                            created.name,
                            created.category.label()
                        ),
                    )));
                    name.set(String::new());
                    refresh += 1;
                }
                Err(err) if err.is_unauthorized() => {
                    session_expired(auth);
                }
                Err(err) => status.set(Some((AlertKind::Error, err.to_string()))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "add-candidate-screen",
            div {
                class: "screen-header",
                Icon { icon: FaPlus, width: 26, height: 26 }
                h1 { "Add a candidate" }
                p { "New contenders appear on the voting screen immediately." }
            }

            div {
                class: "card candidate-form-card",
                if let Some((kind, text)) = status() {
                    Alert { kind, "{text}" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "candidate-form",

                    label { class: "field-label", "Candidate name" }
                    Input {
                        r#type: "text",
                        name: "name",
                        placeholder: "Full name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    label { class: "field-label", "Category" }
                    div {
                        class: "category-toggle",
                        for option in Category::ALL {
                            button {
                                key: "{option.api_name()}",
                                r#type: "button",
                                class: if category() == option { "btn-secondary btn-active" } else { "btn-ghost" },
                                onclick: move |_| category.set(option),
                                "{option.label()}"
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Adding..." } else { "Add candidate" }
                    }
                }
            }

            if loading() {
                Spinner {}
            } else {
                for option in Category::ALL {
                    CandidateSection {
                        category: option,
                        candidates: candidates()
                            .into_iter()
                            .filter(|c| c.category == option)
                            .collect::<Vec<_>>(),
                    }
                }
            }
        }
    }
}

#[component]
fn CandidateSection(category: Category, candidates: Vec<Candidate>) -> Element {
    let count = candidates.len();
    rsx! {
        section {
            class: "admin-section",
            h2 { "{category.label()} ({count})" }
            if candidates.is_empty() {
                p { class: "empty-note", "Nobody here yet." }
            } else {
                ul {
                    class: "candidate-list",
                    for candidate in candidates {
                        li {
                            key: "{candidate.id}",
                            class: "card candidate-row",
                            span { "{candidate.name}" }
                            span { class: "candidate-row-votes", "{candidate.votes} votes" }
                        }
                    }
                }
            }
        }
    }
}
