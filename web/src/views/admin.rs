//! Admin panel: tallies, the song queue, and message moderation.

use std::collections::HashSet;

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input, Spinner};
use ui::icons::{FaEnvelope, FaMagnifyingGlass, FaMusic, FaShieldHalved, FaUsers};
use ui::{make_client, session_expired, use_auth, use_live_votes, Icon};

use api::{AnonymousMessage, Candidate, Category, SongSuggestion, UserMessages};

use crate::guard::RequireAdmin;
use crate::Route;

#[component]
pub fn Admin() -> Element {
    rsx! {
        RequireAdmin {
            AdminScreen {}
        }
    }
}

#[component]
fn AdminScreen() -> Element {
    let auth = use_auth();
    let mut candidates = use_signal(Vec::<Candidate>::new);
    let mut songs = use_signal(Vec::<SongSuggestion>::new);
    let mut messages = use_signal(Vec::<AnonymousMessage>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut refresh = use_signal(|| 0u32);
    let live = use_live_votes();

    let mut lookup_email = use_signal(String::new);
    let mut lookup_result = use_signal(|| Option::<UserMessages>::None);
    let mut lookup_error = use_signal(|| Option::<String>::None);
    let mut looking_up = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let _manual = refresh();
        let _tick = live();
        let client = make_client();
        let mut failures = Vec::new();

        match client.all_candidates().await {
            Ok(list) => candidates.set(list),
            Err(err) if err.is_unauthorized() => {
                session_expired(auth);
                return;
            }
            Err(_) => failures.push("candidates"),
        }
        match client.all_song_suggestions().await {
            Ok(list) => songs.set(list),
            Err(_) => failures.push("song suggestions"),
        }
        match client.all_messages().await {
            Ok(list) => messages.set(list),
            Err(_) => failures.push("messages"),
        }

        if failures.is_empty() {
            error.set(None);
        } else {
            error.set(Some(format!("Could not load: {}.", failures.join(", "))));
        }
        loading.set(false);
    });

    let handle_lookup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            lookup_error.set(None);
            lookup_result.set(None);
            looking_up.set(true);

            match make_client().messages_by_email(&lookup_email()).await {
                Ok(found) => lookup_result.set(Some(found)),
                Err(err) if err.is_unauthorized() => {
                    session_expired(auth);
                }
                Err(err) => lookup_error.set(Some(err.to_string())),
            }
            looking_up.set(false);
        });
    };

    if loading() {
        return rsx! {
            Spinner { label: "Loading the control room..." }
        };
    }

    let all_songs: Vec<String> = songs()
        .iter()
        .flat_map(|suggestion| suggestion.song_links.clone())
        .collect();
    let unique_songs: HashSet<String> = all_songs.iter().cloned().collect();
    let total_votes: u64 = candidates().iter().map(|c| c.votes).sum();

    rsx! {
        div {
            class: "admin-screen",
            div {
                class: "screen-header",
                Icon { icon: FaShieldHalved, width: 32, height: 32 }
                h1 { "Organiser control room" }
                p { "Live tallies, the DJ queue, and every anonymous message." }
                div {
                    class: "center-row",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| refresh += 1,
                        "Refresh data"
                    }
                    Link { class: "btn-primary", to: Route::AddCandidate {}, "Add a candidate" }
                }
            }

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, "{err}" }
            }

            div {
                class: "stat-grid",
                div {
                    class: "card stat-card",
                    Icon { icon: FaUsers, width: 18, height: 18 }
                    p { class: "stat-value", "{candidates().len()}" }
                    p { class: "stat-label", "Candidates" }
                }
                div {
                    class: "card stat-card",
                    p { class: "stat-value", "{total_votes}" }
                    p { class: "stat-label", "Votes cast" }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaMusic, width: 18, height: 18 }
                    p { class: "stat-value", "{songs().len()}" }
                    p { class: "stat-label", "Song submissions" }
                }
                div {
                    class: "card stat-card",
                    p { class: "stat-value", "{unique_songs.len()}" }
                    p { class: "stat-label", "Unique links" }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaEnvelope, width: 18, height: 18 }
                    p { class: "stat-value", "{messages().len()}" }
                    p { class: "stat-label", "Messages" }
                }
            }

            for category in Category::ALL {
                TallyTable {
                    category,
                    candidates: candidates()
                        .into_iter()
                        .filter(|c| c.category == category)
                        .collect::<Vec<_>>(),
                }
            }

            section {
                class: "admin-section",
                h2 { "Messages" }
                if messages().is_empty() {
                    p { class: "empty-note", "No messages yet." }
                } else {
                    ul {
                        class: "message-list",
                        for (key, text) in messages().into_iter().enumerate().map(|(idx, entry)| {
                            (entry.id.unwrap_or_else(|| idx.to_string()), entry.message)
                        }) {
                            li { key: "{key}", class: "card message-item", "{text}" }
                        }
                    }
                }
            }

            section {
                class: "admin-section",
                h2 { "Find a user's messages" }
                form {
                    onsubmit: handle_lookup,
                    class: "lookup-form",
                    Input {
                        r#type: "email",
                        name: "lookup_email",
                        placeholder: "their.email@iitdh.ac.in",
                        value: lookup_email(),
                        oninput: move |evt: FormEvent| lookup_email.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        r#type: "submit",
                        disabled: looking_up(),
                        Icon { icon: FaMagnifyingGlass, width: 13, height: 13 }
                        span {
                            if looking_up() { "Searching..." } else { "Look up" }
                        }
                    }
                }

                if let Some(err) = lookup_error() {
                    Alert { kind: AlertKind::Error, "{err}" }
                }
                if let Some(found) = lookup_result() {
                    div {
                        class: "card lookup-result",
                        if let Some(user) = &found.user {
                            p { class: "lookup-user", "{user.name} · {user.email}" }
                        }
                        if found.messages.is_empty() {
                            p { class: "empty-note", "This user has not sent anything." }
                        } else {
                            ul {
                                class: "message-list",
                                for (idx, entry) in found.messages.iter().enumerate() {
                                    li { key: "{idx}", class: "message-item", "{entry.message}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TallyTable(category: Category, candidates: Vec<Candidate>) -> Element {
    let mut sorted = candidates;
    sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
    let total: u64 = sorted.iter().map(|c| c.votes).sum();

    rsx! {
        section {
            class: "admin-section",
            h2 { "{category.label()}" }
            if sorted.is_empty() {
                p { class: "empty-note", "No candidates in this category yet." }
            } else {
                table {
                    class: "tally-table",
                    thead {
                        tr {
                            th { "Candidate" }
                            th { "Department" }
                            th { "Votes" }
                            th { "Share" }
                        }
                    }
                    tbody {
                        for (key, name, department, votes, share) in sorted.iter().map(|c| {
                            let share = if total > 0 {
                                format!("{:.1}%", c.votes as f64 * 100.0 / total as f64)
                            } else {
                                "—".to_string()
                            };
                            (
                                c.id.clone(),
                                c.name.clone(),
                                c.department.clone().unwrap_or_default(),
                                c.votes,
                                share,
                            )
                        }) {
                            tr {
                                key: "{key}",
                                td { "{name}" }
                                td { "{department}" }
                                td { "{votes}" }
                                td { "{share}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
