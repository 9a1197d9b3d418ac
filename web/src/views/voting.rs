//! Voting screen: one vote per category, tallies from the server.
//!
//! The local [`VoteLocks`] only disables buttons for this page session.
//! The server enforces the real constraint, and its "already voted"
//! verdict wins over the local state (after a reload the lock is empty
//! but the vote still stands).

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Spinner};
use ui::icons::{FaHeart, FaTrophy, FaUsers};
use ui::{make_client, session_expired, use_auth, use_live_votes, Icon};

use api::{Candidate, Category, VoteLocks};

use crate::guard::RequireAuth;

#[component]
pub fn Voting() -> Element {
    rsx! {
        RequireAuth {
            VotingScreen {}
        }
    }
}

#[component]
fn VotingScreen() -> Element {
    let auth = use_auth();
    let mut candidates = use_signal(Vec::<Candidate>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut locks = use_signal(VoteLocks::new);
    let mut is_voting = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);
    let live = use_live_votes();

    // Re-runs on manual refresh and on push-channel ticks.
    let _loader = use_resource(move || async move {
        let _manual = refresh();
        let _tick = live();
        match make_client().all_candidates().await {
            Ok(list) => {
                candidates.set(list);
                error.set(None);
            }
            Err(err) if err.is_unauthorized() => {
                session_expired(auth);
                return;
            }
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    let handle_vote = move |candidate: Candidate| {
        spawn(async move {
            if locks().has_voted(candidate.category) || is_voting() {
                return;
            }
            is_voting.set(true);
            match make_client().cast_vote(&candidate.id).await {
                Ok(_) => {
                    locks
                        .write()
                        .record_choice(candidate.category, candidate.id.clone());
                    // Tallies come from the source of truth, not a local increment.
                    refresh += 1;
                }
                Err(err) if err.is_unauthorized() => {
                    session_expired(auth);
                }
                Err(api::Error::Rejected(message)) => {
                    // The server's verdict is authoritative.
                    if message.to_lowercase().contains("already") {
                        locks.write().record_blocked(candidate.category);
                    }
                    error.set(Some(message));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            is_voting.set(false);
        });
    };

    if loading() {
        return rsx! {
            Spinner { label: "Loading participants..." }
        };
    }

    rsx! {
        div {
            class: "voting-screen",
            div {
                class: "screen-header",
                Icon { icon: FaTrophy, width: 40, height: 40 }
                h1 { "Vote for Freshers' 2025" }
                p {
                    "Cast your vote for Mr. and Ms. Freshie! Choose wisely - you can vote once for each category."
                }
                div {
                    class: "vote-status-row",
                    for category in Category::ALL {
                        span {
                            class: if locks().has_voted(category) { "badge badge-done" } else { "badge" },
                            if locks().has_voted(category) {
                                "{category.label()}: ✓ Voted"
                            } else {
                                "{category.label()}: Not voted yet"
                            }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, "{err}" }
            }

            for category in Category::ALL {
                section {
                    class: "vote-section",
                    h2 {
                        class: "vote-section-title",
                        Icon { icon: FaUsers, width: 22, height: 22 }
                        span { "{category.label()} 2025" }
                    }

                    div {
                        class: "card-grid",
                        for candidate in candidates().into_iter().filter(|c| c.category == category) {
                            CandidateCard {
                                key: "{candidate.id}",
                                candidate: candidate.clone(),
                                chosen: locks().choice(category) == Some(candidate.id.as_str()),
                                can_vote: !locks().has_voted(category) && !is_voting(),
                                onvote: handle_vote,
                            }
                        }
                    }

                    if !candidates().iter().any(|c| c.category == category) {
                        p { class: "empty-note", "No participants in this category yet." }
                    }
                }
            }

            footer {
                class: "screen-footer",
                p { "Vote responsibly! You can vote once for each category." }
                p { "Results will be announced during the party. Good luck to all participants!" }
            }
        }
    }
}

#[component]
fn CandidateCard(
    candidate: Candidate,
    chosen: bool,
    can_vote: bool,
    onvote: EventHandler<Candidate>,
) -> Element {
    let card_class = if chosen {
        "card candidate-card candidate-card-chosen"
    } else {
        "card candidate-card"
    };
    let (button_class, button_label) = if chosen {
        ("btn-voted", "Voted!")
    } else if can_vote {
        ("btn-primary", "Vote Now")
    } else {
        ("btn-disabled", "Already Voted")
    };
    let voted = candidate.clone();

    rsx! {
        div {
            class: "{card_class}",
            h3 { class: "candidate-name", "{candidate.name}" }
            if let Some(department) = &candidate.department {
                p { class: "candidate-department", "{department}" }
            }
            if let Some(roll) = &candidate.roll_number {
                p { class: "candidate-roll", "Roll: {roll}" }
            }

            div {
                class: "candidate-votes",
                Icon { icon: FaHeart, width: 18, height: 18 }
                span { "{candidate.votes} votes" }
            }

            button {
                class: "{button_class}",
                disabled: !can_vote,
                onclick: move |_| onvote.call(voted.clone()),
                "{button_label}"
            }
        }
    }
}
