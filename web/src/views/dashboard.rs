//! Dashboard: profile card, event stats, and navigation tiles.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Spinner};
use ui::icons::{FaEnvelope, FaMusic, FaShieldHalved, FaTrophy, FaUser};
use ui::{make_client, session_expired, use_auth, Icon};

use api::Category;

use crate::guard::{use_unauthorized_notice, RequireAuth};
use crate::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Stats {
    mr_candidates: usize,
    miss_candidates: usize,
    my_songs: usize,
    my_messages: usize,
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardScreen {}
        }
    }
}

#[component]
fn DashboardScreen() -> Element {
    let auth = use_auth();
    let mut unauthorized = use_unauthorized_notice();
    let mut stats = use_signal(Stats::default);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = make_client();
        let mut next = Stats::default();

        match client.candidates_by_category(Category::MrFresher).await {
            Ok(candidates) => next.mr_candidates = candidates.len(),
            Err(err) if err.is_unauthorized() => {
                session_expired(auth);
                return;
            }
            Err(err) => tracing::warn!("could not load Mr. Fresher candidates: {err}"),
        }
        match client.candidates_by_category(Category::MissFresher).await {
            Ok(candidates) => next.miss_candidates = candidates.len(),
            Err(err) => tracing::warn!("could not load Ms. Freshie candidates: {err}"),
        }
        // Personal stats are best-effort; the dashboard renders without them.
        if let Ok(links) = client.my_song_suggestions().await {
            next.my_songs = links.len();
        }
        if let Ok(messages) = client.my_messages().await {
            next.my_messages = messages.len();
        }

        stats.set(next);
        loading.set(false);
    });

    let state = auth();
    let show_notice = unauthorized.0();

    rsx! {
        div {
            class: "dashboard-screen",

            if show_notice {
                Alert {
                    kind: AlertKind::Error,
                    span { "That area is for organisers only." }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| unauthorized.0.set(false),
                        "Dismiss"
                    }
                }
            }

            div {
                class: "card welcome-card",
                div {
                    class: "welcome-copy",
                    p { class: "welcome-kicker", "Freshers' Night 2025" }
                    h1 { "Welcome back, {state.user_name()}" }
                }
                div {
                    class: "welcome-profile",
                    Icon { icon: FaUser, width: 18, height: 18 }
                    div {
                        p { class: "welcome-name", "{state.user_name()}" }
                        p { class: "welcome-email", "{state.user_email()}" }
                    }
                }
            }

            if loading() {
                Spinner { label: "Loading your night..." }
            } else {
                div {
                    class: "stat-grid",
                    StatCard { label: "Mr. Fresher candidates", value: stats().mr_candidates }
                    StatCard { label: "Ms. Freshie candidates", value: stats().miss_candidates }
                    StatCard { label: "Songs you suggested", value: stats().my_songs }
                    StatCard { label: "Messages you sent", value: stats().my_messages }
                }
            }

            div {
                class: "tile-grid",
                div {
                    class: "card tile",
                    Icon { icon: FaTrophy, width: 24, height: 24 }
                    h3 { "Mr & Ms Freshie" }
                    p { "Cast your votes when the spotlight goes live" }
                    Link { class: "btn-secondary", to: Route::Voting {}, "Go vote" }
                }
                div {
                    class: "card tile",
                    Icon { icon: FaMusic, width: 24, height: 24 }
                    h3 { "Curate the Sound" }
                    p { "Drop up to three Spotify tracks for the DJ" }
                    Link { class: "btn-primary", to: Route::Music {}, "Suggest songs" }
                }
                div {
                    class: "card tile",
                    Icon { icon: FaEnvelope, width: 24, height: 24 }
                    h3 { "Anonymous messages" }
                    p { "Send a compliment or confession, no names attached" }
                    Link { class: "btn-secondary", to: Route::Messages {}, "Write one" }
                }
                if state.is_admin_user() {
                    div {
                        class: "card tile tile-admin",
                        Icon { icon: FaShieldHalved, width: 24, height: 24 }
                        h3 { "Organiser tools" }
                        p { "Candidates, song queue, and message moderation" }
                        Link { class: "btn-primary", to: Route::Admin {}, "Open admin panel" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
