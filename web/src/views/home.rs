//! Public landing page.

use dioxus::prelude::*;
use ui::icons::{FaCalendarDays, FaMusic, FaTrophy};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();
    let voting_target = if signed_in { Route::Voting {} } else { Route::Login {} };
    let music_target = if signed_in { Route::Music {} } else { Route::Login {} };

    rsx! {
        div {
            class: "home-screen",
            section {
                class: "hero",
                p { class: "hero-kicker", "Freshers' Night · October 10 & 11, 2025" }
                h1 { class: "hero-title", "Two nights. One unforgettable welcome." }
                p {
                    class: "hero-copy",
                    "Vote for Mr & Ms Freshie, shape the DJ's setlist, and drop anonymous \
                     hype for your batchmates. Everything for the night lives here."
                }
                div {
                    class: "hero-actions",
                    if signed_in {
                        Link { class: "btn-primary", to: Route::Dashboard {}, "Open dashboard" }
                    } else {
                        Link { class: "btn-primary", to: Route::Signup {}, "Create my account" }
                        Link { class: "btn-secondary", to: Route::Login {}, "I already have one" }
                    }
                }
            }

            section {
                class: "feature-section",
                h2 { "Your essentials for the night" }
                div {
                    class: "tile-grid",
                    div {
                        class: "card tile",
                        Icon { icon: FaCalendarDays, width: 24, height: 24 }
                        h3 { "Event Timeline" }
                        p { "A pocket guide for every performance and reveal" }
                        Link { class: "btn-secondary", to: Route::Schedule {}, "See the schedule" }
                    }
                    div {
                        class: "card tile",
                        Icon { icon: FaTrophy, width: 24, height: 24 }
                        h3 { "Mr & Ms Freshie" }
                        p { "Cast your votes when the spotlight goes live" }
                        Link {
                            class: "btn-secondary",
                            to: voting_target.clone(),
                            "Go to voting"
                        }
                    }
                    div {
                        class: "card tile",
                        Icon { icon: FaMusic, width: 24, height: 24 }
                        h3 { "Curate the Sound" }
                        p { "Drop up to three Spotify tracks for the DJ" }
                        Link {
                            class: "btn-secondary",
                            to: music_target.clone(),
                            "Suggest songs"
                        }
                    }
                }
            }
        }
    }
}
