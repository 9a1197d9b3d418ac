//! Top navigation shell. Every routed screen renders inside its outlet.

use dioxus::prelude::*;
use ui::icons::{FaChampagneGlasses, FaShieldHalved};
use ui::{use_auth, Icon, LogoutButton};

use crate::Route;

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let state = auth();
    let signed_in = state.user.is_some();

    // Protected links lead to login until a session exists.
    let links = [
        ("Schedule", Route::Schedule {}, false),
        ("Voting", Route::Voting {}, true),
        ("Music", Route::Music {}, true),
        ("Messages", Route::Messages {}, true),
    ]
    .map(|(label, route, protected)| {
        if protected && !signed_in {
            (label, Route::Login {})
        } else {
            (label, route)
        }
    });

    rsx! {
        header {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: Route::Home {},
                Icon { icon: FaChampagneGlasses, width: 18, height: 18 }
                span { "Freshers' Night" }
            }

            nav {
                class: "navbar-links",
                for (label, route) in links {
                    Link {
                        class: "navbar-link",
                        to: route,
                        "{label}"
                    }
                }
                if signed_in {
                    Link { class: "navbar-link", to: Route::Dashboard {}, "Dashboard" }
                }
                if state.is_admin_user() {
                    Link {
                        class: "navbar-link navbar-link-admin",
                        to: Route::Admin {},
                        Icon { icon: FaShieldHalved, width: 13, height: 13 }
                        span { "Admin" }
                    }
                }
            }

            div {
                class: "navbar-session",
                if signed_in {
                    div {
                        class: "navbar-user",
                        p { class: "navbar-user-name", "{state.user_name()}" }
                        p { class: "navbar-user-email", "{state.user_email()}" }
                    }
                    LogoutButton { class: "btn-ghost btn-small" }
                } else {
                    Link { class: "btn-secondary btn-small", to: Route::Login {}, "Login" }
                    Link { class: "btn-primary btn-small", to: Route::Signup {}, "Sign up" }
                }
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
