use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    AddCandidate, Admin, Dashboard, Home, Login, Messages, Music, NavBar, Schedule, Signup, Voting,
};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/schedule")]
        Schedule {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/voting")]
        Voting {},
        #[route("/music")]
        Music {},
        #[route("/messages")]
        Messages {},
        #[route("/admin")]
        Admin {},
        #[route("/admin/candidates")]
        AddCandidate {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Where a guard bounced an anonymous visitor from, so login can send
    // them back afterwards.
    let redirect = use_signal(|| Option::<Route>::None);
    use_context_provider(|| guard::RedirectTarget(redirect));

    // Set when a non-admin hits an admin route; the dashboard shows a
    // notice until dismissed.
    let unauthorized = use_signal(|| false);
    use_context_provider(|| guard::UnauthorizedNotice(unauthorized));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
