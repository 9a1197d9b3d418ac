//! Route guards: render the protected content, or redirect based on the
//! auth context. No redirect decision is made while the initial session
//! check is still resolving, so a refresh on a protected screen never
//! flashes the login page.

use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;

use crate::Route;

/// Where an anonymous visitor was headed before being bounced to login.
#[derive(Clone, Copy)]
pub struct RedirectTarget(pub Signal<Option<Route>>);

/// Raised when a non-admin is bounced off an admin route.
#[derive(Clone, Copy)]
pub struct UnauthorizedNotice(pub Signal<bool>);

pub fn use_redirect_target() -> RedirectTarget {
    use_context()
}

pub fn use_unauthorized_notice() -> UnauthorizedNotice {
    use_context()
}

/// Renders its children only for authenticated users.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut redirect = use_redirect_target();

    let state = auth();
    if state.loading {
        return rsx! {
            Spinner { label: "Checking your session..." }
        };
    }
    if state.user.is_none() {
        redirect.0.set(Some(route));
        nav.replace(Route::Login {});
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Renders its children only for authenticated admins.
#[component]
pub fn RequireAdmin(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut redirect = use_redirect_target();
    let mut unauthorized = use_unauthorized_notice();

    let state = auth();
    if state.loading {
        return rsx! {
            Spinner { label: "Checking your session..." }
        };
    }
    if state.user.is_none() {
        redirect.0.set(Some(route));
        nav.replace(Route::Login {});
        return rsx! {};
    }
    if !state.is_admin_user() {
        unauthorized.0.set(true);
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }
    rsx! {
        {children}
    }
}
