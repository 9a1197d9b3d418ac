//! Best-effort live updates over the backend's push channel.
//!
//! The server announces `votesUpdated` / `participantsUpdated` events while
//! voting is open. [`use_live_votes`] exposes them as a bump counter:
//! screens read the counter inside their `use_resource` closure so a bump
//! re-runs the fetch. If the channel cannot connect the counter simply
//! never moves and the screens keep their manual-refresh behavior —
//! a failed connection must never block rendering.

use dioxus::prelude::*;

/// Subscribe to vote/participant change notifications.
pub fn use_live_votes() -> Signal<u64> {
    let ticks = use_signal(|| 0u64);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        connect(ticks);
    });

    ticks
}

/// True for payloads carrying one of the vote-related event names.
fn is_update_event(text: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => matches!(
            value.get("event").and_then(|event| event.as_str()),
            Some("votesUpdated" | "participantsUpdated")
        ),
        Err(_) => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn connect(mut ticks: Signal<u64>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let url = api::config::socket_url();
    let socket = match web_sys::WebSocket::new(&url) {
        Ok(socket) => socket,
        Err(err) => {
            tracing::warn!("live updates unavailable: {err:?}");
            return;
        }
    };

    let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
        move |event: web_sys::MessageEvent| {
            if let Some(text) = event.data().as_string() {
                if is_update_event(&text) {
                    ticks += 1;
                }
            }
        },
    );
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        tracing::warn!("live update channel error; falling back to manual refresh");
    });
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_both_update_events() {
        assert!(is_update_event(r#"{"event":"votesUpdated","data":{}}"#));
        assert!(is_update_event(r#"{"event":"participantsUpdated"}"#));
    }

    #[test]
    fn ignores_other_payloads() {
        assert!(!is_update_event(r#"{"event":"ping"}"#));
        assert!(!is_update_event(r#"{"data":{}}"#));
        assert!(!is_update_event("not json"));
    }
}
