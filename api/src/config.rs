//! Build-time endpoint configuration.
//!
//! A pure WASM client has no runtime environment, so the deployment is
//! baked in at compile time: set `FRESHERS_API_URL` (including the
//! `/api/v1/fresherParty` suffix) when building to target another backend.

const DEFAULT_BASE_URL: &str =
    "http://ec2-51-21-192-129.eu-north-1.compute.amazonaws.com/api/v1/fresherParty";

/// Base URL of the versioned REST API.
pub fn base_url() -> &'static str {
    option_env!("FRESHERS_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Endpoint of the best-effort push channel, derived from the REST origin.
///
/// The channel lives at the server origin, not under the versioned prefix.
pub fn socket_url() -> String {
    socket_url_for(base_url())
}

fn socket_url_for(base: &str) -> String {
    let ws = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    match ws.find("/api/") {
        Some(idx) => format!("{}/socket", &ws[..idx]),
        None => format!("{}/socket", ws.trim_end_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_url_swaps_scheme_and_drops_the_rest_prefix() {
        assert_eq!(
            socket_url_for("https://party.example.com/api/v1/fresherParty"),
            "wss://party.example.com/socket"
        );
        assert_eq!(
            socket_url_for("http://localhost:3000/api/v1/fresherParty"),
            "ws://localhost:3000/socket"
        );
    }

    #[test]
    fn socket_url_handles_bases_without_the_api_prefix() {
        assert_eq!(
            socket_url_for("http://localhost:3000"),
            "ws://localhost:3000/socket"
        );
    }
}
