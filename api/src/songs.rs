//! # Song suggestions — validation, wire padding, and submission
//!
//! Users submit up to three Spotify links. Validation applies only to what
//! the user actually typed; the backend however expects exactly three
//! entries, so the batch is right-padded with a fixed placeholder track
//! before transmission. The padding is a wire-format accommodation and is
//! never shown to the user.

use serde_json::json;
use store::SessionStore;

use crate::client::Client;
use crate::error::Error;
use crate::types::{Envelope, MySongsPayload};

/// Every link must start with this prefix.
pub const SONG_LINK_PREFIX: &str = "https://open.spotify.com/";
/// Link kinds accepted after the prefix.
const ALLOWED_KINDS: [&str; 3] = ["track", "album", "playlist"];
/// Filler entry used to pad the batch up to the fixed wire length.
pub const PLACEHOLDER_SONG_LINK: &str =
    "https://open.spotify.com/track/1rEVydQSe04NJUqyyEyeEq?si=77634cc57bcb4d89";
/// Fixed number of entries the backend expects.
pub const MAX_SONG_LINKS: usize = 3;

/// True for links of the form
/// `https://open.spotify.com/(track|album|playlist)/...`.
pub fn is_valid_song_link(link: &str) -> bool {
    let Some(rest) = link.strip_prefix(SONG_LINK_PREFIX) else {
        return false;
    };
    ALLOWED_KINDS
        .iter()
        .any(|kind| rest.strip_prefix(kind).is_some_and(|r| r.starts_with('/')))
}

/// Validate the user-entered links and pad the batch to the wire length.
///
/// Empty and whitespace-only entries are ignored. A single invalid link
/// fails the whole batch; nothing is sent partially.
pub fn prepare_song_links(raw: &[String]) -> Result<Vec<String>, Error> {
    let links: Vec<String> = raw
        .iter()
        .map(|link| link.trim())
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect();

    if links.is_empty() {
        return Err(Error::validation(
            "Please provide at least one Spotify song link.",
        ));
    }
    if links.len() > MAX_SONG_LINKS {
        return Err(Error::validation("You can suggest at most three songs."));
    }
    if links.iter().any(|link| !is_valid_song_link(link)) {
        return Err(Error::validation(
            "Please enter valid Spotify links (must start with https://open.spotify.com/).",
        ));
    }

    Ok(pad_song_links(links))
}

fn pad_song_links(mut links: Vec<String>) -> Vec<String> {
    while links.len() < MAX_SONG_LINKS {
        links.push(PLACEHOLDER_SONG_LINK.to_string());
    }
    links
}

impl<S: SessionStore> Client<S> {
    /// Submit the user's song suggestions. Validates and pads locally
    /// before any network traffic.
    pub async fn submit_songs(&self, links: &[String]) -> Result<String, Error> {
        let song_links = prepare_song_links(links)?;
        let body = json!({ "songLinks": song_links });
        let envelope: Envelope<serde_json::Value> = self.post("/songs/submit", &body).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Song suggestions submitted successfully!".into()))
    }

    /// The current user's previously submitted links (padding included,
    /// exactly as stored server-side).
    pub async fn my_song_suggestions(&self) -> Result<Vec<String>, Error> {
        let envelope: Envelope<MySongsPayload> = self.get("/songs/my-suggestions").await?;
        Ok(envelope
            .data
            .map(|payload| payload.suggestions.song_links)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_track_album_and_playlist_links() {
        assert!(is_valid_song_link("https://open.spotify.com/track/abc123"));
        assert!(is_valid_song_link("https://open.spotify.com/album/xyz"));
        assert!(is_valid_song_link(
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"
        ));
    }

    #[test]
    fn rejects_non_spotify_and_malformed_links() {
        assert!(!is_valid_song_link("not-a-url"));
        assert!(!is_valid_song_link("http://open.spotify.com/track/abc"));
        assert!(!is_valid_song_link("https://open.spotify.com/artist/abc"));
        assert!(!is_valid_song_link("https://open.spotify.com/track"));
        assert!(!is_valid_song_link("https://open.spotify.com/trackabc/def"));
    }

    #[test]
    fn one_bad_link_fails_the_whole_batch() {
        let err = prepare_song_links(&links(&[
            "not-a-url",
            "https://open.spotify.com/track/abc",
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn at_least_one_link_is_required() {
        assert!(matches!(
            prepare_song_links(&links(&["", "  ", ""])),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn a_single_link_is_padded_to_exactly_three_entries() {
        let prepared =
            prepare_song_links(&links(&["https://open.spotify.com/track/abc"])).unwrap();
        assert_eq!(prepared.len(), MAX_SONG_LINKS);
        assert_eq!(prepared[0], "https://open.spotify.com/track/abc");
        assert_eq!(prepared[1], PLACEHOLDER_SONG_LINK);
        assert_eq!(prepared[2], PLACEHOLDER_SONG_LINK);
    }

    #[test]
    fn a_full_batch_is_not_padded() {
        let prepared = prepare_song_links(&links(&[
            "https://open.spotify.com/track/a",
            "https://open.spotify.com/track/b",
            "https://open.spotify.com/track/c",
        ]))
        .unwrap();
        assert_eq!(prepared.len(), 3);
        assert!(!prepared.contains(&PLACEHOLDER_SONG_LINK.to_string()));
    }

    #[tokio::test]
    async fn submit_rejects_bad_batches_before_any_network_call() {
        use crate::client::Client;
        use store::MemoryStore;

        // The base URL is unresolvable; an instant Validation error proves
        // nothing was sent.
        let client = Client::with_base_url("http://unreachable.invalid", MemoryStore::new());
        let err = client
            .submit_songs(&links(&["not-a-url", "https://open.spotify.com/track/abc"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn entries_are_trimmed_and_blanks_skipped() {
        let prepared = prepare_song_links(&links(&[
            "  https://open.spotify.com/track/a  ",
            "",
            "https://open.spotify.com/album/b",
        ]))
        .unwrap();
        assert_eq!(prepared[0], "https://open.spotify.com/track/a");
        assert_eq!(prepared[1], "https://open.spotify.com/album/b");
        assert_eq!(prepared[2], PLACEHOLDER_SONG_LINK);
    }
}
