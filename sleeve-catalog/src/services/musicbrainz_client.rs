//! MusicBrainz artist-origin client.
//!
//! Secondary source for the geographic origin of a release's primary
//! artist. Lookups are single-attempt best-effort: callers treat any
//! failure as "origin unknown". Requests are paced to 1 per second and
//! carry an identifying User-Agent per MusicBrainz API policy.

use std::time::Duration;

use sleeve_common::{Error, Result};

use crate::models::musicbrainz::ArtistSearchResponse;
use crate::utils::pacing::Pacer;

const RATE_LIMIT_MS: u64 = 1000; // 1 request per second

/// MusicBrainz artist-search client.
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    pacer: Pacer,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            pacer: Pacer::new(Duration::from_millis(RATE_LIMIT_MS)),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Geographic origin of the best-matching artist for `artist_name`.
    ///
    /// `Ok(None)` when no artist matched or the match carries neither an
    /// area nor a country.
    pub async fn artist_origin(&self, artist_name: &str) -> Result<Option<String>> {
        self.pacer.pace().await;

        let url = format!("{}/artist", self.base_url);
        let query = format!("artist:{}", artist_name);

        tracing::debug!(artist = artist_name, "Querying MusicBrainz artist search");

        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query.as_str()), ("fmt", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(status.as_u16(), error_text));
        }

        let parsed: ArtistSearchResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        let origin = parsed.artists.first().and_then(|artist| artist.origin());

        if let Some(origin) = &origin {
            tracing::info!(
                artist = artist_name,
                origin = %origin,
                "Resolved artist origin"
            );
        }

        Ok(origin)
    }
}
