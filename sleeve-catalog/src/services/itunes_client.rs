//! iTunes Search API client.
//!
//! Thin transport wrapper: free-text album search and bulk id lookup.
//! Timeout and retry policy are applied by callers via
//! [`crate::utils::retry`], since different pipelines wrap these calls
//! with different policies.

use sleeve_common::{Error, Result};

use crate::models::itunes::{ItunesRecord, ItunesResponse};

/// Entity filter for lookup calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEntity {
    /// Album-level records only
    Album,
    /// Album plus song-level records
    Song,
}

impl LookupEntity {
    fn as_str(self) -> &'static str {
        match self {
            LookupEntity::Album => "album",
            LookupEntity::Song => "song",
        }
    }
}

/// iTunes Search API client.
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Free-text album search (`media=music`, `entity=album`).
    pub async fn search_albums(&self, term: &str, limit: u32) -> Result<Vec<ItunesRecord>> {
        let url = format!("{}/search", self.base_url);

        tracing::debug!(term, limit, "Querying iTunes search");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("term", term),
                ("media", "music"),
                ("entity", "album"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Self::parse_records(response).await
    }

    /// Bulk lookup by comma-joined identifier list.
    pub async fn lookup(&self, ids: &[u64], entity: LookupEntity) -> Result<Vec<ItunesRecord>> {
        let id_list = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/lookup", self.base_url);

        tracing::debug!(ids = %id_list, entity = entity.as_str(), "Querying iTunes lookup");

        let response = self
            .http_client
            .get(&url)
            .query(&[("id", id_list.as_str()), ("entity", entity.as_str())])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Self::parse_records(response).await
    }

    async fn parse_records(response: reqwest::Response) -> Result<Vec<ItunesRecord>> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(status.as_u16(), error_text));
        }

        let parsed: ItunesResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ItunesClient::new("https://itunes.apple.com", "sleeve-test/0.1");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ItunesClient::new("https://itunes.apple.com/", "sleeve-test/0.1").unwrap();
        assert_eq!(client.base_url, "https://itunes.apple.com");
    }

    #[test]
    fn test_lookup_entity_strings() {
        assert_eq!(LookupEntity::Album.as_str(), "album");
        assert_eq!(LookupEntity::Song.as_str(), "song");
    }
}
