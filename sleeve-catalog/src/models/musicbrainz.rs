//! MusicBrainz artist-search wire types.
//!
//! Only the fields the origin lookup reads: the best-matching artist's
//! `area` name and `country` code.

use serde::{Deserialize, Serialize};

/// Response from `/ws/2/artist?query=...&fmt=json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artists: Vec<MbArtist>,
}

/// One artist record in a search response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MbArtist {
    pub name: Option<String>,
    pub country: Option<String>,
    pub area: Option<MbArea>,
}

/// Geographic area attached to an artist.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MbArea {
    pub name: Option<String>,
}

impl MbArtist {
    /// Geographic origin: the area name when present, else the country code.
    pub fn origin(&self) -> Option<String> {
        self.area
            .as_ref()
            .and_then(|area| area.name.clone())
            .or_else(|| self.country.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_prefers_area_name() {
        let json = r#"{
            "artists": [{
                "name": "Protomartyr",
                "country": "US",
                "area": { "name": "Detroit" }
            }]
        }"#;

        let response: ArtistSearchResponse = serde_json::from_str(json).unwrap();
        let artist = response.artists.first().unwrap();
        assert_eq!(artist.origin().as_deref(), Some("Detroit"));
    }

    #[test]
    fn test_origin_falls_back_to_country() {
        let json = r#"{
            "artists": [{ "name": "Someone", "country": "GB" }]
        }"#;

        let response: ArtistSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.artists[0].origin().as_deref(), Some("GB"));
    }

    #[test]
    fn test_origin_absent_when_neither_present() {
        let artist = MbArtist::default();
        assert!(artist.origin().is_none());
    }

    #[test]
    fn test_deserialize_empty_artist_list() {
        let response: ArtistSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.artists.is_empty());
    }
}
