//! iTunes Search API wire types.
//!
//! These match what the API returns; convert to domain types at the
//! service boundary instead of leaking them further.
//!
//! Both `/search` and `/lookup` answer with the same envelope. Lookup
//! records are tagged by `wrapperType`: `"collection"` for album-level
//! records (which carry the `copyright` free text) and `"track"` for
//! song-level records (which carry `trackTimeMillis`).

use serde::{Deserialize, Serialize};

/// Wrapper tag for album-level records.
pub const WRAPPER_COLLECTION: &str = "collection";
/// Wrapper tag for song-level records.
pub const WRAPPER_TRACK: &str = "track";

/// Envelope shared by the search and lookup endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItunesResponse {
    pub result_count: u32,
    pub results: Vec<ItunesRecord>,
}

/// One record from an iTunes response.
///
/// Every field is optional: the API freely omits fields per record kind,
/// and missing data is resolved to absence downstream, never to an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItunesRecord {
    pub wrapper_type: Option<String>,
    pub collection_id: Option<u64>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub track_name: Option<String>,
    pub release_date: Option<String>,
    pub country: Option<String>,
    pub primary_genre_name: Option<String>,
    pub artwork_url60: Option<String>,
    pub artwork_url100: Option<String>,
    pub copyright: Option<String>,
    pub track_time_millis: Option<u64>,
}

impl ItunesRecord {
    /// Album-level record?
    pub fn is_collection(&self) -> bool {
        self.wrapper_type.as_deref() == Some(WRAPPER_COLLECTION)
    }

    /// Song-level record?
    pub fn is_track(&self) -> bool {
        self.wrapper_type.as_deref() == Some(WRAPPER_TRACK)
    }

    /// Highest-resolution artwork URL present, if any.
    pub fn best_artwork_url(&self) -> Option<&str> {
        self.artwork_url100
            .as_deref()
            .or(self.artwork_url60.as_deref())
    }
}
