//! Domain types for the caller-facing list and detail shapes.
//!
//! Both are transient, request-scoped values: constructed fresh per
//! request, never persisted, never mutated in place by concurrent workers.

use serde::{Deserialize, Serialize};

/// One search hit in list-view shape.
///
/// `id` is the primary-catalog identifier and the join key for all
/// enrichment. After construction, fields are only ever upgraded from
/// absent to present (`label` by the enrichment merger) — never
/// overwritten with a different value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub id: u64,
    pub artist: String,
    pub title: String,
    /// Absent until label enrichment, and still absent if enrichment failed
    pub label: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub genre: Option<String>,
    /// Normalized to the 600x600 artwork variant; empty when the hit
    /// carried no artwork URL
    pub cover_image_url: String,
}

/// One release in detail-view shape, including the tracklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDetail {
    pub id: u64,
    pub title: String,
    pub year: Option<i32>,
    pub country: Option<String>,
    /// Geographic origin of the primary artist, secondary-source derived
    pub origin: Option<String>,
    /// Zero or one front-cover entries
    pub images: Vec<ArtworkImage>,
    pub artists: Vec<ArtistRef>,
    /// Zero or one inferred label names
    pub labels: Vec<LabelRef>,
    pub genres: Vec<String>,
    /// Always empty for this data source
    pub styles: Vec<String>,
    /// Original track order; positions are 1-based ordinal strings
    pub tracklist: Vec<TrackEntry>,
}

/// One artwork reference on a detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkImage {
    pub url: String,
    pub thumbnail_url: String,
    /// Artwork role; the catalog only ever yields "front"
    pub kind: String,
}

/// An artist name on a detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

/// An inferred record-label name on a detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRef {
    pub name: String,
}

/// One tracklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// 1-based ordinal, as a string
    pub position: String,
    pub title: String,
    /// `M:SS`, absent when the source carried no duration
    pub duration: Option<String>,
}
