//! Search-hit normalization.
//!
//! Converts raw search records into [`ReleaseSummary`] values: artwork
//! URLs rewritten to the high-resolution variant, release dates reduced to
//! a calendar year, and the list sorted newest-first. Pure, no I/O.

use std::cmp::Reverse;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;

use crate::models::itunes::ItunesRecord;
use crate::models::release::ReleaseSummary;

/// Replacement resolution token for artwork URLs.
const HIGH_RES_TOKEN: &str = "/600x600bb.";

/// Resolution token embedded in iTunes artwork URLs, e.g. `/100x100bb.`
fn artwork_resolution_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/\d+x\d+bb\.").expect("invalid artwork pattern"))
}

/// Rewrite an artwork URL to its 600x600 variant.
///
/// URLs without a resolution token come back unchanged.
pub fn to_high_res_artwork_url(url: &str) -> String {
    artwork_resolution_pattern()
        .replace(url, HIGH_RES_TOKEN)
        .into_owned()
}

/// Parse an iTunes release date. RFC 3339 normally; a bare date as
/// fallback. Failure is silent.
fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Calendar year of a release-date string, absent when unparseable.
pub fn release_year(raw: &str) -> Option<i32> {
    parse_release_date(raw).map(|date| date.year())
}

/// Sort key: release timestamp in milliseconds. Records with unparseable
/// or missing dates sort as the epoch (oldest).
fn release_sort_key(record: &ItunesRecord) -> i64 {
    record
        .release_date
        .as_deref()
        .and_then(parse_release_date)
        .map(|date| date.timestamp_millis())
        .unwrap_or(0)
}

/// Normalize raw search records into summaries, sorted by descending
/// release date. The sort is stable, so undated records keep their input
/// order at the tail.
pub fn normalize_search_hits(mut records: Vec<ItunesRecord>) -> Vec<ReleaseSummary> {
    records.sort_by_key(|record| Reverse(release_sort_key(record)));
    records.into_iter().map(to_release_summary).collect()
}

/// Convert one raw record. Missing fields resolve to empty or absent
/// values, never to errors; `label` stays absent until enrichment.
fn to_release_summary(record: ItunesRecord) -> ReleaseSummary {
    let year = record.release_date.as_deref().and_then(release_year);
    let cover_image_url = record
        .best_artwork_url()
        .map(to_high_res_artwork_url)
        .unwrap_or_default();

    ReleaseSummary {
        id: record.collection_id.unwrap_or_default(),
        artist: record.artist_name.unwrap_or_default(),
        title: record.collection_name.unwrap_or_default(),
        label: None,
        year,
        country: record.country,
        genre: record.primary_genre_name,
        cover_image_url,
    }
}
