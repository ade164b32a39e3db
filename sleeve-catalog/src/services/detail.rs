//! Release-detail pipeline.
//!
//! Resolves one release id into the detail-view shape: a song-level lookup
//! under the primary policy, an album-level fallback once that is
//! exhausted, then pure assembly of the tagged records. Both lookups are
//! injected as async closures so the fallback ordering is testable
//! without a network.

use std::future::Future;

use sleeve_common::time::format_track_duration;
use sleeve_common::Result;

use crate::models::itunes::ItunesRecord;
use crate::models::release::{ArtistRef, ArtworkImage, LabelRef, ReleaseDetail, TrackEntry};
use crate::services::label_inference::infer_label_from_copyright;
use crate::services::normalizer::{release_year, to_high_res_artwork_url};
use crate::utils::retry::{retry_with_timeout, RetryPolicy};

/// Fetch the record set for one release.
///
/// Song-level first; album-level once the primary policy is exhausted.
/// Exhaustion of both propagates to the caller — there is no further
/// fallback.
pub async fn fetch_detail_records<Fs, FutS, Fa, FutA>(
    id: u64,
    primary_policy: &RetryPolicy,
    fallback_policy: &RetryPolicy,
    lookup_songs: Fs,
    lookup_album: Fa,
) -> Result<Vec<ItunesRecord>>
where
    Fs: Fn() -> FutS,
    FutS: Future<Output = Result<Vec<ItunesRecord>>>,
    Fa: Fn() -> FutA,
    FutA: Future<Output = Result<Vec<ItunesRecord>>>,
{
    match retry_with_timeout("detail song lookup", primary_policy, || lookup_songs()).await {
        Ok(records) => Ok(records),
        Err(primary_err) => {
            tracing::warn!(
                release_id = id,
                error = %primary_err,
                "Song-level lookup exhausted, falling back to album-level"
            );
            retry_with_timeout("detail album lookup", fallback_policy, || lookup_album()).await
        }
    }
}

/// Assemble a [`ReleaseDetail`] from tagged lookup records.
///
/// The one collection record is the album; track records keep their
/// returned order, positions are 1-based ordinal strings. A response with
/// no collection record degrades to the requested id and empty fields.
/// `origin` is left unset here; the caller fills it from the secondary
/// source.
pub fn assemble_detail(requested_id: u64, records: &[ItunesRecord]) -> ReleaseDetail {
    let album = records.iter().find(|record| record.is_collection());

    let artwork_url = album
        .and_then(|album| album.best_artwork_url())
        .map(to_high_res_artwork_url)
        .unwrap_or_default();
    let images = if artwork_url.is_empty() {
        Vec::new()
    } else {
        vec![ArtworkImage {
            url: artwork_url.clone(),
            thumbnail_url: artwork_url,
            kind: "front".to_string(),
        }]
    };

    let artists = album
        .and_then(|album| album.artist_name.clone())
        .map(|name| vec![ArtistRef { name }])
        .unwrap_or_default();

    let labels = album
        .and_then(|album| infer_label_from_copyright(album.copyright.as_deref()))
        .map(|name| vec![LabelRef { name }])
        .unwrap_or_default();

    let genres = album
        .and_then(|album| album.primary_genre_name.clone())
        .map(|genre| vec![genre])
        .unwrap_or_default();

    let tracklist = records
        .iter()
        .filter(|record| record.is_track())
        .enumerate()
        .map(|(index, track)| TrackEntry {
            position: (index + 1).to_string(),
            title: track.track_name.clone().unwrap_or_default(),
            duration: track.track_time_millis.map(format_track_duration),
        })
        .collect();

    ReleaseDetail {
        id: album
            .and_then(|album| album.collection_id)
            .unwrap_or(requested_id),
        title: album
            .and_then(|album| album.collection_name.clone())
            .unwrap_or_default(),
        year: album
            .and_then(|album| album.release_date.as_deref())
            .and_then(release_year),
        country: album.and_then(|album| album.country.clone()),
        origin: None,
        images,
        artists,
        labels,
        genres,
        styles: Vec::new(),
        tracklist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album_record() -> ItunesRecord {
        ItunesRecord {
            wrapper_type: Some("collection".to_string()),
            collection_id: Some(1462899152),
            artist_name: Some("Drab Majesty".to_string()),
            collection_name: Some("Modern Mirror".to_string()),
            release_date: Some("2019-07-12T07:00:00Z".to_string()),
            country: Some("USA".to_string()),
            primary_genre_name: Some("Alternative".to_string()),
            artwork_url100: Some("https://example.com/a/100x100bb.jpg".to_string()),
            copyright: Some("℗ 2019 Dais Records".to_string()),
            ..Default::default()
        }
    }

    fn track_record(title: &str, millis: Option<u64>) -> ItunesRecord {
        ItunesRecord {
            wrapper_type: Some("track".to_string()),
            track_name: Some(title.to_string()),
            track_time_millis: millis,
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_full_detail() {
        let records = vec![
            album_record(),
            track_record("A Dialogue", Some(185_000)),
            track_record("The Other Side", Some(60_000)),
            track_record("Hidden Track", None),
        ];

        let detail = assemble_detail(1462899152, &records);

        assert_eq!(detail.id, 1462899152);
        assert_eq!(detail.title, "Modern Mirror");
        assert_eq!(detail.year, Some(2019));
        assert_eq!(detail.country.as_deref(), Some("USA"));
        assert_eq!(detail.origin, None);

        assert_eq!(detail.images.len(), 1);
        assert_eq!(detail.images[0].url, "https://example.com/a/600x600bb.jpg");
        assert_eq!(detail.images[0].kind, "front");

        assert_eq!(detail.artists.len(), 1);
        assert_eq!(detail.artists[0].name, "Drab Majesty");

        assert_eq!(detail.labels.len(), 1);
        assert_eq!(detail.labels[0].name, "Dais Records");

        assert_eq!(detail.genres, vec!["Alternative".to_string()]);
        assert!(detail.styles.is_empty());

        assert_eq!(detail.tracklist.len(), 3);
        assert_eq!(detail.tracklist[0].position, "1");
        assert_eq!(detail.tracklist[0].duration.as_deref(), Some("3:05"));
        assert_eq!(detail.tracklist[1].position, "2");
        assert_eq!(detail.tracklist[1].duration.as_deref(), Some("1:00"));
        assert_eq!(detail.tracklist[2].position, "3");
        assert_eq!(detail.tracklist[2].duration, None);
    }

    #[test]
    fn test_assemble_album_only_response() {
        let detail = assemble_detail(1462899152, &[album_record()]);
        assert_eq!(detail.id, 1462899152);
        assert!(detail.tracklist.is_empty());
        assert_eq!(detail.labels.len(), 1);
    }

    #[test]
    fn test_assemble_without_collection_record_degrades() {
        let records = vec![track_record("Orphan", Some(10_000))];
        let detail = assemble_detail(42, &records);

        assert_eq!(detail.id, 42);
        assert_eq!(detail.title, "");
        assert!(detail.images.is_empty());
        assert!(detail.artists.is_empty());
        assert!(detail.labels.is_empty());
        assert_eq!(detail.tracklist.len(), 1);
    }

    #[test]
    fn test_assemble_without_artwork_has_no_images() {
        let mut album = album_record();
        album.artwork_url60 = None;
        album.artwork_url100 = None;

        let detail = assemble_detail(1, &[album]);
        assert!(detail.images.is_empty());
    }

    #[test]
    fn test_assemble_without_copyright_has_no_labels() {
        let mut album = album_record();
        album.copyright = None;

        let detail = assemble_detail(1, &[album]);
        assert!(detail.labels.is_empty());
    }
}
