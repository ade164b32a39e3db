//! Caller-facing catalog operations.
//!
//! [`Catalog`] owns both remote clients and runs the list and detail
//! pipelines. Enrichment failures never fail a call; only the primary
//! search, or a detail lookup whose fallback is also exhausted, surfaces
//! an error.

use sleeve_common::Result;

use crate::config::CatalogConfig;
use crate::models::release::{ReleaseDetail, ReleaseSummary};
use crate::services::detail::{assemble_detail, fetch_detail_records};
use crate::services::enrichment::{collect_labels, enrich_labels, partition_ids, Enriched};
use crate::services::itunes_client::{ItunesClient, LookupEntity};
use crate::services::musicbrainz_client::MusicBrainzClient;
use crate::services::normalizer::normalize_search_hits;

/// Search term used when the caller does not supply one.
pub const DEFAULT_SEARCH_TERM: &str = "post punk";
/// Result-count limit used when the caller does not supply one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 12;

/// Entry point for the presentation layer.
pub struct Catalog {
    config: CatalogConfig,
    itunes: ItunesClient,
    musicbrainz: MusicBrainzClient,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let itunes = ItunesClient::new(&config.itunes_base_url, &config.user_agent)?;
        let musicbrainz =
            MusicBrainzClient::new(&config.musicbrainz_base_url, &config.user_agent)?;

        Ok(Self {
            config,
            itunes,
            musicbrainz,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(CatalogConfig::default())
    }

    /// Search releases and enrich each hit with an inferred record label.
    ///
    /// Fails only on the primary search; label enrichment is best-effort
    /// and degrades to unlabeled summaries.
    pub async fn fetch_release_summaries(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ReleaseSummary>> {
        let hits = self.itunes.search_albums(term, limit).await?;
        let summaries = normalize_search_hits(hits);

        tracing::info!(term, count = summaries.len(), "Search returned summaries");

        let groups = partition_ids(&summaries, self.config.batch_size);
        let scheduler = collect_labels(
            groups,
            self.config.batch_pacing,
            &self.config.batch_lookup,
            |ids| async move { self.itunes.lookup(&ids, LookupEntity::Album).await },
        );

        let enriched = enrich_labels(summaries, scheduler).await;
        if let Enriched::Degraded { reason, .. } = &enriched {
            tracing::warn!(reason = %reason, "Returning unenriched summaries");
        }

        Ok(enriched.into_value())
    }

    /// `fetch_release_summaries` with the stock term and limit.
    pub async fn fetch_default_release_summaries(&self) -> Result<Vec<ReleaseSummary>> {
        self.fetch_release_summaries(DEFAULT_SEARCH_TERM, DEFAULT_SEARCH_LIMIT)
            .await
    }

    /// Resolve one release id into a full detail record.
    ///
    /// Fails only when both the song-level lookup and the album-level
    /// fallback are exhausted. Artist-origin enrichment is best-effort:
    /// its failure leaves `origin` absent, and it is skipped entirely
    /// when the album carries no artist name.
    pub async fn fetch_release_detail(&self, id: u64) -> Result<ReleaseDetail> {
        let records = fetch_detail_records(
            id,
            &self.config.detail_primary,
            &self.config.detail_fallback,
            || async move { self.itunes.lookup(&[id], LookupEntity::Song).await },
            || async move { self.itunes.lookup(&[id], LookupEntity::Album).await },
        )
        .await?;

        let mut detail = assemble_detail(id, &records);

        if let Some(artist) = detail.artists.first().map(|artist| artist.name.clone()) {
            match self.musicbrainz.artist_origin(&artist).await {
                Ok(origin) => detail.origin = origin,
                Err(err) => {
                    tracing::warn!(
                        release_id = id,
                        artist = %artist,
                        error = %err,
                        "Origin lookup failed, leaving origin unset"
                    );
                }
            }
        }

        Ok(detail)
    }
}
