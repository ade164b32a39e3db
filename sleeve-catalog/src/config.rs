//! Catalog configuration
//!
//! Endpoint addresses and retry/pacing policy values as plain data. There
//! is no file or environment resolution: the endpoints are fixed external
//! services and the policies are production defaults that tests override
//! in code.

use std::time::Duration;

use crate::utils::retry::RetryPolicy;

const ITUNES_BASE_URL: &str = "https://itunes.apple.com";
const MUSICBRAINZ_BASE_URL: &str = "https://musicbrainz.org/ws/2";
const USER_AGENT: &str = "sleeve/0.1.0 (https://github.com/sleeve-music/sleeve)";

/// Identifiers per bulk-lookup group.
const BATCH_SIZE: usize = 10;
/// Minimum spacing between bulk-lookup dispatches (the secondary service
/// rate-limits bursts; the first dispatch is immediate).
const BATCH_PACING_MS: u64 = 250;

/// Configuration for a [`crate::Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub itunes_base_url: String,
    pub musicbrainz_base_url: String,
    pub user_agent: String,
    /// Identifiers per bulk-lookup group
    pub batch_size: usize,
    /// Minimum spacing between bulk-lookup dispatches
    pub batch_pacing: Duration,
    /// Policy for batched label lookups
    pub batch_lookup: RetryPolicy,
    /// Policy for the song-level detail lookup
    pub detail_primary: RetryPolicy,
    /// Policy for the album-level detail fallback (fixed delay, one retry)
    pub detail_fallback: RetryPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            itunes_base_url: ITUNES_BASE_URL.to_string(),
            musicbrainz_base_url: MUSICBRAINZ_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            batch_size: BATCH_SIZE,
            batch_pacing: Duration::from_millis(BATCH_PACING_MS),
            batch_lookup: RetryPolicy {
                max_retries: 2,
                base_delay: Duration::from_millis(500),
                backoff_multiplier: 2,
                attempt_timeout: Duration::from_secs(8),
            },
            detail_primary: RetryPolicy {
                max_retries: 2,
                base_delay: Duration::from_millis(1000),
                backoff_multiplier: 2,
                attempt_timeout: Duration::from_secs(8),
            },
            detail_fallback: RetryPolicy {
                max_retries: 1,
                base_delay: Duration::from_millis(1000),
                backoff_multiplier: 1,
                attempt_timeout: Duration::from_secs(8),
            },
        }
    }
}
