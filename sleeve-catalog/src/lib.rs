//! sleeve-catalog - music release catalog core
//!
//! Fetches release search results from the iTunes Search API and augments
//! each hit with metadata the primary API does not return directly: a
//! record label inferred from copyright notices, artist origin from
//! MusicBrainz, normalized high-resolution artwork URLs and formatted
//! track durations.
//!
//! Enrichment is best-effort by contract: secondary-service failures
//! degrade to absent fields and never fail the primary result. Only a
//! failed primary search, or a detail lookup whose fallback is also
//! exhausted, surfaces an error to the caller.

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use catalog::{Catalog, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_TERM};
pub use config::CatalogConfig;
pub use models::release::{ReleaseDetail, ReleaseSummary};
pub use sleeve_common::{Error, Result};
