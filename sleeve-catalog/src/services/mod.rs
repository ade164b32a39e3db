//! Service modules for the catalog pipelines

pub mod detail;
pub mod enrichment;
pub mod itunes_client;
pub mod label_inference;
pub mod musicbrainz_client;
pub mod normalizer;

pub use enrichment::Enriched;
pub use itunes_client::{ItunesClient, LookupEntity};
pub use label_inference::infer_label_from_copyright;
pub use musicbrainz_client::MusicBrainzClient;
