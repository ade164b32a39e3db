//! Data models: wire DTOs for both remote services and the domain types
//! handed to callers. Wire types match the APIs exactly and are converted
//! to domain types at the service boundary.

pub mod itunes;
pub mod musicbrainz;
pub mod release;
