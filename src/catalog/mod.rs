//! HTTP client for the catalog backend.
//!
//! Three endpoints, specified only at their boundary: combined text+filter
//! search, lightweight match suggestions, and the per-artist detail payload.
//! Transport-level failure (non-success status or network error) is the only
//! error signaled to callers; no structured error body is consumed.

mod artist;
mod search;
mod suggest;

pub use artist::artist_detail;
pub use search::search;
pub use suggest::suggestions;
