//! Prometheus metrics for the album service.
//!
//! One counter per store operation plus counters for the two failure modes
//! (missed lookups, malformed request bodies).

use metrics::{counter, describe_counter};

// === Metric Name Constants ===

/// Albums listed counter metric name.
pub const METRIC_ALBUMS_LISTED: &str = "albums_listed_total";
/// Albums created counter metric name.
pub const METRIC_ALBUMS_CREATED: &str = "albums_created_total";
/// Albums updated counter metric name.
pub const METRIC_ALBUMS_UPDATED: &str = "albums_updated_total";
/// Albums deleted counter metric name.
pub const METRIC_ALBUMS_DELETED: &str = "albums_deleted_total";
/// Missed lookups counter metric name.
pub const METRIC_LOOKUPS_MISSED: &str = "album_lookups_missed_total";
/// Malformed request bodies counter metric name.
pub const METRIC_BAD_REQUESTS: &str = "album_bad_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_ALBUMS_LISTED, "Collection list requests served");
    describe_counter!(METRIC_ALBUMS_CREATED, "Albums appended to the collection");
    describe_counter!(METRIC_ALBUMS_UPDATED, "Albums replaced in place");
    describe_counter!(METRIC_ALBUMS_DELETED, "Albums removed from the collection");
    describe_counter!(METRIC_LOOKUPS_MISSED, "Lookups that matched no album");
    describe_counter!(METRIC_BAD_REQUESTS, "Request bodies that failed to parse");
}

/// Record a collection list.
pub fn inc_albums_listed() {
    counter!(METRIC_ALBUMS_LISTED).increment(1);
}

/// Record an album creation.
pub fn inc_albums_created() {
    counter!(METRIC_ALBUMS_CREATED).increment(1);
}

/// Record an album update.
pub fn inc_albums_updated() {
    counter!(METRIC_ALBUMS_UPDATED).increment(1);
}

/// Record an album deletion.
pub fn inc_albums_deleted() {
    counter!(METRIC_ALBUMS_DELETED).increment(1);
}

/// Record a lookup that matched no album.
pub fn inc_lookups_missed() {
    counter!(METRIC_LOOKUPS_MISSED).increment(1);
}

/// Record a request body that failed to parse.
pub fn inc_bad_requests() {
    counter!(METRIC_BAD_REQUESTS).increment(1);
}
