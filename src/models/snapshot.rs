use serde::Serialize;

use super::activity::ActivityRecord;
use super::listing::Listing;

// ---------------------------------------------------------------------------
// OrderbookSnapshot
// ---------------------------------------------------------------------------

/// A page of listings stitched together with a small sample of activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookSnapshot {
    pub listings: Vec<Listing>,
    pub activities: Vec<ActivityRecord>,
    pub total_listings: i64,
}

// ---------------------------------------------------------------------------
// AnalyticsSnapshot
// ---------------------------------------------------------------------------

/// Client-computed aggregates over the most recently fetched page of listings.
///
/// NOT a true global aggregate: the upstream API returns a bounded page, so
/// volume, average, and floor describe that page only. Totals are the counts
/// the API claims.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_domains: i64,
    pub total_listings: i64,
    /// Sum of normalized listing prices, 2 decimal places.
    pub total_volume: String,
    /// Mean normalized price, 4 decimal places.
    pub average_price: String,
    /// Minimum normalized price, 4 decimal places.
    pub floor_price: String,
    /// Up to 10 most recent listings from the fetched page.
    pub recent_listings: Vec<Listing>,
}
