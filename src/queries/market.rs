//! Composite market views: the orderbook snapshot and the analytics
//! snapshot, synthesized client-side from the raw listing data because no
//! dedicated upstream query exists for either.

use crate::error::Result;
use crate::format::normalize_price;
use crate::models::{ActivityRecord, AnalyticsSnapshot, OrderbookSnapshot};
use crate::outcome::Fetched;
use crate::queries::activities::ActivityQuery;
use crate::queries::listings::ListingQuery;
use crate::queries::names::{ListNamesParams, NameQuery};
use crate::transport::Transport;

/// Listings fetched for the orderbook snapshot.
const ORDERBOOK_LISTINGS: i64 = 20;
/// Listings sampled for per-token activity lookups.
const ACTIVITY_SAMPLE: usize = 3;
/// Activity records requested per sampled token.
const ACTIVITY_PER_TOKEN: i64 = 3;
/// Cap on stitched activity records.
const ACTIVITY_CAP: usize = 10;

/// Names page used as the analytics domain-count basis.
const ANALYTICS_NAMES: i64 = 100;
/// Listings page the analytics aggregates are computed over.
const ANALYTICS_LISTINGS: i64 = 50;
/// Recent listings included in the analytics snapshot.
const ANALYTICS_RECENT: usize = 10;

// ---------------------------------------------------------------------------
// MarketQuery
// ---------------------------------------------------------------------------

/// Composite queries stitched together from the primary interfaces.
pub struct MarketQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> MarketQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // -- Orderbook snapshot ------------------------------------------------

    /// Fetch a page of listings plus a small sample of per-token activity.
    ///
    /// Activity is looked up sequentially for the first few listings; a
    /// failing lookup is logged and skipped rather than failing the
    /// snapshot. When any lookup failed the outcome is `Degraded` with the
    /// affected domains named in the reason.
    pub fn orderbook_snapshot(&self) -> Result<Fetched<OrderbookSnapshot>> {
        let listings = ListingQuery::new(self.transport).list(ORDERBOOK_LISTINGS, 0)?;
        let activity_query = ActivityQuery::new(self.transport);

        let mut activities: Vec<ActivityRecord> = Vec::new();
        let mut skipped: Vec<String> = Vec::new();

        for listing in listings.items.iter().take(ACTIVITY_SAMPLE) {
            match activity_query.for_token(&listing.token_id, ACTIVITY_PER_TOKEN) {
                Ok(page) => {
                    activities.extend(page.items.into_iter().map(|activity| ActivityRecord {
                        domain_name: listing.name.clone(),
                        token_id: listing.token_id.clone(),
                        activity,
                    }));
                }
                Err(e) => {
                    tracing::warn!(domain = %listing.name, error = %e, "no activity for token; skipping");
                    skipped.push(listing.name.clone());
                }
            }
        }
        activities.truncate(ACTIVITY_CAP);

        let snapshot = OrderbookSnapshot {
            total_listings: listings.total_count,
            listings: listings.items,
            activities,
        };

        if skipped.is_empty() {
            Ok(Fetched::Fresh(snapshot))
        } else {
            Ok(Fetched::Degraded {
                data: snapshot,
                reason: format!("activity lookup failed for: {}", skipped.join(", ")),
            })
        }
    }

    // -- Analytics snapshot ------------------------------------------------

    /// Compute summary aggregates from the names and listings pages.
    ///
    /// Volume, average, and floor cover only the fetched listings page;
    /// unparseable prices are skipped. Totals are the counts the API claims.
    pub fn analytics_snapshot(&self) -> Result<AnalyticsSnapshot> {
        let names = NameQuery::new(self.transport).list(&ListNamesParams {
            take: ANALYTICS_NAMES,
            skip: 0,
            filter: None,
        })?;
        let listings = ListingQuery::new(self.transport).list(ANALYTICS_LISTINGS, 0)?;

        let mut total_volume = 0.0;
        let mut prices: Vec<f64> = Vec::new();
        for listing in &listings.items {
            if let Some(normalized) = normalize_price(&listing.price, listing.currency.decimals) {
                total_volume += normalized;
                prices.push(normalized);
            }
        }

        let average_price = if prices.is_empty() {
            0.0
        } else {
            total_volume / prices.len() as f64
        };
        let floor_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let floor_price = if floor_price.is_finite() { floor_price } else { 0.0 };

        let mut recent_listings = listings.items;
        recent_listings.truncate(ANALYTICS_RECENT);

        Ok(AnalyticsSnapshot {
            total_domains: names.total_count,
            total_listings: listings.total_count,
            total_volume: format!("{:.2}", total_volume),
            average_price: format!("{:.4}", average_price),
            floor_price: format!("{:.4}", floor_price),
            recent_listings,
        })
    }
}
