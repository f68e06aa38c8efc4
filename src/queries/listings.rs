//! Listing queries: the paged orderbook listings and the relabeled offers
//! view derived from them.

use serde::Deserialize;
use serde_json::json;

use crate::error::{DomaError, Result};
use crate::models::{Listing, Offer, Page};
use crate::outcome::Fetched;
use crate::transport::{request, Transport};

const GET_LISTINGS: &str = r#"
    query GetListings($take: Int!, $skip: Int!) {
      listings(take: $take, skip: $skip) {
        items {
          id
          tokenId
          name
          price
          offererAddress
          orderbook
          expiresAt
          createdAt
          currency {
            symbol
            decimals
          }
          registrar {
            name
          }
          chain {
            name
            networkId
          }
        }
        totalCount
      }
    }
"#;

#[derive(Debug, Deserialize)]
struct ListingsData {
    listings: Page<Listing>,
}

// ---------------------------------------------------------------------------
// ListingQuery
// ---------------------------------------------------------------------------

/// Query interface for orderbook listings.
pub struct ListingQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> ListingQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // -- Paged list --------------------------------------------------------

    /// List listings with the given page size and offset.
    pub fn list(&self, take: i64, skip: i64) -> Result<Page<Listing>> {
        if take < 0 || skip < 0 {
            return Err(DomaError::InvalidArgument(
                "take and skip must be non-negative".into(),
            ));
        }
        let data: ListingsData = request(
            self.transport,
            GET_LISTINGS,
            json!({ "take": take, "skip": skip }),
        )?;
        Ok(data.listings)
    }

    // -- Offers (fabricated) -----------------------------------------------

    /// List offers.
    ///
    /// The upstream offers query is unavailable, so this relabels listings
    /// as offers (the listing's offerer becomes the buyer). The outcome is
    /// always `Degraded` so callers never mistake the result for authentic
    /// buy orders.
    pub fn offers(&self, take: i64) -> Result<Fetched<Page<Offer>>> {
        let listings = self.list(take, 0)?;
        let total_count = listings.total_count;
        let items = listings
            .items
            .into_iter()
            .map(Offer::from_listing)
            .collect();

        Ok(Fetched::Degraded {
            data: Page { items, total_count },
            reason: "upstream offers query unavailable; offers are relabeled listings".into(),
        })
    }
}
