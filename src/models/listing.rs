use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing — a standing sell order for a tokenized domain
// ---------------------------------------------------------------------------

/// A sell order from the orderbook.
///
/// `price` is an integer string in the currency's minor unit; divide by
/// `10^currency.decimals` before display (see [`crate::format::format_price`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub token_id: String,
    pub name: String,
    pub price: String,
    pub offerer_address: String,
    pub orderbook: String,
    pub expires_at: Option<String>,
    pub created_at: Option<String>,
    pub currency: CurrencyInfo,
    pub registrar: Option<RegistrarRef>,
    pub chain: Option<ChainInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub name: String,
    pub network_id: String,
}

// ---------------------------------------------------------------------------
// Offer — a standing buy order
// ---------------------------------------------------------------------------

/// A buy order for a tokenized domain.
///
/// The upstream offers query is unavailable, so the SDK fabricates offers by
/// relabeling listings (the listing's offerer becomes the buyer). Operations
/// producing them return a `Degraded` outcome so callers never mistake them
/// for authentic orders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub domain_name: String,
    pub price: String,
    pub currency: CurrencyInfo,
    pub buyer: String,
    pub orderbook: String,
    pub expires_at: Option<String>,
    pub created_at: Option<String>,
    pub registrar: Option<String>,
    pub chain: Option<String>,
}

impl Offer {
    /// Relabel a listing as an offer.
    pub fn from_listing(listing: Listing) -> Self {
        Self {
            id: listing.id,
            domain_name: listing.name,
            price: listing.price,
            currency: listing.currency,
            buyer: listing.offerer_address,
            orderbook: listing.orderbook,
            expires_at: listing.expires_at,
            created_at: listing.created_at,
            registrar: listing.registrar.map(|r| r.name),
            chain: listing.chain.map(|c| c.name),
        }
    }
}
