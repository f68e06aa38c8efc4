use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Activity — discriminated on-chain event record
// ---------------------------------------------------------------------------

/// An on-chain event for a token, discriminated by the GraphQL `__typename`.
///
/// The API returns more activity kinds than the SDK queries for; anything
/// outside the selection set deserializes as [`Activity::Other`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Activity {
    #[serde(rename = "TokenMintedActivity", rename_all = "camelCase")]
    Minted { created_at: Option<String> },

    #[serde(rename = "TokenPurchasedActivity", rename_all = "camelCase")]
    Purchased {
        buyer: String,
        seller: String,
        payment: Payment,
    },

    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub price: String,
    pub currency_symbol: String,
}

// ---------------------------------------------------------------------------
// ActivityRecord — an activity stitched to the listing it was sampled for
// ---------------------------------------------------------------------------

/// An activity annotated with the domain and token it belongs to.
///
/// Produced by the orderbook snapshot, which samples activity per listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub domain_name: String,
    pub token_id: String,
    pub activity: Activity,
}
