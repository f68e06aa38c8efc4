//! Shared test fixtures for the Doma SDK integration tests.
//!
//! Provides `StaticTransport`, a scripted [`Transport`] that matches queries
//! by operation name and replies with canned `data` payloads or GraphQL
//! errors, plus builders for sample upstream payloads.

#![allow(dead_code)]

use doma_sdk::error::{DomaError, Result};
use doma_sdk::{DomaSdk, Transport};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// StaticTransport
// ---------------------------------------------------------------------------

enum Stub {
    Data(Value),
    GraphqlError(String),
}

/// A scripted transport: the first rule whose operation name appears in the
/// query text wins. Queries with no matching rule fail.
pub struct StaticTransport {
    rules: Vec<(String, Stub)>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Reply to queries containing `op` with the given `data` payload.
    pub fn with_data(mut self, op: &str, data: Value) -> Self {
        self.rules.push((op.to_string(), Stub::Data(data)));
        self
    }

    /// Reply to queries containing `op` with a GraphQL error.
    pub fn with_graphql_error(mut self, op: &str, message: &str) -> Self {
        self.rules
            .push((op.to_string(), Stub::GraphqlError(message.to_string())));
        self
    }

    /// Wrap this transport in a [`DomaSdk`].
    pub fn into_sdk(self) -> DomaSdk {
        DomaSdk::with_transport(Box::new(self))
    }
}

impl Transport for StaticTransport {
    fn execute(&self, query: &str, _variables: Value) -> Result<Value> {
        for (op, stub) in &self.rules {
            if query.contains(op.as_str()) {
                return match stub {
                    Stub::Data(v) => Ok(v.clone()),
                    Stub::GraphqlError(m) => Err(DomaError::Graphql(m.clone())),
                };
            }
        }
        Err(DomaError::Graphql(format!(
            "no stub matches query: {}",
            query.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Sample payload builders
// ---------------------------------------------------------------------------

/// Build a `GetNames` data payload.
pub fn names_page(names: &[&str], total_count: i64) -> Value {
    let items: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "names": { "items": items, "totalCount": total_count } })
}

/// Build a `GetDomainInfo` data payload for an existing name.
pub fn name_detail(name: &str) -> Value {
    json!({
        "name": {
            "name": name,
            "expiresAt": "2026-01-01T00:00:00Z",
            "tokenizedAt": "2024-06-15T12:00:00Z",
            "registrar": { "name": "D3 Registrar", "websiteUrl": "https://d3.app" },
            "nameservers": [ { "ldhName": "ns1.doma.xyz" }, { "ldhName": "ns2.doma.xyz" } ],
            "claimedBy": "0x1234567890abcdef1234567890abcdef12345678"
        }
    })
}

/// Build a single listing item.
pub fn sample_listing(id: &str, name: &str, token_id: &str, price: &str, decimals: u32) -> Value {
    json!({
        "id": id,
        "tokenId": token_id,
        "name": name,
        "price": price,
        "offererAddress": "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd",
        "orderbook": "DOMA",
        "expiresAt": "2026-03-01T00:00:00Z",
        "createdAt": "2025-08-01T00:00:00Z",
        "currency": { "symbol": "ETH", "decimals": decimals },
        "registrar": { "name": "D3 Registrar" },
        "chain": { "name": "Doma Testnet", "networkId": "eip155:97476" }
    })
}

/// Build a `GetListings` data payload.
pub fn listings_page(items: Vec<Value>, total_count: i64) -> Value {
    json!({ "listings": { "items": items, "totalCount": total_count } })
}

/// Build a `GetTokenActivities` data payload.
pub fn activities_page(items: Vec<Value>, total_count: i64) -> Value {
    json!({ "tokenActivities": { "items": items, "totalCount": total_count } })
}

/// A minted-activity item.
pub fn minted_activity(created_at: &str) -> Value {
    json!({ "__typename": "TokenMintedActivity", "createdAt": created_at })
}

/// A purchased-activity item.
pub fn purchased_activity(buyer: &str, seller: &str, price: &str, symbol: &str) -> Value {
    json!({
        "__typename": "TokenPurchasedActivity",
        "buyer": buyer,
        "seller": seller,
        "payment": { "price": price, "currencySymbol": symbol }
    })
}
