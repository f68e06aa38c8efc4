//! Token activity queries.

use serde::Deserialize;
use serde_json::json;

use crate::error::Result;
use crate::models::{Activity, Page};
use crate::transport::{request, Transport};

const GET_TOKEN_ACTIVITIES: &str = r#"
    query GetTokenActivities($tokenId: String!, $take: Int!) {
      tokenActivities(tokenId: $tokenId, take: $take) {
        items {
          __typename
          ... on TokenMintedActivity {
            createdAt
          }
          ... on TokenPurchasedActivity {
            buyer
            seller
            payment {
              price
              currencySymbol
            }
          }
        }
        totalCount
      }
    }
"#;

#[derive(Debug, Deserialize)]
struct ActivitiesData {
    #[serde(rename = "tokenActivities")]
    token_activities: Page<Activity>,
}

// ---------------------------------------------------------------------------
// ActivityQuery
// ---------------------------------------------------------------------------

/// Query interface for on-chain token activity.
pub struct ActivityQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> ActivityQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// List activity for a token, newest first as the API returns it.
    pub fn for_token(&self, token_id: &str, take: i64) -> Result<Page<Activity>> {
        let data: ActivitiesData = request(
            self.transport,
            GET_TOKEN_ACTIVITIES,
            json!({ "tokenId": token_id, "take": take }),
        )?;
        Ok(data.token_activities)
    }
}
