//! Token queries: the tokens backing a registered name.

use serde::Deserialize;
use serde_json::json;

use crate::error::Result;
use crate::models::{Page, Token};
use crate::transport::{request, Transport};

const GET_TOKENS: &str = r#"
    query GetTokens($name: String!) {
      tokens(name: $name, take: 10) {
        items {
          tokenId
          networkId
          ownerAddress
        }
        totalCount
      }
    }
"#;

#[derive(Debug, Deserialize)]
struct TokensData {
    tokens: Page<Token>,
}

// ---------------------------------------------------------------------------
// TokenQuery
// ---------------------------------------------------------------------------

/// Query interface for the tokens minted against a name.
pub struct TokenQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> TokenQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// List the tokens for a name (bounded at 10 by the query).
    pub fn for_name(&self, name: &str) -> Result<Page<Token>> {
        let data: TokensData = request(self.transport, GET_TOKENS, json!({ "name": name }))?;
        Ok(data.tokens)
    }
}
