use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Name — registry record for a tokenized domain
// ---------------------------------------------------------------------------

/// A registered domain tracked by the Doma registry.
///
/// Read-only mirror of upstream state; re-fetched on every call, never
/// persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub name: String,
    pub expires_at: Option<String>,
    pub tokenized_at: Option<String>,
    pub registrar: Option<Registrar>,
    #[serde(default)]
    pub nameservers: Vec<Nameserver>,
    pub claimed_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrar {
    pub name: String,
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nameserver {
    pub ldh_name: String,
}

// ---------------------------------------------------------------------------
// NameRef — the slim item shape returned by the names list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Token — an on-chain token backing a name
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token_id: String,
    pub network_id: String,
    pub owner_address: String,
}
