use std::time::Duration;

/// Default Doma testnet GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api-testnet.doma.xyz/graphql";

/// Public testnet API key baked in as a fallback. Override with the
/// `DOMA_API_KEY` environment variable or [`DomaSdkBuilder::api_key`](crate::DomaSdkBuilder::api_key).
pub const DEFAULT_API_KEY: &str =
    "v1.fa2d276a9752ed2ad4ffdd72344c4973af5051bbbeba1e4d393019cdf93bebbd";

/// Environment variable overriding the GraphQL endpoint.
pub const ENV_API_URL: &str = "DOMA_API_URL";

/// Environment variable overriding the API key.
pub const ENV_API_KEY: &str = "DOMA_API_KEY";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the endpoint: explicit value, then environment, then default.
pub fn resolve_api_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(ENV_API_URL).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Resolve the API key: explicit value, then environment, then default.
pub fn resolve_api_key(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(ENV_API_KEY).ok())
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string())
}
