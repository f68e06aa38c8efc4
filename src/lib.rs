//! Doma SDK for Rust.
//!
//! Provides a typed client for the Doma domain-marketplace GraphQL API:
//! registry names, orderbook listings, on-chain token activity, and the
//! client-computed market snapshots derived from them.
//!
//! Every operation is a single stateless request-response round trip. There
//! is no retry, no cache, and no persisted state; results mirror upstream
//! data for the duration of one call.
//!
//! # Quick start
//!
//! ```no_run
//! use doma_sdk::DomaSdk;
//! use doma_sdk::queries::ListNamesParams;
//!
//! let sdk = DomaSdk::builder().build().unwrap();
//!
//! // Page through registry names
//! let page = sdk.names().list(&ListNamesParams { take: 10, skip: 0, filter: None }).unwrap();
//!
//! // Look up one name
//! let detail = sdk.names().get("crypto.eth").unwrap();
//!
//! // Market overview
//! let analytics = sdk.market().analytics_snapshot().unwrap();
//! println!("{} domains, volume {}", analytics.total_domains, analytics.total_volume);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod outcome;
pub mod queries;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncDomaSdk;
pub use error::{DomaError, Result};
pub use outcome::Fetched;
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DomaSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DomaSdk`] instance.
///
/// Use [`DomaSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DomaSdkBuilder::build) to create the SDK.
pub struct DomaSdkBuilder {
    api_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for DomaSdkBuilder {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl DomaSdkBuilder {
    /// Set a custom GraphQL endpoint.
    ///
    /// If not set, the `DOMA_API_URL` environment variable is consulted,
    /// falling back to the testnet endpoint.
    pub fn api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the API key sent in the `Api-Key` header.
    ///
    /// If not set, the `DOMA_API_KEY` environment variable is consulted,
    /// falling back to the public testnet key.
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK with a live HTTP transport.
    pub fn build(self) -> Result<DomaSdk> {
        let api_url = config::resolve_api_url(self.api_url);
        let api_key = config::resolve_api_key(self.api_key);
        let transport = HttpTransport::new(api_url, api_key, self.timeout)?;
        Ok(DomaSdk {
            transport: Box::new(transport),
        })
    }
}

// ---------------------------------------------------------------------------
// DomaSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Doma SDK.
///
/// Owns a [`Transport`] and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers. Constructed via [`DomaSdk::builder()`],
/// or [`DomaSdk::with_transport()`] to inject a fake in tests.
pub struct DomaSdk {
    transport: Box<dyn Transport>,
}

impl DomaSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> DomaSdkBuilder {
        DomaSdkBuilder::default()
    }

    /// Construct the SDK around an explicit transport.
    ///
    /// The primary seam for testing: pass a scripted [`Transport`] and every
    /// query interface runs against it.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the name query interface (paged list, single lookup, virtual
    /// paging).
    pub fn names(&self) -> queries::names::NameQuery<'_> {
        queries::names::NameQuery::new(self.transport.as_ref())
    }

    /// Access the token query interface.
    pub fn tokens(&self) -> queries::tokens::TokenQuery<'_> {
        queries::tokens::TokenQuery::new(self.transport.as_ref())
    }

    /// Access the listing query interface (listings and relabeled offers).
    pub fn listings(&self) -> queries::listings::ListingQuery<'_> {
        queries::listings::ListingQuery::new(self.transport.as_ref())
    }

    /// Access the token activity query interface.
    pub fn activities(&self) -> queries::activities::ActivityQuery<'_> {
        queries::activities::ActivityQuery::new(self.transport.as_ref())
    }

    /// Access the composite market views (orderbook and analytics
    /// snapshots).
    pub fn market(&self) -> queries::market::MarketQuery<'_> {
        queries::market::MarketQuery::new(self.transport.as_ref())
    }

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DomaSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomaSdk(queries=[names, tokens, listings, activities, market])")
    }
}
