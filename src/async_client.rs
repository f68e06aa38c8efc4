//! Async wrapper around [`DomaSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Each
//! operation is a single blocking HTTP round trip, making this approach a
//! good fit.
//!
//! # Example
//!
//! ```no_run
//! use doma_sdk::AsyncDomaSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncDomaSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let detail = sdk.run(|s| s.names().get("crypto.eth")).await.unwrap();
//!
//!     // Convenience method for the analytics snapshot
//!     let analytics = sdk.analytics_snapshot().await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{DomaError, Result};
use crate::models::{AnalyticsSnapshot, OrderbookSnapshot};
use crate::outcome::Fetched;
use crate::DomaSdk;

// ---------------------------------------------------------------------------
// AsyncDomaSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDomaSdk`] instance.
#[derive(Default)]
pub struct AsyncDomaSdkBuilder {
    api_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncDomaSdkBuilder {
    /// Set a custom GraphQL endpoint.
    pub fn api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the API key sent in the `Api-Key` header.
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool since building the
    /// reqwest blocking client may block briefly.
    pub async fn build(self) -> Result<AsyncDomaSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = DomaSdk::builder();
            if let Some(url) = self.api_url {
                builder = builder.api_url(url);
            }
            if let Some(key) = self.api_key {
                builder = builder.api_key(key);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            let sdk = builder.build()?;
            Ok(AsyncDomaSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| DomaError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDomaSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`DomaSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The SDK is stateless between calls, so
/// it is shared behind an [`Arc`] without locking.
pub struct AsyncDomaSdk {
    inner: Arc<DomaSdk>,
}

impl AsyncDomaSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncDomaSdkBuilder {
        AsyncDomaSdkBuilder::default()
    }

    /// Wrap an already-constructed sync SDK (e.g. one using a fake
    /// transport).
    pub fn from_sync(sdk: DomaSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&DomaSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use doma_sdk::AsyncDomaSdk;
    /// # async fn example() -> doma_sdk::Result<()> {
    /// # let sdk = AsyncDomaSdk::builder().build().await?;
    /// let listings = sdk.run(|s| s.listings().list(20, 0)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DomaSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| DomaError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the orderbook snapshot asynchronously.
    pub async fn orderbook_snapshot(&self) -> Result<Fetched<OrderbookSnapshot>> {
        self.run(|s| s.market().orderbook_snapshot()).await
    }

    /// Fetch the analytics snapshot asynchronously.
    pub async fn analytics_snapshot(&self) -> Result<AnalyticsSnapshot> {
        self.run(|s| s.market().analytics_snapshot()).await
    }
}
