//! Query interfaces for the Doma SDK.
//!
//! Each module holds a fixed GraphQL document and a query struct that borrows
//! the SDK's [`Transport`](crate::transport::Transport), exposing methods that
//! return typed `Result<T>` payloads.

pub mod activities;
pub mod listings;
pub mod market;
pub mod names;
pub mod tokens;

pub use activities::ActivityQuery;
pub use listings::ListingQuery;
pub use market::MarketQuery;
pub use names::{ListNamesParams, NameQuery};
pub use tokens::TokenQuery;
