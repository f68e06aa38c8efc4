pub mod activity;
pub mod listing;
pub mod name;
pub mod page;
pub mod snapshot;

pub use activity::*;
pub use listing::*;
pub use name::*;
pub use page::*;
pub use snapshot::*;
