//! Data source contract shared by the search engine and listing stores.
//!
//! Stores implement [`ListingSource`]; the engine compiles user filters into
//! either a [`RemoteQuery`] (pushed down to the store) or an in-memory pipeline
//! over a [`ListingSource::snapshot`].

pub mod context;
pub mod error;
pub mod query;
pub mod source;
pub mod types;

pub use context::QueryContext;
pub use error::{ConfigurationError, SourceError};
pub use query::{Column, Filter, OrderBy, QueryResponse, RemoteQuery, RowRange};
pub use source::{ListingSource, Pushdown, SourceCapabilities};
pub use types::{
    Condition, Listing, ListingId, MaterialKind, MaterialType, PageSize, SearchBy, SortKey,
    TradeType,
};
