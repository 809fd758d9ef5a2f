//! Search engine behind the BookSwap storefront's listing and advanced search
//! pages.
//!
//! A [`SearchController`] owns the user's [`FilterState`], debounces typing,
//! resets pagination when the query changes and applies only the newest
//! result. Queries are compiled once by the [`QueryCompiler`] and executed
//! either by the listing store itself or in memory over a snapshot, depending
//! on what the configured [`ListingSource`] can do.

pub mod app_dirs;
pub mod compiler;
pub mod controller;
pub mod engine;
pub mod filter;
pub mod logging;
pub mod pager;
pub mod schedule;
pub mod store;

pub use bookswap_listing_api as api;

pub use api::{
	Condition, ConfigurationError, Listing, ListingId, ListingSource, MaterialKind, MaterialType,
	PageSize, Pushdown, SearchBy, SortKey, SourceCapabilities, SourceError, TradeType,
};
pub use compiler::{CompiledQuery, QueryCompiler};
pub use controller::{SearchController, SearchStatus};
pub use engine::{ResultPage, SearchEngine, SearchError};
pub use filter::{FilterEdit, FilterState, normalize};
pub use pager::{Pager, page_count};
pub use schedule::{DEFAULT_DEBOUNCE, Debouncer, Trigger};
pub use store::ListingStore;
