mod filters;
mod listing;

pub use filters::{Condition, MaterialType, PageSize, SearchBy, SortKey};
pub use listing::{Listing, ListingId, MaterialKind, TradeType};
