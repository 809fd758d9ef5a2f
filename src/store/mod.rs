//! In-process listing store backed by a JSON listing export.
//!
//! The store answers pushed-down [`RemoteQuery`] values when configured for
//! [`Pushdown::Remote`], and only hands out snapshots when configured for
//! [`Pushdown::MemoryOnly`]. That lets the same data exercise both engine
//! backends.

mod like;
#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use log::debug;

pub use like::ilike;

use crate::api::{
	Column, Filter, Listing, ListingSource, OrderBy, Pushdown, QueryContext, QueryResponse,
	RemoteQuery, SourceCapabilities, SourceError,
};

#[derive(Debug, Clone)]
pub struct ListingStore {
	listings: Vec<Listing>,
	capabilities: SourceCapabilities,
}

impl ListingStore {
	/// Create a store over `listings`, kept in the given natural order.
	///
	/// Subjects are dropped when the capabilities say the store does not
	/// expose them.
	pub fn new(mut listings: Vec<Listing>, capabilities: SourceCapabilities) -> Self {
		if !capabilities.subject {
			for listing in &mut listings {
				listing.subject = None;
			}
		}
		Self {
			listings,
			capabilities,
		}
	}

	/// Parse a JSON array of listings.
	pub fn from_json_str(json: &str, capabilities: SourceCapabilities) -> Result<Self, SourceError> {
		let listings: Vec<Listing> =
			serde_json::from_str(json).map_err(|err| SourceError::Malformed(err.to_string()))?;
		Ok(Self::new(listings, capabilities))
	}

	/// Load a JSON listing export from disk.
	pub fn from_path(path: &Path, capabilities: SourceCapabilities) -> Result<Self, SourceError> {
		let json = fs::read_to_string(path)
			.map_err(|err| SourceError::Transport(format!("{}: {err}", path.display())))?;
		let store = Self::from_json_str(&json, capabilities)?;
		debug!(
			"loaded {} listings from {}",
			store.listings.len(),
			path.display()
		);
		Ok(store)
	}

	pub fn listings(&self) -> &[Listing] {
		&self.listings
	}

	pub fn len(&self) -> usize {
		self.listings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listings.is_empty()
	}
}

impl ListingSource for ListingStore {
	fn capabilities(&self) -> SourceCapabilities {
		self.capabilities
	}

	fn query(
		&self,
		query: &RemoteQuery,
		ctx: &QueryContext<'_>,
	) -> Result<QueryResponse, SourceError> {
		if self.capabilities.pushdown != Pushdown::Remote {
			return Err(SourceError::Unsupported("pushed-down queries"));
		}

		let mut rows: Vec<&Listing> = self
			.listings
			.iter()
			.filter(|listing| query.filters.iter().all(|filter| evaluate(filter, listing)))
			.collect();
		if ctx.is_superseded() {
			return Err(SourceError::Superseded(ctx.id()));
		}
		if let Some(order) = &query.order {
			rows.sort_by(|left, right| compare(order, left, right));
		}

		let total = rows.len();
		let items = rows[query.range.clamp_to(total)]
			.iter()
			.map(|listing| (*listing).clone())
			.collect();
		Ok(QueryResponse { items, total })
	}

	fn snapshot(&self, _ctx: &QueryContext<'_>) -> Result<Vec<Listing>, SourceError> {
		Ok(self.listings.clone())
	}
}

fn evaluate(filter: &Filter, listing: &Listing) -> bool {
	match filter {
		Filter::Ilike { column, pattern } => listing
			.text(*column)
			.is_some_and(|value| ilike(value, pattern)),
		Filter::Eq { column, value } => listing.text(*column) == Some(value.as_str()),
		Filter::AnyOf(members) => members.iter().any(|member| evaluate(member, listing)),
	}
}

fn compare(order: &OrderBy, left: &Listing, right: &Listing) -> Ordering {
	let (left_missing, right_missing) = match order.column {
		Column::Price => (left.price.is_none(), right.price.is_none()),
		Column::CreatedAt => (left.created_at.is_none(), right.created_at.is_none()),
		column => (
			left.text(column).is_none(),
			right.text(column).is_none(),
		),
	};
	match (left_missing, right_missing) {
		(true, true) => return Ordering::Equal,
		(true, false) if order.nulls_first => return Ordering::Less,
		(true, false) => return Ordering::Greater,
		(false, true) if order.nulls_first => return Ordering::Greater,
		(false, true) => return Ordering::Less,
		(false, false) => {}
	}

	let ordering = match order.column {
		Column::Price => match (left.price, right.price) {
			(Some(left), Some(right)) => left.total_cmp(&right),
			_ => Ordering::Equal,
		},
		Column::CreatedAt => left.created_at.cmp(&right.created_at),
		column => left.text(column).cmp(&right.text(column)),
	};
	if order.ascending {
		ordering
	} else {
		ordering.reverse()
	}
}
