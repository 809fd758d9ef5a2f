//! Translation of [`FilterState`] into an executable query.
//!
//! A [`CompiledQuery`] is built once per execution and can be run two ways:
//! lowered to a [`RemoteQuery`] for stores that filter themselves, or
//! evaluated directly over a snapshot. Both paths share the same predicate and
//! ordering so they agree on item order and totals.

mod backend;
mod pattern;
#[cfg(test)]
mod tests;

use std::cmp::Ordering;

pub use backend::{MemoryBackend, QueryBackend, RemoteBackend, backend_for};
pub use pattern::{MatchPattern, escape_like};

use crate::api::{
	Column, ConfigurationError, Filter, Listing, MaterialKind, OrderBy, RemoteQuery, RowRange,
	SearchBy, SortKey, SourceCapabilities,
};
use crate::filter::FilterState;
use crate::pager::page_range;

/// Term constraint over one or more text columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
	pub columns: Vec<Column>,
	pub pattern: MatchPattern,
}

impl TermMatch {
	/// A listing matches when any of the columns is present and matches.
	pub fn matches(&self, listing: &Listing) -> bool {
		self.columns.iter().any(|column| {
			listing
				.text(*column)
				.is_some_and(|value| self.pattern.matches(value))
		})
	}

	fn to_filter(&self) -> Filter {
		match self.columns.as_slice() {
			[column] => self.pattern.to_filter(*column),
			columns => Filter::AnyOf(
				columns
					.iter()
					.map(|column| self.pattern.to_filter(*column))
					.collect(),
			),
		}
	}
}

/// Ordering applied after filtering. Listings without a value sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
	pub column: Column,
	pub ascending: bool,
}

impl SortSpec {
	fn for_key(key: SortKey) -> Option<Self> {
		match key {
			SortKey::Relevance => None,
			SortKey::Newest => Some(Self {
				column: Column::CreatedAt,
				ascending: false,
			}),
			SortKey::PriceAsc => Some(Self {
				column: Column::Price,
				ascending: true,
			}),
			SortKey::PriceDesc => Some(Self {
				column: Column::Price,
				ascending: false,
			}),
		}
	}

	pub fn compare(&self, left: &Listing, right: &Listing) -> Ordering {
		match self.column {
			Column::CreatedAt => nulls_first(left.created_at, right.created_at, self.ascending, Ord::cmp),
			_ => nulls_first(left.price, right.price, self.ascending, f64::total_cmp),
		}
	}

	pub fn to_order(self) -> OrderBy {
		OrderBy {
			column: self.column,
			ascending: self.ascending,
			nulls_first: true,
		}
	}
}

fn nulls_first<T, F>(left: Option<T>, right: Option<T>, ascending: bool, cmp: F) -> Ordering
where
	F: Fn(&T, &T) -> Ordering,
{
	match (left, right) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(left), Some(right)) if ascending => cmp(&left, &right),
		(Some(left), Some(right)) => cmp(&right, &left),
	}
}

/// Predicate, ordering and row window for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
	pub term: Option<TermMatch>,
	pub material: Option<MaterialKind>,
	pub order: Option<SortSpec>,
	pub range: RowRange,
}

impl CompiledQuery {
	pub fn matches(&self, listing: &Listing) -> bool {
		if let Some(kind) = self.material
			&& listing.material_type != kind
		{
			return false;
		}
		self.term.as_ref().is_none_or(|term| term.matches(listing))
	}

	/// Relative order of two matching listings. `Equal` keeps natural order.
	pub fn compare(&self, left: &Listing, right: &Listing) -> Ordering {
		self.order
			.map_or(Ordering::Equal, |order| order.compare(left, right))
	}

	/// Lower to the query shape understood by query-capable stores.
	pub fn to_remote(&self) -> RemoteQuery {
		let mut filters = Vec::new();
		if let Some(kind) = self.material {
			filters.push(Filter::Eq {
				column: Column::MaterialType,
				value: kind.as_str().to_string(),
			});
		}
		if let Some(term) = &self.term {
			filters.push(term.to_filter());
		}
		RemoteQuery {
			filters,
			order: self.order.map(SortSpec::to_order),
			range: self.range,
		}
	}
}

/// Compiles filter states for one listing source.
#[derive(Debug, Clone, Copy)]
pub struct QueryCompiler {
	capabilities: SourceCapabilities,
}

impl QueryCompiler {
	pub fn new(capabilities: SourceCapabilities) -> Self {
		Self { capabilities }
	}

	pub fn capabilities(&self) -> SourceCapabilities {
		self.capabilities
	}

	pub fn compile(&self, state: &FilterState) -> Result<CompiledQuery, ConfigurationError> {
		let columns = self.columns_for(state.search_by())?;
		let term = MatchPattern::compile(state.search_by(), state.condition(), state.term())
			.map(|pattern| TermMatch { columns, pattern });

		Ok(CompiledQuery {
			term,
			material: state.material_type().kind(),
			order: SortSpec::for_key(state.sort()),
			range: page_range(state.page(), state.page_size()),
		})
	}

	fn columns_for(&self, search_by: SearchBy) -> Result<Vec<Column>, ConfigurationError> {
		let column = match search_by {
			SearchBy::Any => return Ok(self.capabilities.text_columns()),
			SearchBy::Title => Column::Title,
			SearchBy::Author => Column::Author,
			SearchBy::Subject if !self.capabilities.subject => {
				return Err(ConfigurationError::MissingCapability {
					scope: search_by.label(),
					field: Column::Subject.as_str(),
				});
			}
			SearchBy::Subject => Column::Subject,
			SearchBy::Isbn => Column::Isbn,
			SearchBy::Genre => Column::Genre,
		};
		Ok(vec![column])
	}
}
