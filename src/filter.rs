//! User-chosen search criteria.

use crate::api::{Condition, ConfigurationError, MaterialType, PageSize, SearchBy, SortKey};

/// Trim surrounding whitespace from a raw search term.
#[must_use]
pub fn normalize(term: &str) -> &str {
	term.trim()
}

/// Complete set of search criteria.
///
/// Values are never edited in place: every setter returns a new state. The
/// term is kept exactly as typed and only normalized when compared or compiled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
	term: String,
	search_by: SearchBy,
	condition: Condition,
	material_type: MaterialType,
	sort: SortKey,
	page: u32,
	page_size: PageSize,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			term: String::new(),
			search_by: SearchBy::default(),
			condition: Condition::default(),
			material_type: MaterialType::default(),
			sort: SortKey::default(),
			page: 1,
			page_size: PageSize::default(),
		}
	}
}

impl FilterState {
	pub fn term(&self) -> &str {
		&self.term
	}

	pub fn normalized_term(&self) -> &str {
		normalize(&self.term)
	}

	pub fn search_by(&self) -> SearchBy {
		self.search_by
	}

	pub fn condition(&self) -> Condition {
		self.condition
	}

	pub fn material_type(&self) -> MaterialType {
		self.material_type
	}

	pub fn sort(&self) -> SortKey {
		self.sort
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn page_size(&self) -> PageSize {
		self.page_size
	}

	#[must_use]
	pub fn with_term(&self, term: impl Into<String>) -> Self {
		Self {
			term: term.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_search_by(&self, search_by: SearchBy) -> Self {
		Self {
			search_by,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_condition(&self, condition: Condition) -> Self {
		Self {
			condition,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_material_type(&self, material_type: MaterialType) -> Self {
		Self {
			material_type,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_sort(&self, sort: SortKey) -> Self {
		Self {
			sort,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_page_size(&self, page_size: PageSize) -> Self {
		Self {
			page_size,
			..self.clone()
		}
	}

	/// Move to `page`. Pages are numbered from 1.
	pub fn with_page(&self, page: u32) -> Result<Self, ConfigurationError> {
		if page == 0 {
			return Err(ConfigurationError::InvalidPage(page));
		}
		Ok(Self {
			page,
			..self.clone()
		})
	}

	#[must_use]
	pub fn first_page(&self) -> Self {
		Self {
			page: 1,
			..self.clone()
		}
	}

	/// Produce the state that results from applying a partial edit.
	pub fn apply(&self, edit: &FilterEdit) -> Result<Self, ConfigurationError> {
		let mut next = self.clone();
		if let Some(term) = &edit.term {
			next.term = term.clone();
		}
		if let Some(search_by) = edit.search_by {
			next.search_by = search_by;
		}
		if let Some(condition) = edit.condition {
			next.condition = condition;
		}
		if let Some(material_type) = edit.material_type {
			next.material_type = material_type;
		}
		if let Some(sort) = edit.sort {
			next.sort = sort;
		}
		if let Some(page_size) = edit.page_size {
			next.page_size = page_size;
		}
		if let Some(page) = edit.page {
			next = next.with_page(page)?;
		}
		Ok(next)
	}

	/// Whether both states describe the same query, ignoring pagination.
	/// The raw term is compared, so a whitespace-only edit counts as a change.
	pub fn same_query(&self, other: &Self) -> bool {
		self.term == other.term
			&& self.search_by == other.search_by
			&& self.condition == other.condition
			&& self.material_type == other.material_type
			&& self.sort == other.sort
	}
}

/// Partial update to a [`FilterState`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEdit {
	pub term: Option<String>,
	pub search_by: Option<SearchBy>,
	pub condition: Option<Condition>,
	pub material_type: Option<MaterialType>,
	pub sort: Option<SortKey>,
	pub page: Option<u32>,
	pub page_size: Option<PageSize>,
}

impl FilterEdit {
	pub fn term(term: impl Into<String>) -> Self {
		Self {
			term: Some(term.into()),
			..Self::default()
		}
	}

	pub fn search_by(search_by: SearchBy) -> Self {
		Self {
			search_by: Some(search_by),
			..Self::default()
		}
	}

	pub fn condition(condition: Condition) -> Self {
		Self {
			condition: Some(condition),
			..Self::default()
		}
	}

	pub fn material_type(material_type: MaterialType) -> Self {
		Self {
			material_type: Some(material_type),
			..Self::default()
		}
	}

	pub fn sort(sort: SortKey) -> Self {
		Self {
			sort: Some(sort),
			..Self::default()
		}
	}

	pub fn page(page: u32) -> Self {
		Self {
			page: Some(page),
			..Self::default()
		}
	}

	pub fn page_size(page_size: PageSize) -> Self {
		Self {
			page_size: Some(page_size),
			..Self::default()
		}
	}

	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}

	/// Whether the edit changes anything other than the search term.
	pub fn has_immediate_changes(&self) -> bool {
		self.changes_query() || self.page.is_some() || self.page_size.is_some()
	}

	/// Whether a non-text criterion changes. Pagination does not count.
	pub fn changes_query(&self) -> bool {
		self.search_by.is_some()
			|| self.condition.is_some()
			|| self.material_type.is_some()
			|| self.sort.is_some()
	}
}
