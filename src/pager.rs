//! Page arithmetic for result navigation.

use crate::api::{ConfigurationError, PageSize, RowRange};
use crate::filter::FilterState;

/// Number of pages needed for `total` rows. Never less than one.
pub fn page_count(total: usize, page_size: PageSize) -> u32 {
	let size = page_size.get() as usize;
	let pages = total.div_ceil(size).max(1);
	u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Half-open row window covered by `page`.
pub fn page_range(page: u32, page_size: PageSize) -> RowRange {
	let size = page_size.get() as usize;
	let start = (page.saturating_sub(1) as usize).saturating_mul(size);
	RowRange::new(start, start.saturating_add(size))
}

/// Current page, page size and the total reported by the last search.
///
/// Navigation never moves past the ends. Changing the page size does not clamp
/// the page; a page beyond the last one simply covers no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
	page: u32,
	page_size: PageSize,
	total: usize,
}

impl Default for Pager {
	fn default() -> Self {
		Self {
			page: 1,
			page_size: PageSize::default(),
			total: 0,
		}
	}
}

impl Pager {
	/// Pages are 1-based; page 0 is rejected like everywhere else.
	pub fn new(page: u32, page_size: PageSize) -> Result<Self, ConfigurationError> {
		if page == 0 {
			return Err(ConfigurationError::InvalidPage(page));
		}
		Ok(Self {
			page,
			page_size,
			total: 0,
		})
	}

	/// Pager positioned on the page of an already validated filter state.
	pub fn for_filter(state: &FilterState) -> Self {
		Self {
			page: state.page(),
			page_size: state.page_size(),
			total: 0,
		}
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn page_size(&self) -> PageSize {
		self.page_size
	}

	pub fn total(&self) -> usize {
		self.total
	}

	pub fn page_count(&self) -> u32 {
		page_count(self.total, self.page_size)
	}

	pub fn can_previous(&self) -> bool {
		self.page > 1
	}

	pub fn can_next(&self) -> bool {
		self.page < self.page_count()
	}

	/// Page before the current one, or `None` on the first page.
	pub fn previous(&self) -> Option<u32> {
		self.can_previous().then(|| self.page - 1)
	}

	/// Page after the current one, or `None` on the last page.
	pub fn next(&self) -> Option<u32> {
		self.can_next().then(|| self.page + 1)
	}

	pub fn range(&self) -> RowRange {
		page_range(self.page, self.page_size)
	}

	pub fn record_total(&mut self, total: usize) {
		self.total = total;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_count_rounds_up_with_a_floor_of_one() {
		assert_eq!(page_count(0, PageSize::Twelve), 1);
		assert_eq!(page_count(12, PageSize::Twelve), 1);
		assert_eq!(page_count(13, PageSize::Twelve), 2);
		assert_eq!(page_count(25, PageSize::Twelve), 3);
		assert_eq!(page_count(25, PageSize::FortyEight), 1);
	}

	#[test]
	fn navigation_is_clamped_at_both_ends() {
		let mut pager = Pager::new(3, PageSize::Twelve).unwrap();
		pager.record_total(25);

		assert_eq!(pager.page_count(), 3);
		assert!(!pager.can_next());
		assert_eq!(pager.next(), None);
		assert_eq!(pager.previous(), Some(2));

		let first = Pager::new(1, PageSize::Twelve).unwrap();
		assert_eq!(first.previous(), None);
	}

	#[test]
	fn ranges_are_half_open_windows() {
		assert_eq!(page_range(1, PageSize::Twelve), RowRange::new(0, 12));
		assert_eq!(page_range(3, PageSize::TwentyFour), RowRange::new(48, 72));
	}

	#[test]
	fn out_of_range_page_is_kept() {
		let mut pager = Pager::new(5, PageSize::FortyEight).unwrap();
		pager.record_total(30);
		assert_eq!(pager.page(), 5);
		assert!(pager.range().clamp_to(30).is_empty());
	}

	#[test]
	fn page_zero_is_rejected() {
		assert_eq!(
			Pager::new(0, PageSize::Twelve),
			Err(ConfigurationError::InvalidPage(0))
		);
		assert_eq!(Pager::default().page(), 1);

		let state = FilterState::default()
			.with_page_size(PageSize::TwentyFour)
			.with_page(4)
			.unwrap();
		let pager = Pager::for_filter(&state);
		assert_eq!(pager.page(), 4);
		assert_eq!(pager.range(), RowRange::new(72, 96));
	}
}
