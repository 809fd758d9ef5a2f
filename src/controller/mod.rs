//! The stateful entry point used by storefront pages.
//!
//! [`SearchController`] holds the filter draft the user is editing, debounces
//! typing, resets pagination when the query changes and dispatches each
//! execution to a worker thread. Completions are applied in issuance order: a
//! result is shown only if no newer execution was issued after it.

mod runtime;
mod worker;

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};

use self::runtime::SearchRuntime;
use self::worker::Completion;
use crate::api::{ConfigurationError, Listing, ListingSource};
use crate::engine::SearchEngine;
use crate::filter::{FilterEdit, FilterState};
use crate::pager::Pager;
use crate::schedule::{Debouncer, Trigger, reconcile};

/// Lifecycle of the most recent execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStatus {
	#[default]
	Idle,
	Loading,
	Success,
	Failed,
}

impl SearchStatus {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading => "loading",
			Self::Success => "success",
			Self::Failed => "failed",
		}
	}
}

impl fmt::Display for SearchStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

pub struct SearchController {
	engine: SearchEngine,
	draft: FilterState,
	applied: Option<FilterState>,
	debouncer: Debouncer,
	runtime: SearchRuntime,
	status: SearchStatus,
	items: Vec<Listing>,
	total: usize,
	error: Option<String>,
}

impl SearchController {
	pub fn new(source: Arc<dyn ListingSource>) -> Self {
		Self {
			engine: SearchEngine::new(source),
			draft: FilterState::default(),
			applied: None,
			debouncer: Debouncer::default(),
			runtime: SearchRuntime::new(),
			status: SearchStatus::Idle,
			items: Vec::new(),
			total: 0,
			error: None,
		}
	}

	/// Use `quiet` as the typing debounce instead of the default.
	#[must_use]
	pub fn with_debounce(mut self, quiet: Duration) -> Self {
		self.debouncer = Debouncer::new(quiet);
		self
	}

	/// Start from `state` instead of the defaults. Its term counts as settled.
	#[must_use]
	pub fn with_filter(mut self, state: FilterState) -> Self {
		self.debouncer.flush(state.term());
		self.draft = state;
		self
	}

	/// The filters as currently edited, including unsettled typing.
	pub fn filter(&self) -> &FilterState {
		&self.draft
	}

	/// The filters used by the latest execution.
	pub fn applied(&self) -> Option<&FilterState> {
		self.applied.as_ref()
	}

	pub fn items(&self) -> &[Listing] {
		&self.items
	}

	pub fn total(&self) -> usize {
		self.total
	}

	pub fn page(&self) -> u32 {
		self.draft.page()
	}

	pub fn page_count(&self) -> u32 {
		self.pager().page_count()
	}

	pub fn pager(&self) -> Pager {
		let mut pager = Pager::for_filter(&self.draft);
		pager.record_total(self.total);
		pager
	}

	pub fn status(&self) -> SearchStatus {
		self.status
	}

	pub fn is_loading(&self) -> bool {
		self.status == SearchStatus::Loading
	}

	/// Message of the last failure. Kept until an execution succeeds.
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// When [`tick`](Self::tick) should next be called, if typing is pending.
	pub fn next_wakeup(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Record typed input. The term is searched once typing settles.
	pub fn input_term(&mut self, term: impl Into<String>, now: Instant) {
		let term = term.into();
		self.draft = self.draft.with_term(term.clone());
		self.debouncer.keystroke(term, now);
	}

	/// Apply a filter edit.
	///
	/// A new term goes through the debounce. Any other change runs immediately
	/// with the last settled term.
	pub fn set_filter(
		&mut self,
		edit: FilterEdit,
		now: Instant,
	) -> Result<(), ConfigurationError> {
		let next = self.draft.apply(&edit)?;
		if let Some(term) = &edit.term {
			self.debouncer.keystroke(term.clone(), now);
		}
		if !edit.has_immediate_changes() {
			self.draft = next;
			return Ok(());
		}

		let trigger = if edit.changes_query() {
			Trigger::FilterChange
		} else {
			Trigger::Navigation
		};
		self.execute(next, trigger).map(drop)
	}

	/// Run a pending term whose quiet period has passed. Returns whether an
	/// execution was issued.
	pub fn tick(&mut self, now: Instant) -> Result<bool, ConfigurationError> {
		match self.debouncer.poll(now) {
			Some(term) => {
				debug!("term settled: {term:?}");
				let draft = self.draft.clone();
				self.execute(draft, Trigger::Settled)?;
				Ok(true)
			}
			None => Ok(false),
		}
	}

	/// Search `term` right away, skipping the debounce, from the first page.
	pub fn search(&mut self, term: impl Into<String>) -> Result<(), ConfigurationError> {
		let term = term.into();
		self.debouncer.flush(term.clone());
		let draft = self.draft.with_term(term);
		self.execute(draft, Trigger::Explicit).map(drop)
	}

	/// Run the current filters again without changing the page.
	pub fn refresh(&mut self) -> Result<(), ConfigurationError> {
		let draft = self.draft.clone();
		self.execute(draft, Trigger::Refresh).map(drop)
	}

	/// Move to the next page. Returns `false` on the last page.
	pub fn next_page(&mut self) -> Result<bool, ConfigurationError> {
		match self.pager().next() {
			Some(page) => self.go_to_page(page),
			None => Ok(false),
		}
	}

	/// Move to the previous page. Returns `false` on the first page.
	pub fn previous_page(&mut self) -> Result<bool, ConfigurationError> {
		match self.pager().previous() {
			Some(page) => self.go_to_page(page),
			None => Ok(false),
		}
	}

	fn go_to_page(&mut self, page: u32) -> Result<bool, ConfigurationError> {
		let next = self.draft.with_page(page)?;
		self.execute(next, Trigger::Navigation)?;
		Ok(true)
	}

	/// Apply every completion that has already arrived. Returns how many were
	/// received, stale ones included.
	pub fn pump(&mut self) -> usize {
		let mut received = 0;
		while let Ok(completion) = self.runtime.try_recv() {
			self.apply_completion(completion);
			received += 1;
		}
		received
	}

	/// Block until the latest execution has been applied or `timeout` passes.
	/// Returns `false` on timeout.
	pub fn wait_for_latest(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		self.pump();
		while self.is_loading() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.runtime.recv_timeout(remaining) {
				Ok(completion) => self.apply_completion(completion),
				Err(_) => return false,
			}
		}
		true
	}

	/// Block until every issued execution has reported back, stale ones
	/// included. Returns `false` on timeout.
	pub fn wait_until_quiet(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.runtime.outstanding() > 0 {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.runtime.recv_timeout(remaining) {
				Ok(completion) => self.apply_completion(completion),
				Err(_) => return false,
			}
		}
		true
	}

	fn execute(
		&mut self,
		candidate: FilterState,
		trigger: Trigger,
	) -> Result<u64, ConfigurationError> {
		let term = match trigger {
			Trigger::Explicit => candidate.term().to_string(),
			_ => self.debouncer.settled_term().to_string(),
		};
		let mut next = candidate.with_term(term);
		if trigger.forces_first_page() {
			next = next.first_page();
		}
		let next = reconcile(self.applied.as_ref(), next);
		let query = self.engine.compile(&next)?;

		self.draft = next.with_term(candidate.term());
		self.applied = Some(next.clone());
		self.status = SearchStatus::Loading;

		let id = self.runtime.issue(self.engine.clone(), next, query);
		debug!(
			"issued query {id} ({trigger:?}) for {:?} page {}",
			self.draft.normalized_term(),
			self.draft.page()
		);
		Ok(id)
	}

	fn apply_completion(&mut self, completion: Completion) {
		let Completion { id, state, outcome } = completion;
		if !self.runtime.matches_latest(id) {
			debug!("discarding stale result for query {id}");
			return;
		}

		match outcome {
			Ok(page) => {
				debug!(
					"applied query {id}: {} of {} listings on page {}",
					page.items.len(),
					page.total,
					state.page()
				);
				self.items = page.items;
				self.total = page.total;
				self.error = None;
				self.status = SearchStatus::Success;
			}
			Err(err) => {
				warn!("query {id} failed: {err}");
				self.items.clear();
				self.total = 0;
				self.error = Some(err.to_string());
				self.status = SearchStatus::Failed;
			}
		}
	}
}

impl fmt::Debug for SearchController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchController")
			.field("draft", &self.draft)
			.field("applied", &self.applied)
			.field("status", &self.status)
			.field("total", &self.total)
			.field("error", &self.error)
			.finish_non_exhaustive()
	}
}
