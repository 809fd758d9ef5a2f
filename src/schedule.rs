//! Decides when typed input and filter edits turn into query executions.
//!
//! Time is supplied by the caller, so the scheduler never sleeps or spawns. An
//! event loop calls [`Debouncer::poll`] at or after [`Debouncer::deadline`].

use std::time::{Duration, Instant};

use log::trace;

use crate::filter::FilterState;

/// Quiet period after the last keystroke before a typed term settles.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// What caused an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
	/// Typing stopped for the quiet period.
	Settled,
	/// A non-text filter was changed.
	FilterChange,
	/// Page or page size navigation.
	Navigation,
	/// The user explicitly asked to search.
	Explicit,
	/// Re-run of the applied filters.
	Refresh,
}

impl Trigger {
	/// Explicit searches always start from the first page.
	pub fn forces_first_page(self) -> bool {
		matches!(self, Self::Explicit)
	}
}

#[derive(Debug, Clone)]
struct Pending {
	term: String,
	deadline: Instant,
}

/// Trailing-edge debounce for the search term.
#[derive(Debug, Clone)]
pub struct Debouncer {
	quiet: Duration,
	pending: Option<Pending>,
	settled: String,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			pending: None,
			settled: String::new(),
		}
	}

	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	/// Record a keystroke. Any pending term is replaced and its deadline restarts.
	pub fn keystroke(&mut self, term: impl Into<String>, now: Instant) {
		let deadline = now + self.quiet;
		self.pending = Some(Pending {
			term: term.into(),
			deadline,
		});
	}

	/// Return the newly settled term once the deadline has passed.
	///
	/// Yields `None` while waiting, and also when the term settles back to the
	/// value that was already settled.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		let pending = self.pending.take_if(|pending| pending.deadline <= now)?;
		if pending.term == self.settled {
			trace!("debounced term unchanged");
			return None;
		}
		self.settled.clone_from(&pending.term);
		Some(pending.term)
	}

	/// Settle `term` immediately, dropping anything pending.
	pub fn flush(&mut self, term: impl Into<String>) {
		self.pending = None;
		self.settled = term.into();
	}

	/// Drop the pending term without settling it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn settled_term(&self) -> &str {
		&self.settled
	}
}

/// Reset to the first page when `next` asks for a different query than
/// `previous`. Navigation that only changes page or page size is left alone.
pub fn reconcile(previous: Option<&FilterState>, next: FilterState) -> FilterState {
	match previous {
		Some(previous) if !previous.same_query(&next) => next.first_page(),
		_ => next,
	}
}
