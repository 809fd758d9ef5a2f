use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::worker::{self, Completion, Job};
use crate::compiler::CompiledQuery;
use crate::engine::SearchEngine;
use crate::filter::FilterState;

/// Issues executions and tracks which one is the latest.
pub(crate) struct SearchRuntime {
	tx: Sender<Completion>,
	rx: Receiver<Completion>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	outstanding: usize,
}

impl SearchRuntime {
	pub(crate) fn new() -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			tx,
			rx,
			latest_query_id: Arc::new(AtomicU64::new(0)),
			next_query_id: 0,
			current_query_id: None,
			outstanding: 0,
		}
	}

	/// Assign the next id to `query` and start it. Earlier executions become stale.
	pub(crate) fn issue(
		&mut self,
		engine: SearchEngine,
		state: FilterState,
		query: CompiledQuery,
	) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.latest_query_id.store(id, AtomicOrdering::Release);
		self.outstanding += 1;

		let job = Job { id, state, query };
		worker::spawn(engine, job, &self.tx, &self.latest_query_id);
		id
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	#[cfg(test)]
	pub(crate) fn current_query_id(&self) -> Option<u64> {
		self.current_query_id
	}

	/// Executions started but not yet received back.
	pub(crate) fn outstanding(&self) -> usize {
		self.outstanding
	}

	pub(crate) fn try_recv(&mut self) -> Result<Completion, TryRecvError> {
		let completion = self.rx.try_recv()?;
		self.outstanding = self.outstanding.saturating_sub(1);
		Ok(completion)
	}

	pub(crate) fn recv_timeout(&mut self, timeout: Duration) -> Result<Completion, RecvTimeoutError> {
		let completion = self.rx.recv_timeout(timeout)?;
		self.outstanding = self.outstanding.saturating_sub(1);
		Ok(completion)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::SourceCapabilities;
	use crate::store::ListingStore;

	fn issue(runtime: &mut SearchRuntime, engine: &SearchEngine) -> u64 {
		let state = FilterState::default();
		let query = engine.compile(&state).unwrap();
		runtime.issue(engine.clone(), state, query)
	}

	#[test]
	fn ids_increase_and_only_the_newest_is_latest() {
		let engine = SearchEngine::new(Arc::new(ListingStore::new(
			Vec::new(),
			SourceCapabilities::remote(),
		)));
		let mut runtime = SearchRuntime::new();

		let first = issue(&mut runtime, &engine);
		let second = issue(&mut runtime, &engine);
		assert!(second > first);
		assert!(runtime.matches_latest(second));
		assert!(!runtime.matches_latest(first));
		assert_eq!(runtime.current_query_id(), Some(second));

		let mut seen = Vec::new();
		while runtime.outstanding() > 0 {
			let completion = runtime.recv_timeout(Duration::from_secs(5)).unwrap();
			seen.push(completion.id);
		}
		seen.sort_unstable();
		assert_eq!(seen, [first, second]);
	}
}
