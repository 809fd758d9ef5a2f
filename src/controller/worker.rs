use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::mpsc::Sender;
use std::thread;

use log::{debug, error};

use crate::api::{QueryContext, SourceError};
use crate::compiler::CompiledQuery;
use crate::engine::{ResultPage, SearchEngine};
use crate::filter::FilterState;

/// Outcome of one execution, tagged with the id it was issued under.
#[derive(Debug)]
pub(crate) struct Completion {
	pub(crate) id: u64,
	pub(crate) state: FilterState,
	pub(crate) outcome: Result<ResultPage, SourceError>,
}

/// Everything a worker thread needs to run one execution.
pub(crate) struct Job {
	pub(crate) id: u64,
	pub(crate) state: FilterState,
	pub(crate) query: CompiledQuery,
}

/// Run `job` on its own thread and report the outcome on `result_tx`.
///
/// Executions are independent, so a slow query never holds up a newer one and
/// completions may arrive in any order.
pub(crate) fn spawn(
	engine: SearchEngine,
	job: Job,
	result_tx: &Sender<Completion>,
	latest_query_id: &Arc<AtomicU64>,
) {
	let Job { id, state, query } = job;
	let thread_tx = result_tx.clone();
	let thread_latest = Arc::clone(latest_query_id);
	let thread_state = state.clone();

	let spawned = thread::Builder::new()
		.name(format!("bookswap-query-{id}"))
		.spawn(move || {
			let ctx = QueryContext::new(id, thread_latest.as_ref());
			let outcome = engine.execute(&thread_state, &query, &ctx);
			debug!("query {id} finished (ok: {})", outcome.is_ok());
			let _ = thread_tx.send(Completion {
				id,
				state: thread_state,
				outcome,
			});
		});

	if let Err(err) = spawned {
		error!("failed to start worker for query {id}: {err}");
		let _ = result_tx.send(Completion {
			id,
			state,
			outcome: Err(SourceError::Transport(format!(
				"could not start query worker: {err}"
			))),
		});
	}
}
