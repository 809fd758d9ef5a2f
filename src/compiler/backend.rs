use log::debug;

use super::CompiledQuery;
use crate::api::{ListingSource, Pushdown, QueryContext, QueryResponse, SourceError};

/// Runs a compiled query against a listing source.
pub trait QueryBackend: Send + Sync {
	fn execute(
		&self,
		query: &CompiledQuery,
		source: &dyn ListingSource,
		ctx: &QueryContext<'_>,
	) -> Result<QueryResponse, SourceError>;
}

/// Pushes filtering, ordering and paging down to the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoteBackend;

impl QueryBackend for RemoteBackend {
	fn execute(
		&self,
		query: &CompiledQuery,
		source: &dyn ListingSource,
		ctx: &QueryContext<'_>,
	) -> Result<QueryResponse, SourceError> {
		let remote = query.to_remote();
		debug!("query {}: remote {remote}", ctx.id());
		source.query(&remote, ctx)
	}
}

/// Filters, sorts and slices a full snapshot of the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryBackend;

impl QueryBackend for MemoryBackend {
	fn execute(
		&self,
		query: &CompiledQuery,
		source: &dyn ListingSource,
		ctx: &QueryContext<'_>,
	) -> Result<QueryResponse, SourceError> {
		let mut listings = source.snapshot(ctx)?;
		let fetched = listings.len();

		listings.retain(|listing| query.matches(listing));
		if ctx.is_superseded() {
			return Err(SourceError::Superseded(ctx.id()));
		}
		// Stable, so ties and `Relevance` keep the store's natural order.
		listings.sort_by(|left, right| query.compare(left, right));

		let total = listings.len();
		let window = query.range.clamp_to(total);
		debug!(
			"query {}: {total} of {fetched} listings matched in memory, rows {window:?}",
			ctx.id()
		);
		let items = listings.drain(window).collect();
		Ok(QueryResponse { items, total })
	}
}

static REMOTE: RemoteBackend = RemoteBackend;
static MEMORY: MemoryBackend = MemoryBackend;

/// Backend matching what the source can evaluate itself.
pub fn backend_for(pushdown: Pushdown) -> &'static dyn QueryBackend {
	match pushdown {
		Pushdown::Remote => &REMOTE,
		Pushdown::MemoryOnly => &MEMORY,
	}
}
