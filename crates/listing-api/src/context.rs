use std::sync::atomic::{AtomicU64, Ordering};

static DETACHED_LATEST: AtomicU64 = AtomicU64::new(0);

/// Shared inputs handed to a [`ListingSource`](crate::ListingSource) for one query.
///
/// The context lets long-running sources notice that the controller has issued
/// a newer query and stop early. Stopping is advisory: the controller discards
/// stale results whether or not the source checks.
#[derive(Clone, Copy)]
pub struct QueryContext<'a> {
    id: u64,
    latest_query_id: &'a AtomicU64,
}

impl<'a> QueryContext<'a> {
    /// Create a context for query `id`, tracked against `latest_query_id`.
    #[must_use]
    pub fn new(id: u64, latest_query_id: &'a AtomicU64) -> Self {
        Self {
            id,
            latest_query_id,
        }
    }

    /// Identifier assigned to the query by the controller.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether a newer query has been issued since this one started.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        self.latest_query_id.load(Ordering::Acquire) != self.id
    }
}

impl QueryContext<'static> {
    /// A context for one-off queries that can never be superseded.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(0, &DETACHED_LATEST)
    }
}

impl std::fmt::Debug for QueryContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryContext")
            .field("id", &self.id)
            .field("superseded", &self.is_superseded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_query_supersedes_context() {
        let latest = AtomicU64::new(3);
        let ctx = QueryContext::new(3, &latest);
        assert!(!ctx.is_superseded());
        latest.store(4, Ordering::Release);
        assert!(ctx.is_superseded());
    }

    #[test]
    fn detached_context_is_never_superseded() {
        assert!(!QueryContext::detached().is_superseded());
    }
}
