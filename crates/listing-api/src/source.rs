use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::context::QueryContext;
use crate::error::{ConfigurationError, SourceError};
use crate::query::{Column, QueryResponse, RemoteQuery};
use crate::types::Listing;

/// Whether filtering, ordering and paging run inside the store or in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pushdown {
    /// The store evaluates [`RemoteQuery`] values itself.
    #[default]
    Remote,
    /// The store only hands out its full collection.
    MemoryOnly,
}

impl Pushdown {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::MemoryOnly => "memory",
        }
    }
}

impl FromStr for Pushdown {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "memory" | "memory-only" | "memory_only" => Ok(Self::MemoryOnly),
            _ => Err(ConfigurationError::unknown("pushdown", value)),
        }
    }
}

impl fmt::Display for Pushdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a listing source can do and which attributes it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCapabilities {
    pub pushdown: Pushdown,
    /// Whether listings carry a `subject` attribute.
    pub subject: bool,
}

impl SourceCapabilities {
    #[must_use]
    pub const fn remote() -> Self {
        Self {
            pushdown: Pushdown::Remote,
            subject: true,
        }
    }

    #[must_use]
    pub const fn memory_only() -> Self {
        Self {
            pushdown: Pushdown::MemoryOnly,
            subject: true,
        }
    }

    #[must_use]
    pub const fn with_subject(mut self, subject: bool) -> Self {
        self.subject = subject;
        self
    }

    /// Free-text columns searched when the scope is "any field".
    #[must_use]
    pub fn text_columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::Title, Column::Author];
        if self.subject {
            columns.push(Column::Subject);
        }
        columns.extend([Column::Isbn, Column::Genre]);
        columns
    }
}

/// A store of marketplace listings the search engine can query.
///
/// Remote-capable stores implement [`query`](Self::query); memory-only stores
/// implement [`snapshot`](Self::snapshot) and let the engine filter, sort and
/// slice. Both paths must describe the same underlying rows.
pub trait ListingSource: Send + Sync {
    fn capabilities(&self) -> SourceCapabilities;

    /// Evaluate a pushed-down query and return the requested window plus the
    /// total number of matching rows.
    fn query(
        &self,
        _query: &RemoteQuery,
        _ctx: &QueryContext<'_>,
    ) -> Result<QueryResponse, SourceError> {
        Err(SourceError::Unsupported("pushed-down queries"))
    }

    /// Return every listing in the store's natural order.
    fn snapshot(&self, _ctx: &QueryContext<'_>) -> Result<Vec<Listing>, SourceError> {
        Err(SourceError::Unsupported("full snapshots"))
    }
}

impl<T> ListingSource for Arc<T>
where
    T: ListingSource + ?Sized,
{
    fn capabilities(&self) -> SourceCapabilities {
        <T as ListingSource>::capabilities(self)
    }

    fn query(
        &self,
        query: &RemoteQuery,
        ctx: &QueryContext<'_>,
    ) -> Result<QueryResponse, SourceError> {
        <T as ListingSource>::query(self, query, ctx)
    }

    fn snapshot(&self, ctx: &QueryContext<'_>) -> Result<Vec<Listing>, SourceError> {
        <T as ListingSource>::snapshot(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_scope_columns_follow_subject_capability() {
        let with_subject = SourceCapabilities::remote();
        assert!(with_subject.text_columns().contains(&Column::Subject));

        let without_subject = SourceCapabilities::memory_only().with_subject(false);
        assert_eq!(
            without_subject.text_columns(),
            vec![Column::Title, Column::Author, Column::Isbn, Column::Genre]
        );
    }

    #[test]
    fn pushdown_parses_known_modes() {
        assert_eq!("remote".parse::<Pushdown>(), Ok(Pushdown::Remote));
        assert_eq!("Memory".parse::<Pushdown>(), Ok(Pushdown::MemoryOnly));
        assert!("sql".parse::<Pushdown>().is_err());
    }
}
