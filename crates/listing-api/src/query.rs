//! Query shape pushed down to stores that can filter, order and page themselves.

use std::fmt;
use std::ops::Range;

use crate::types::Listing;

/// Listing attributes a query can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Author,
    Subject,
    Isbn,
    Genre,
    MaterialType,
    TradeType,
    Price,
    CreatedAt,
}

impl Column {
    /// Column name used by the listing store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Subject => "subject",
            Self::Isbn => "isbn",
            Self::Genre => "genre",
            Self::MaterialType => "material_type",
            Self::TradeType => "trade_type",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive pattern match. `%` matches any run of characters, `_`
    /// matches exactly one, and `\` escapes the next character.
    Ilike { column: Column, pattern: String },
    /// Exact, case-sensitive equality.
    Eq { column: Column, value: String },
    /// Matches when at least one member matches.
    AnyOf(Vec<Filter>),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ilike { column, pattern } => write!(f, "{column}.ilike.{pattern}"),
            Self::Eq { column, value } => write!(f, "{column}.eq.{value}"),
            Self::AnyOf(members) => {
                f.write_str("or(")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Ordering constraint. Rows without a value sort first when `nulls_first` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: Column,
    pub ascending: bool,
    pub nulls_first: bool,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        let nulls = if self.nulls_first { "nullsfirst" } else { "nullslast" };
        write!(f, "{}.{direction}.{nulls}", self.column)
    }
}

/// Half-open window `[start, end)` of result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Portion of the window that exists in a result set of `total` rows.
    #[must_use]
    pub fn clamp_to(&self, total: usize) -> Range<usize> {
        let start = self.start.min(total);
        let end = self.end.min(total).max(start);
        start..end
    }
}

/// Filter, order and window pushed down to a query-capable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteQuery {
    /// Every filter must match.
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub range: RowRange,
}

impl RemoteQuery {
    /// A query over all rows in natural order, limited to `range`.
    #[must_use]
    pub fn all(range: RowRange) -> Self {
        Self {
            filters: Vec::new(),
            order: None,
            range,
        }
    }
}

impl fmt::Display for RemoteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for filter in &self.filters {
            match filter {
                Filter::AnyOf(_) => write!(f, "{filter}&")?,
                Filter::Ilike { column, pattern } => write!(f, "{column}=ilike.{pattern}&")?,
                Filter::Eq { column, value } => write!(f, "{column}=eq.{value}&")?,
            }
        }
        if let Some(order) = &self.order {
            write!(f, "order={order}&")?;
        }
        if self.range.is_empty() {
            write!(f, "range=empty")
        } else {
            write!(f, "range={}-{}", self.range.start, self.range.end - 1)
        }
    }
}

/// Rows for the requested window together with the number of matching rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    pub items: Vec<Listing>,
    pub total: usize,
}
