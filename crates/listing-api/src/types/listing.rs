use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::Column;

/// Opaque listing identifier. Stores hand out either numeric or string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ListingId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Category stored on each listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Book,
    Journal,
    Article,
}

impl MaterialKind {
    /// Value as stored by the listing source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Journal => "journal",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the seller is offering the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Trade,
    Borrow,
}

impl TradeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Trade => "trade",
            Self::Borrow => "borrow",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only projection of a marketplace listing as returned by a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub material_type: MaterialKind,
    pub trade_type: TradeType,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Create a listing with only the required attributes populated.
    #[must_use]
    pub fn new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        material_type: MaterialKind,
        trade_type: TradeType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            subject: None,
            isbn: None,
            genre: None,
            material_type,
            trade_type,
            price: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Text stored in `column`, or `None` when the attribute is absent or not textual.
    #[must_use]
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Title => Some(self.title.as_str()),
            Column::Author => self.author.as_deref(),
            Column::Subject => self.subject.as_deref(),
            Column::Isbn => self.isbn.as_deref(),
            Column::Genre => self.genre.as_deref(),
            Column::MaterialType => Some(self.material_type.as_str()),
            Column::TradeType => Some(self.trade_type.as_str()),
            Column::Price | Column::CreatedAt => None,
        }
    }
}
