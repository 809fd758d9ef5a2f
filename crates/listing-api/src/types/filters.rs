use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::types::MaterialKind;

/// Fold a UI label or identifier into the kebab-case key used for matching.
fn label_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != ':')
        .map(|ch| match ch {
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Which listing attribute the search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchBy {
    #[default]
    Any,
    Title,
    Author,
    Subject,
    Isbn,
    Genre,
}

impl SearchBy {
    pub const ALL: [Self; 6] = [
        Self::Any,
        Self::Title,
        Self::Author,
        Self::Subject,
        Self::Isbn,
        Self::Genre,
    ];

    /// Label shown in the storefront's "search by" control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Subject => "Subject",
            Self::Isbn => "ISBN",
            Self::Genre => "Genre",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Title => "title",
            Self::Author => "author",
            Self::Subject => "subject",
            Self::Isbn => "isbn",
            Self::Genre => "genre",
        }
    }
}

impl FromStr for SearchBy {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match label_key(value).as_str() {
            "any" => Ok(Self::Any),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "subject" => Ok(Self::Subject),
            "isbn" => Ok(Self::Isbn),
            "genre" => Ok(Self::Genre),
            _ => Err(ConfigurationError::unknown("search-by", value)),
        }
    }
}

impl fmt::Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the term must relate to the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    #[default]
    Contains,
    ContainsExactPhrase,
    StartsWith,
}

impl Condition {
    pub const ALL: [Self; 3] = [Self::Contains, Self::ContainsExactPhrase, Self::StartsWith];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::ContainsExactPhrase => "Contains exact phrase",
            Self::StartsWith => "Starts with",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::ContainsExactPhrase => "contains-exact-phrase",
            Self::StartsWith => "starts-with",
        }
    }
}

impl FromStr for Condition {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match label_key(value).as_str() {
            "contains" => Ok(Self::Contains),
            "contains-exact-phrase" | "exact-phrase" => Ok(Self::ContainsExactPhrase),
            "starts-with" => Ok(Self::StartsWith),
            _ => Err(ConfigurationError::unknown("condition", value)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter offered by the storefront. `All` applies no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialType {
    #[default]
    All,
    Articles,
    Books,
    Journals,
}

impl MaterialType {
    pub const ALL: [Self; 4] = [Self::All, Self::Articles, Self::Books, Self::Journals];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All items",
            Self::Articles => "Articles",
            Self::Books => "Books",
            Self::Journals => "Journals",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Articles => "articles",
            Self::Books => "books",
            Self::Journals => "journals",
        }
    }

    /// Stored value this filter constrains listings to.
    #[must_use]
    pub const fn kind(self) -> Option<MaterialKind> {
        match self {
            Self::All => None,
            Self::Articles => Some(MaterialKind::Article),
            Self::Books => Some(MaterialKind::Book),
            Self::Journals => Some(MaterialKind::Journal),
        }
    }
}

impl FromStr for MaterialType {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match label_key(value).as_str() {
            "all" | "all-items" => Ok(Self::All),
            "articles" => Ok(Self::Articles),
            "books" => Ok(Self::Books),
            "journals" => Ok(Self::Journals),
            _ => Err(ConfigurationError::unknown("material type", value)),
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result ordering. `Relevance` keeps the source's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Relevance, Self::Newest, Self::PriceAsc, Self::PriceDesc];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Best match",
            Self::Newest => "Newest",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match label_key(value).as_str() {
            "relevance" | "best-match" => Ok(Self::Relevance),
            "newest" => Ok(Self::Newest),
            "price-asc" | "price-low-to-high" => Ok(Self::PriceAsc),
            "price-desc" | "price-high-to-low" => Ok(Self::PriceDesc),
            _ => Err(ConfigurationError::unknown("sort", value)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Number of listings per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Twelve, Self::TwentyFour, Self::FortyEight];

    #[must_use]
    pub const fn get(self) -> u32 {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
            Self::FortyEight => 48,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ConfigurationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(Self::Twelve),
            24 => Ok(Self::TwentyFour),
            48 => Ok(Self::FortyEight),
            other => Err(ConfigurationError::InvalidPageSize(other)),
        }
    }
}

impl FromStr for PageSize {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let size: u32 = value
            .trim()
            .parse()
            .map_err(|_| ConfigurationError::unknown("page size", value))?;
        Self::try_from(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
