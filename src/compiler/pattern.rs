use crate::api::{Column, Condition, Filter, SearchBy};
use crate::filter::normalize;

/// How a single field value is tested against the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPattern {
	/// Case-insensitive prefix. Holds the lowercased term.
	Prefix(String),
	/// Case-insensitive substring. Holds the lowercased term.
	Substring(String),
	/// Exact, case-sensitive equality with the trimmed term.
	Exact(String),
}

impl MatchPattern {
	/// Build the pattern for `term`, or `None` when the term is blank and
	/// therefore matches every listing.
	pub fn compile(search_by: SearchBy, condition: Condition, term: &str) -> Option<Self> {
		let trimmed = normalize(term);
		if trimmed.is_empty() {
			return None;
		}

		let pattern = match (search_by, condition) {
			(SearchBy::Isbn, Condition::ContainsExactPhrase) => Self::Exact(trimmed.to_string()),
			(_, Condition::StartsWith) => Self::Prefix(trimmed.to_lowercase()),
			(_, Condition::Contains | Condition::ContainsExactPhrase) => {
				Self::Substring(trimmed.to_lowercase())
			}
		};
		Some(pattern)
	}

	pub fn matches(&self, value: &str) -> bool {
		match self {
			Self::Prefix(needle) => value.to_lowercase().starts_with(needle.as_str()),
			Self::Substring(needle) => value.to_lowercase().contains(needle.as_str()),
			Self::Exact(expected) => value == expected,
		}
	}

	/// Express the pattern as a store filter on `column`.
	pub fn to_filter(&self, column: Column) -> Filter {
		match self {
			Self::Prefix(needle) => Filter::Ilike {
				column,
				pattern: format!("{}%", escape_like(needle)),
			},
			Self::Substring(needle) => Filter::Ilike {
				column,
				pattern: format!("%{}%", escape_like(needle)),
			},
			Self::Exact(expected) => Filter::Eq {
				column,
				value: expected.clone(),
			},
		}
	}
}

/// Escape pattern metacharacters so the term matches literally.
pub fn escape_like(term: &str) -> String {
	let mut escaped = String::with_capacity(term.len());
	for ch in term.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			escaped.push('\\');
		}
		escaped.push(ch);
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_term_compiles_to_wildcard() {
		assert_eq!(
			MatchPattern::compile(SearchBy::Title, Condition::StartsWith, "   "),
			None
		);
	}

	#[test]
	fn isbn_exact_phrase_uses_equality() {
		let pattern =
			MatchPattern::compile(SearchBy::Isbn, Condition::ContainsExactPhrase, " 978-1 ").unwrap();
		assert_eq!(pattern, MatchPattern::Exact("978-1".into()));
		assert!(pattern.matches("978-1"));
		assert!(!pattern.matches("978-1-4028-9462-6"));
		assert_eq!(
			pattern.to_filter(Column::Isbn),
			Filter::Eq {
				column: Column::Isbn,
				value: "978-1".into(),
			}
		);
	}

	#[test]
	fn exact_phrase_on_other_fields_is_a_substring_match() {
		let pattern =
			MatchPattern::compile(SearchBy::Title, Condition::ContainsExactPhrase, "Dune").unwrap();
		assert!(pattern.matches("Children of Dune"));
		assert!(pattern.matches("DUNE MESSIAH"));
	}

	#[test]
	fn prefix_and_substring_ignore_case() {
		let prefix = MatchPattern::compile(SearchBy::Author, Condition::StartsWith, "Tol").unwrap();
		assert!(prefix.matches("tolkien"));
		assert!(!prefix.matches("Leo Tolstoy"));

		let substring = MatchPattern::compile(SearchBy::Any, Condition::Contains, "TOL").unwrap();
		assert!(substring.matches("Leo Tolstoy"));
	}

	#[test]
	fn metacharacters_are_escaped_in_store_patterns() {
		let pattern = MatchPattern::compile(SearchBy::Title, Condition::Contains, "100%_").unwrap();
		assert_eq!(
			pattern.to_filter(Column::Title),
			Filter::Ilike {
				column: Column::Title,
				pattern: r"%100\%\_%".into(),
			}
		);
		assert_eq!(escape_like(r"a\b"), r"a\\b");
	}
}
