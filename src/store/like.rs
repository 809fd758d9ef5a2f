//! Case-insensitive `LIKE` matching.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
	Literal(char),
	AnyOne,
	AnyRun,
}

fn tokenize(pattern: &str) -> Vec<Token> {
	let mut tokens = Vec::with_capacity(pattern.len());
	let mut chars = pattern.chars();
	while let Some(ch) = chars.next() {
		let token = match ch {
			'%' => Token::AnyRun,
			'_' => Token::AnyOne,
			// A trailing backslash stands for itself.
			'\\' => Token::Literal(chars.next().unwrap_or('\\')),
			other => Token::Literal(other),
		};
		tokens.extend(lowercase(token));
	}
	tokens
}

fn lowercase(token: Token) -> Vec<Token> {
	match token {
		Token::Literal(ch) => ch.to_lowercase().map(Token::Literal).collect(),
		other => vec![other],
	}
}

/// Whether `value` matches `pattern`, ignoring case.
///
/// `%` matches any run of characters, `_` exactly one, and `\` escapes the
/// character that follows it.
pub fn ilike(value: &str, pattern: &str) -> bool {
	let tokens = tokenize(pattern);
	let text: Vec<char> = value.to_lowercase().chars().collect();

	let (mut t, mut p) = (0, 0);
	let mut backtrack: Option<(usize, usize)> = None;

	while t < text.len() {
		match tokens.get(p) {
			Some(Token::AnyRun) => {
				backtrack = Some((p, t));
				p += 1;
			}
			Some(Token::AnyOne) => {
				t += 1;
				p += 1;
			}
			Some(Token::Literal(ch)) if *ch == text[t] => {
				t += 1;
				p += 1;
			}
			_ => match backtrack {
				Some((star, matched)) => {
					p = star + 1;
					t = matched + 1;
					backtrack = Some((star, matched + 1));
				}
				None => return false,
			},
		}
	}

	tokens[p..].iter().all(|token| *token == Token::AnyRun)
}

#[cfg(test)]
mod tests {
	use super::ilike;

	#[test]
	fn wildcards_match_runs_and_single_characters() {
		assert!(ilike("The Rust Book", "%rust%"));
		assert!(ilike("Rustonomicon", "rust%"));
		assert!(!ilike("Trusty", "rust%"));
		assert!(ilike("cat", "c_t"));
		assert!(!ilike("cart", "c_t"));
		assert!(ilike("", "%"));
		assert!(!ilike("", "_"));
	}

	#[test]
	fn matching_ignores_case() {
		assert!(ilike("LINEAR ALGEBRA", "%algebra"));
		assert!(ilike("linear algebra", "LINEAR%"));
	}

	#[test]
	fn escaped_metacharacters_match_literally() {
		assert!(ilike("100% cotton", r"100\%%"));
		assert!(!ilike("1000 cotton", r"100\%%"));
		assert!(ilike("snake_case", r"%e\_c%"));
		assert!(!ilike("snakexcase", r"%e\_c%"));
		assert!(ilike(r"a\b", r"a\\b"));
	}

	#[test]
	fn backtracking_finds_later_occurrences() {
		assert!(ilike("abcabd", "%abd"));
		assert!(ilike("mississippi", "%iss%ppi"));
		assert!(!ilike("mississippi", "%iss%ppx"));
	}
}
