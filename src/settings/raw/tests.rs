use std::path::PathBuf;

use bookswap_search::{Condition, MaterialType, Pushdown, SearchBy, SortKey};
use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

fn parse(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("bookswap-search").chain(args.iter().copied()))
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = parse(&[
		"--data",
		"/srv/listings.json",
		"--pushdown",
		"memory",
		"--no-subject",
		"--search-by",
		"title",
		"--sort",
		"newest",
		"--page-size",
		"24",
		"dune",
	]);

	let mut config = RawConfig::default();
	config.search.sort = Some("price-desc".into());
	config.search.condition = Some("starts-with".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.source.path, Some(PathBuf::from("/srv/listings.json")));
	assert_eq!(config.source.pushdown.as_deref(), Some("memory"));
	assert_eq!(config.source.subject, Some(false));
	assert_eq!(config.search.term.as_deref(), Some("dune"));
	assert_eq!(config.search.sort.as_deref(), Some("newest"));
	assert_eq!(config.search.condition.as_deref(), Some("starts-with"));
	assert_eq!(config.search.page_size, Some(24));
}

#[test]
fn resolve_builds_filter_and_capabilities() {
	let cli = parse(&["--pushdown", "memory", "--material-type", "journals", "calc"]);

	let mut config = RawConfig::default();
	config.search.search_by = Some("Author".into());
	config.search.condition = Some("exact phrase".into());
	config.search.page = Some(3);
	config.search.debounce_ms = Some(150);
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.capabilities.pushdown, Pushdown::MemoryOnly);
	assert!(resolved.capabilities.subject);
	assert_eq!(resolved.filter.term(), "calc");
	assert_eq!(resolved.filter.search_by(), SearchBy::Author);
	assert_eq!(resolved.filter.condition(), Condition::ContainsExactPhrase);
	assert_eq!(resolved.filter.material_type(), MaterialType::Journals);
	assert_eq!(resolved.filter.sort(), SortKey::Relevance);
	assert_eq!(resolved.filter.page(), 3);
	assert_eq!(resolved.debounce.as_millis(), 150);
	assert_eq!(resolved.wait_timeout.as_secs(), 5);
}

#[test]
fn invalid_flag_values_name_the_flag() {
	let cli = parse(&["--sort", "cheapest"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("unknown sort");
	let message = err.to_string();
	assert!(message.contains("search.sort"));
	assert!(message.contains("CLI flag `--sort`"));
}

#[test]
fn unsupported_page_size_from_file_names_the_key() {
	let cli = parse(&[]);
	let mut config = RawConfig::default();
	config.search.page_size = Some(10);
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("bad page size");
	assert!(err.to_string().contains("configuration key `search.page_size`"));
}
