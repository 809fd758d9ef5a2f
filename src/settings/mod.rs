//! Configuration loading and resolution.
//!
//! Settings come from config files, `BOOKSWAP__*` environment variables and
//! CLI flags, in increasing priority. `load` returns a validated
//! [`ResolvedConfig`] ready to build a search from.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};
use log::debug;

use self::raw::RawConfig;
use self::sources::{build_config, config_files};
use crate::cli::CliArgs;

pub use resolved::ResolvedConfig;

/// Load configuration by combining CLI arguments, config files and environment
/// variables. Deserialization errors list the files that were consulted.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let files = consulted_files(cli);
	debug!("reading settings from {files}");

	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.with_context(|| format!("invalid settings in {files}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

fn consulted_files(cli: &CliArgs) -> String {
	let files: Vec<String> = config_files(cli)
		.iter()
		.map(|(path, _)| path.display().to_string())
		.collect();
	if files.is_empty() {
		"environment only".to_string()
	} else {
		files.join(", ")
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use bookswap_search::SortKey;
	use clap::Parser;

	use super::*;

	fn config_file(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		write!(file, "{contents}").unwrap();
		file
	}

	#[test]
	fn load_merges_files_and_flags() {
		let file = config_file("[search]\nsort = \"newest\"\npage_size = 24\n");
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["bookswap-search", "-n", "-c", &path, "--page", "2"]);

		let resolved = load(&cli).unwrap();
		assert_eq!(resolved.filter.sort(), SortKey::Newest);
		assert_eq!(resolved.filter.page_size().get(), 24);
		assert_eq!(resolved.filter.page(), 2);
	}

	#[test]
	fn badly_typed_settings_name_the_file() {
		let file = config_file("[search]\npage_size = \"lots\"\n");
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["bookswap-search", "-n", "-c", &path]);

		let err = load(&cli).unwrap_err();
		assert!(format!("{err}").contains(&path));
	}

	#[test]
	fn no_files_reads_the_environment_only() {
		let cli = CliArgs::parse_from(["bookswap-search", "-n"]);
		assert_eq!(consulted_files(&cli), "environment only");
	}
}
