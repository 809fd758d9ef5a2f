use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bookswap_search::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

/// Prefix of environment overrides, e.g. `BOOKSWAP__SEARCH__PAGE_SIZE`.
pub(super) const ENV_PREFIX: &str = "BOOKSWAP";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	for (path, required) in config_files(cli) {
		builder = builder.add_source(File::from(path).required(required));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Files consulted for `cli`, in merge order, with whether each must exist.
pub(super) fn config_files(cli: &CliArgs) -> Vec<(PathBuf, bool)> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	defaults
		.into_iter()
		.map(|path| (path, false))
		.chain(cli.config.iter().map(|path| (path.clone(), true)))
		.collect()
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".bookswap.toml"));
		files.push(current_dir.join("bookswap.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".bookswap.toml")));
		assert!(files.iter().any(|path| path.ends_with("bookswap.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "[search]\nsort = \"newest\"\npage_size = 24").unwrap();

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["bookswap-search", "--no-config", "--config", &path]);
		let config = build_config(&cli).unwrap();

		assert_eq!(config.get_string("search.sort").unwrap(), "newest");
		assert_eq!(config.get_int("search.page_size").unwrap(), 24);
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let cli = CliArgs::parse_from(["bookswap-search", "-n", "-c", "extra.toml"]);
		assert_eq!(config_files(&cli), vec![(PathBuf::from("extra.toml"), true)]);

		let cli = CliArgs::parse_from(["bookswap-search", "-c", "extra.toml"]);
		let files = config_files(&cli);
		assert!(files.len() > 1);
		assert!(files[..files.len() - 1].iter().all(|(_, required)| !required));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["bookswap-search", "--no-config", "--config", &path]);
		assert!(build_config(&cli).is_err());
	}
}
