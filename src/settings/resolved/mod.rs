use std::path::PathBuf;
use std::time::Duration;

use bookswap_search::{FilterState, SourceCapabilities};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource, keys};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Listing export to load. `None` falls back to the data directory.
	pub data_path: Option<PathBuf>,
	pub capabilities: SourceCapabilities,
	pub filter: FilterState,
	pub debounce: Duration,
	pub wait_timeout: Duration,
	pub log_level: Option<LevelFilter>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
