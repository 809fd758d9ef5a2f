use std::collections::HashMap;
use std::fmt;

/// Where a setting's effective value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that were explicitly provided.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	origins: HashMap<&'static str, SettingSource>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, source: Option<SettingSource>) {
		if let Some(source) = source {
			self.origins.insert(key, source);
		}
	}

	/// Origin of `key`, assuming a config file when nothing was recorded.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.origins
			.get(key)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}

/// Dotted configuration keys.
pub(crate) mod keys {
	use crate::settings::sources::ENV_PREFIX;

	pub(crate) const PUSHDOWN: &str = "source.pushdown";
	pub(crate) const SEARCH_BY: &str = "search.search_by";
	pub(crate) const CONDITION: &str = "search.condition";
	pub(crate) const MATERIAL_TYPE: &str = "search.material_type";
	pub(crate) const SORT: &str = "search.sort";
	pub(crate) const PAGE: &str = "search.page";
	pub(crate) const PAGE_SIZE: &str = "search.page_size";
	pub(crate) const DEBOUNCE_MS: &str = "search.debounce_ms";
	pub(crate) const WAIT_TIMEOUT_MS: &str = "search.wait_timeout_ms";
	pub(crate) const LOG_LEVEL: &str = "log.level";

	/// Environment variable that overrides `key`.
	pub(crate) fn env_var(key: &str) -> String {
		format!("{ENV_PREFIX}__{}", key.replace('.', "__").to_uppercase())
	}

}
