use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use bookswap_search::{
	Condition, FilterState, MaterialType, Pushdown, SearchBy, SortKey, SourceCapabilities,
	schedule::DEFAULT_DEBOUNCE,
};
use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, keys, validation};

mod search;
mod source;

use search::SearchSection;
use source::SourceSection;

const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// `[log]`: verbosity of the stderr log.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	search: SearchSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.detect_sources(cli);
		let Self {
			source,
			search,
			log,
		} = self;

		let pushdown: Pushdown =
			validation::parse_setting(keys::PUSHDOWN, source.pushdown, &sources)?.unwrap_or_default();
		let capabilities = match pushdown {
			Pushdown::Remote => SourceCapabilities::remote(),
			Pushdown::MemoryOnly => SourceCapabilities::memory_only(),
		}
		.with_subject(source.subject.unwrap_or(true));

		let mut filter = FilterState::default().with_term(search.term.unwrap_or_default());
		if let Some(search_by) =
			validation::parse_setting::<SearchBy>(keys::SEARCH_BY, search.search_by, &sources)?
		{
			filter = filter.with_search_by(search_by);
		}
		if let Some(condition) =
			validation::parse_setting::<Condition>(keys::CONDITION, search.condition, &sources)?
		{
			filter = filter.with_condition(condition);
		}
		if let Some(material_type) = validation::parse_setting::<MaterialType>(
			keys::MATERIAL_TYPE,
			search.material_type,
			&sources,
		)? {
			filter = filter.with_material_type(material_type);
		}
		if let Some(sort) = validation::parse_setting::<SortKey>(keys::SORT, search.sort, &sources)? {
			filter = filter.with_sort(sort);
		}
		if let Some(page_size) = search.page_size {
			filter = filter.with_page_size(validation::page_size(page_size, &sources)?);
		}
		if let Some(page) = search.page {
			filter = validation::page(&filter, page, &sources)?;
		}

		let log_level: Option<LevelFilter> =
			validation::parse_setting(keys::LOG_LEVEL, log.level, &sources)?;

		let config = ResolvedConfig {
			data_path: source.path,
			capabilities,
			filter,
			debounce: search
				.debounce_ms
				.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
			wait_timeout: search
				.wait_timeout_ms
				.map_or(DEFAULT_WAIT_TIMEOUT, Duration::from_millis),
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}

	fn detect_sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		let search = &self.search;
		let entries = [
			(keys::PUSHDOWN, cli.pushdown.is_some(), self.source.pushdown.is_some(), "--pushdown"),
			(keys::SEARCH_BY, cli.search_by.is_some(), search.search_by.is_some(), "--search-by"),
			(keys::CONDITION, cli.condition.is_some(), search.condition.is_some(), "--condition"),
			(
				keys::MATERIAL_TYPE,
				cli.material_type.is_some(),
				search.material_type.is_some(),
				"--material-type",
			),
			(keys::SORT, cli.sort.is_some(), search.sort.is_some(), "--sort"),
			(keys::PAGE, cli.page.is_some(), search.page.is_some(), "--page"),
			(keys::PAGE_SIZE, cli.page_size.is_some(), search.page_size.is_some(), "--page-size"),
			(keys::DEBOUNCE_MS, false, search.debounce_ms.is_some(), ""),
			(keys::WAIT_TIMEOUT_MS, false, search.wait_timeout_ms.is_some(), ""),
			(keys::LOG_LEVEL, false, self.log.level.is_some(), ""),
		];
		for (key, cli_present, value_present, flag) in entries {
			sources.record(key, detect_source(cli_present, value_present, key, flag));
		}
		sources
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	key: &'static str,
	cli_flag: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = keys::env_var(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
