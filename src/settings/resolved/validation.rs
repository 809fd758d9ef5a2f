use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use bookswap_search::{FilterState, PageSize};

use super::{ConfigError, ConfigSources, ResolvedConfig, keys};

const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

/// Parse an optional textual setting, reporting failures against its origin.
pub(crate) fn parse_setting<T>(
	key: &'static str,
	value: Option<String>,
	sources: &ConfigSources,
) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: Display,
{
	let Some(value) = value else {
		return Ok(None);
	};
	match value.parse() {
		Ok(parsed) => Ok(Some(parsed)),
		Err(err) => Err(ConfigError::invalid(
			key,
			value,
			sources.source_for(key),
			err.to_string(),
		)),
	}
}

pub(crate) fn page_size(size: u32, sources: &ConfigSources) -> Result<PageSize, ConfigError> {
	PageSize::try_from(size).map_err(|err| {
		ConfigError::invalid(
			keys::PAGE_SIZE,
			size.to_string(),
			sources.source_for(keys::PAGE_SIZE),
			err.to_string(),
		)
	})
}

pub(crate) fn page(
	filter: &FilterState,
	page: u32,
	sources: &ConfigSources,
) -> Result<FilterState, ConfigError> {
	filter.with_page(page).map_err(|err| {
		ConfigError::invalid(
			keys::PAGE,
			page.to_string(),
			sources.source_for(keys::PAGE),
			err.to_string(),
		)
	})
}

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			keys::DEBOUNCE_MS,
			config.debounce.as_millis().to_string(),
			sources.source_for(keys::DEBOUNCE_MS),
			"must be at most 10000",
		));
	}

	if config.wait_timeout.is_zero() {
		return Err(ConfigError::invalid(
			keys::WAIT_TIMEOUT_MS,
			"0",
			sources.source_for(keys::WAIT_TIMEOUT_MS),
			"must be greater than zero",
		));
	}

	Ok(())
}
