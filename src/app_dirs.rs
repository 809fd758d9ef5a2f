//! Resolve where `bookswap-search` looks for its configuration and data.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "bookswap";
const APPLICATION: &str = "bookswap-search";

const CONFIG_DIR_ENV: &str = "BOOKSWAP_CONFIG_DIR";
const DATA_DIR_ENV: &str = "BOOKSWAP_DATA_DIR";

/// File name of the listing export looked up in the data directory.
pub const LISTINGS_FILE: &str = "listings.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for bookswap-search"))
}

/// An empty variable counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory searched for a default listing export.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Listing export in the data directory, if one exists.
pub fn default_listings_file() -> Option<PathBuf> {
	let path = get_data_dir().ok()?.join(LISTINGS_FILE);
	path.is_file().then_some(path)
}
