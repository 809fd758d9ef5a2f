use serde::Deserialize;

use crate::cli::CliArgs;

/// `[search]`: the initial filters and timing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) term: Option<String>,
	pub(super) search_by: Option<String>,
	pub(super) condition: Option<String>,
	pub(super) material_type: Option<String>,
	pub(super) sort: Option<String>,
	pub(super) page: Option<u32>,
	pub(super) page_size: Option<u32>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) wait_timeout_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(term) = cli.term.clone() {
			self.term = Some(term);
		}
		if let Some(value) = cli.search_by.clone() {
			self.search_by = Some(value);
		}
		if let Some(value) = cli.condition.clone() {
			self.condition = Some(value);
		}
		if let Some(value) = cli.material_type.clone() {
			self.material_type = Some(value);
		}
		if let Some(value) = cli.sort.clone() {
			self.sort = Some(value);
		}
		if let Some(value) = cli.page {
			self.page = Some(value);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
	}
}
