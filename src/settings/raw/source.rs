use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[source]`: where listings come from and what the store can do.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) path: Option<PathBuf>,
	pub(super) pushdown: Option<String>,
	pub(super) subject: Option<bool>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
		if let Some(pushdown) = cli.pushdown {
			self.pushdown = Some(pushdown.as_str().to_string());
		}
		if cli.no_subject {
			self.subject = Some(false);
		}
	}
}
