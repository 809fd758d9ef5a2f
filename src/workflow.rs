use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use bookswap_search::{
	ConfigurationError, FilterState, ListingStore, ResultPage, SearchController, SearchStatus,
	SourceError, app_dirs,
};
use log::info;

use crate::settings::ResolvedConfig;

/// Filters that ran together with the page they produced.
#[derive(Debug)]
pub(crate) struct SearchReport {
	pub(crate) filter: FilterState,
	pub(crate) page: ResultPage,
}

/// Loads the listing export and drives one search through the controller.
pub(crate) struct SearchWorkflow {
	controller: SearchController,
	wait_timeout: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			data_path,
			capabilities,
			filter,
			debounce,
			wait_timeout,
			log_level: _,
		} = config;

		let path = listings_path(data_path)?;
		let store = ListingStore::from_path(&path, capabilities)
			.with_context(|| format!("failed to load listings from {}", path.display()))?;
		info!("loaded {} listings from {}", store.len(), path.display());

		let controller = SearchController::new(Arc::new(store))
			.with_debounce(debounce)
			.with_filter(filter);

		Ok(Self {
			controller,
			wait_timeout,
		})
	}

	pub(crate) fn run(mut self) -> Result<SearchReport> {
		self.controller.refresh()?;

		if !self.controller.wait_for_latest(self.wait_timeout) {
			return Err(SourceError::Timeout(self.wait_timeout).into());
		}

		if self.controller.status() == SearchStatus::Failed {
			let message = self.controller.error().unwrap_or("search failed");
			return Err(anyhow!("{message}"));
		}

		let filter = self.controller.applied().cloned().unwrap_or_default();
		let page = ResultPage {
			items: self.controller.items().to_vec(),
			total: self.controller.total(),
			page: self.controller.page(),
			page_size: filter.page_size(),
		};
		Ok(SearchReport { filter, page })
	}
}

fn listings_path(configured: Option<PathBuf>) -> Result<PathBuf> {
	configured
		.or_else(app_dirs::default_listings_file)
		.ok_or_else(|| {
			ConfigurationError::Unconfigured(
				"no listing export given; pass --data or set source.path".to_string(),
			)
			.into()
		})
}
