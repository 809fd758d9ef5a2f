//! One-shot query execution against a listing source.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::api::{
	ConfigurationError, Listing, ListingSource, PageSize, QueryContext, SourceError,
};
use crate::compiler::{CompiledQuery, QueryCompiler, backend_for};
use crate::filter::FilterState;
use crate::pager::page_count;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),
	#[error(transparent)]
	Source(#[from] SourceError),
}

/// Listings for one page plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
	pub items: Vec<Listing>,
	pub total: usize,
	pub page: u32,
	#[serde(serialize_with = "serialize_page_size")]
	pub page_size: PageSize,
}

impl ResultPage {
	pub fn page_count(&self) -> u32 {
		page_count(self.total, self.page_size)
	}
}

fn serialize_page_size<S: serde::Serializer>(size: &PageSize, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_u32(size.get())
}

/// Compiles filter states and runs them on the matching backend.
#[derive(Clone)]
pub struct SearchEngine {
	source: Arc<dyn ListingSource>,
	compiler: QueryCompiler,
}

impl SearchEngine {
	pub fn new(source: Arc<dyn ListingSource>) -> Self {
		let compiler = QueryCompiler::new(source.capabilities());
		Self { source, compiler }
	}

	pub fn compiler(&self) -> &QueryCompiler {
		&self.compiler
	}

	pub fn compile(&self, state: &FilterState) -> Result<CompiledQuery, ConfigurationError> {
		self.compiler.compile(state)
	}

	/// Run an already compiled query.
	pub fn execute(
		&self,
		state: &FilterState,
		query: &CompiledQuery,
		ctx: &QueryContext<'_>,
	) -> Result<ResultPage, SourceError> {
		let backend = backend_for(self.compiler.capabilities().pushdown);
		let response = backend.execute(query, self.source.as_ref(), ctx)?;
		Ok(ResultPage {
			items: response.items,
			total: response.total,
			page: state.page(),
			page_size: state.page_size(),
		})
	}

	/// Compile and run `state` to completion.
	///
	/// Repeating a search with the same state against unchanged data returns
	/// the same page.
	pub fn search(&self, state: &FilterState) -> Result<ResultPage, SearchError> {
		let query = self.compile(state)?;
		Ok(self.execute(state, &query, &QueryContext::detached())?)
	}
}

impl std::fmt::Debug for SearchEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchEngine")
			.field("compiler", &self.compiler)
			.finish_non_exhaustive()
	}
}
