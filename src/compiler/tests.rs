use chrono::{TimeZone, Utc};

use super::*;
use crate::api::{
	Condition, ListingSource, MaterialType, PageSize, QueryContext, QueryResponse, TradeType,
};
use crate::store::ListingStore;

fn catalogue() -> Vec<Listing> {
	let at = |day: u32| Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap();
	vec![
		Listing::new("l1", "Linear Algebra Done Right", MaterialKind::Book, TradeType::Buy)
			.with_author("Axler")
			.with_subject("Mathematics")
			.with_isbn("978-3-319-11080-6")
			.with_genre("Textbook")
			.with_price(35.0)
			.with_created_at(at(4)),
		Listing::new("l2", "Nature", MaterialKind::Journal, TradeType::Borrow)
			.with_subject("Biology")
			.with_created_at(at(9)),
		Listing::new("l3", "Attention Is All You Need", MaterialKind::Article, TradeType::Trade)
			.with_author("Vaswani")
			.with_subject("Machine Learning")
			.with_price(5.0),
		Listing::new("l4", "The Algebra of Programming", MaterialKind::Book, TradeType::Buy)
			.with_author("Bird")
			.with_genre("Computer Science")
			.with_isbn("978-1")
			.with_price(35.0)
			.with_created_at(at(1)),
		Listing::new("l5", "100% Organic Chemistry", MaterialKind::Book, TradeType::Trade)
			.with_author("Algernon Price")
			.with_isbn("978-10")
			.with_price(3.0)
			.with_created_at(at(12)),
		Listing::new("l6", "Journal of Algebra", MaterialKind::Journal, TradeType::Buy)
			.with_subject("Mathematics")
			.with_price(12.5)
			.with_created_at(at(4)),
	]
}

fn run(store: &ListingStore, state: &FilterState) -> QueryResponse {
	let caps = store.capabilities();
	let query = QueryCompiler::new(caps).compile(state).unwrap();
	backend_for(caps.pushdown)
		.execute(&query, store, &QueryContext::detached())
		.unwrap()
}

fn ids(response: &QueryResponse) -> Vec<String> {
	response
		.items
		.iter()
		.map(|listing| listing.id.to_string())
		.collect()
}

#[test]
fn remote_and_memory_backends_agree() {
	let remote = ListingStore::new(catalogue(), SourceCapabilities::remote());
	let memory = ListingStore::new(catalogue(), SourceCapabilities::memory_only());

	let terms = ["", "alg", "ALGEBRA", "978-1", "100%", "  nature "];
	for term in terms {
		for search_by in SearchBy::ALL {
			for condition in Condition::ALL {
				for material_type in MaterialType::ALL {
					for sort in SortKey::ALL {
						for page_size in [PageSize::Twelve, PageSize::TwentyFour] {
							let state = FilterState::default()
								.with_term(term)
								.with_search_by(search_by)
								.with_condition(condition)
								.with_material_type(material_type)
								.with_sort(sort)
								.with_page_size(page_size);

							let pushed = run(&remote, &state);
							let local = run(&memory, &state);
							assert_eq!(ids(&pushed), ids(&local), "items differ for {state:?}");
							assert_eq!(pushed.total, local.total, "totals differ for {state:?}");
						}
					}
				}
			}
		}
	}
}

#[test]
fn backends_agree_on_later_pages() {
	let listings: Vec<Listing> = (0..30)
		.map(|n| {
			let listing = Listing::new(
				format!("p{n}"),
				format!("Reader {n}"),
				MaterialKind::Book,
				TradeType::Buy,
			);
			if n % 4 == 0 {
				listing
			} else {
				listing.with_price(f64::from(n % 7))
			}
		})
		.collect();
	let remote = ListingStore::new(listings.clone(), SourceCapabilities::remote());
	let memory = ListingStore::new(listings, SourceCapabilities::memory_only());

	for page in 1..=4 {
		let state = FilterState::default()
			.with_sort(SortKey::PriceDesc)
			.with_page(page)
			.unwrap();
		let pushed = run(&remote, &state);
		let local = run(&memory, &state);
		assert_eq!(ids(&pushed), ids(&local), "page {page}");
		assert_eq!(pushed.total, 30);
	}
}

#[test]
fn missing_prices_sort_first_in_both_directions() {
	let listings = vec![
		Listing::new("a", "No price", MaterialKind::Book, TradeType::Trade),
		Listing::new("b", "Five", MaterialKind::Book, TradeType::Buy).with_price(5.0),
		Listing::new("c", "Three", MaterialKind::Book, TradeType::Buy).with_price(3.0),
	];

	for caps in [SourceCapabilities::remote(), SourceCapabilities::memory_only()] {
		let store = ListingStore::new(listings.clone(), caps);
		let ascending = run(&store, &FilterState::default().with_sort(SortKey::PriceAsc));
		assert_eq!(ids(&ascending), ["a", "c", "b"]);

		let descending = run(&store, &FilterState::default().with_sort(SortKey::PriceDesc));
		assert_eq!(ids(&descending), ["a", "b", "c"]);
	}
}

#[test]
fn relevance_keeps_natural_order() {
	let store = ListingStore::new(catalogue(), SourceCapabilities::memory_only());
	let response = run(&store, &FilterState::default());
	assert_eq!(ids(&response), ["l1", "l2", "l3", "l4", "l5", "l6"]);
}

#[test]
fn newest_sorts_descending_with_undated_first_and_ties_stable() {
	let store = ListingStore::new(catalogue(), SourceCapabilities::remote());
	let response = run(&store, &FilterState::default().with_sort(SortKey::Newest));
	assert_eq!(ids(&response), ["l3", "l5", "l2", "l1", "l6", "l4"]);
}

#[test]
fn isbn_exact_phrase_matches_only_the_exact_value() {
	let state = FilterState::default()
		.with_term("978-1")
		.with_search_by(SearchBy::Isbn);

	for caps in [SourceCapabilities::remote(), SourceCapabilities::memory_only()] {
		let store = ListingStore::new(catalogue(), caps);

		let exact = run(&store, &state.with_condition(Condition::ContainsExactPhrase));
		assert_eq!(ids(&exact), ["l4"]);

		let contains = run(&store, &state.with_condition(Condition::Contains));
		assert_eq!(ids(&contains), ["l4", "l5"]);
	}
}

#[test]
fn any_scope_searches_every_text_field() {
	let store = ListingStore::new(catalogue(), SourceCapabilities::remote());
	let state = FilterState::default().with_term("alg");

	let response = run(&store, &state);
	assert_eq!(ids(&response), ["l1", "l4", "l5", "l6"]);

	let prefix = run(&store, &state.with_condition(Condition::StartsWith));
	assert_eq!(ids(&prefix), ["l5"]);
}

#[test]
fn material_type_restricts_results() {
	let store = ListingStore::new(catalogue(), SourceCapabilities::memory_only());
	let state = FilterState::default().with_material_type(MaterialType::Journals);
	let response = run(&store, &state);
	assert_eq!(ids(&response), ["l2", "l6"]);
	assert_eq!(response.total, 2);
}

#[test]
fn literal_percent_in_term_is_not_a_wildcard() {
	let store = ListingStore::new(catalogue(), SourceCapabilities::remote());
	let state = FilterState::default()
		.with_term("100%")
		.with_search_by(SearchBy::Title);
	assert_eq!(ids(&run(&store, &state)), ["l5"]);

	let state = state.with_term("0% o");
	assert_eq!(ids(&run(&store, &state)), ["l5"]);
	let state = state.with_term("0%o");
	assert!(run(&store, &state).items.is_empty());
}

#[test]
fn subject_scope_requires_the_capability() {
	let compiler = QueryCompiler::new(SourceCapabilities::remote().with_subject(false));
	let state = FilterState::default().with_search_by(SearchBy::Subject);

	let err = compiler.compile(&state).unwrap_err();
	assert_eq!(
		err,
		ConfigurationError::MissingCapability {
			scope: "Subject",
			field: "subject",
		}
	);
	assert!(compiler.compile(&state.with_search_by(SearchBy::Any)).is_ok());
}

#[test]
fn any_scope_omits_subject_without_the_capability() {
	let compiler = QueryCompiler::new(SourceCapabilities::remote().with_subject(false));
	let query = compiler
		.compile(&FilterState::default().with_term("bio"))
		.unwrap();
	let columns = query.term.map(|term| term.columns).unwrap_or_default();
	assert!(!columns.contains(&Column::Subject));
}

#[test]
fn lowering_produces_material_then_term_then_order() {
	let compiler = QueryCompiler::new(SourceCapabilities::remote());
	let state = FilterState::default()
		.with_term(" Dune ")
		.with_search_by(SearchBy::Title)
		.with_condition(Condition::StartsWith)
		.with_material_type(MaterialType::Books)
		.with_sort(SortKey::Newest)
		.with_page(2)
		.unwrap();

	let remote = compiler.compile(&state).unwrap().to_remote();
	assert_eq!(
		remote.to_string(),
		"material_type=eq.book&title=ilike.dune%&order=created_at.desc.nullsfirst&range=12-23"
	);
}

#[test]
fn blank_term_compiles_without_a_term_filter() {
	let compiler = QueryCompiler::new(SourceCapabilities::remote());
	let query = compiler
		.compile(&FilterState::default().with_term("   "))
		.unwrap();
	assert_eq!(query.term, None);
	assert!(query.to_remote().filters.is_empty());
}
