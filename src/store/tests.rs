use std::io::Write;

use super::*;
use crate::api::{MaterialKind, RowRange, TradeType};

const LISTINGS: &str = r#"[
	{"id": 1, "title": "Calculus", "author": "Stewart", "subject": "Mathematics",
	 "material_type": "book", "trade_type": "buy", "price": 40.0},
	{"id": 2, "title": "Nature Weekly", "material_type": "journal", "trade_type": "borrow"},
	{"id": "a-3", "title": "On Computable Numbers", "author": "Turing", "subject": "Computing",
	 "material_type": "article", "trade_type": "trade", "price": 5.5}
]"#;

fn store(capabilities: SourceCapabilities) -> ListingStore {
	ListingStore::from_json_str(LISTINGS, capabilities).unwrap()
}

fn titles(response: &QueryResponse) -> Vec<&str> {
	response
		.items
		.iter()
		.map(|listing| listing.title.as_str())
		.collect()
}

#[test]
fn loads_listings_from_a_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(LISTINGS.as_bytes()).unwrap();

	let store = ListingStore::from_path(file.path(), SourceCapabilities::remote()).unwrap();
	assert_eq!(store.len(), 3);
	assert_eq!(store.listings()[2].id.to_string(), "a-3");
	assert_eq!(store.listings()[1].material_type, MaterialKind::Journal);
	assert_eq!(store.listings()[1].trade_type, TradeType::Borrow);
}

#[test]
fn missing_file_is_a_transport_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = ListingStore::from_path(&dir.path().join("absent.json"), SourceCapabilities::remote())
		.unwrap_err();
	assert!(matches!(err, SourceError::Transport(_)));
}

#[test]
fn invalid_json_is_malformed() {
	let err = ListingStore::from_json_str("{\"id\": 1}", SourceCapabilities::remote()).unwrap_err();
	assert!(matches!(err, SourceError::Malformed(_)));
}

#[test]
fn subjects_are_hidden_without_the_capability() {
	let store = store(SourceCapabilities::remote().with_subject(false));
	assert!(store.listings().iter().all(|listing| listing.subject.is_none()));
}

#[test]
fn memory_only_store_refuses_pushed_down_queries() {
	let store = store(SourceCapabilities::memory_only());
	let ctx = QueryContext::detached();

	let err = store
		.query(&RemoteQuery::all(RowRange::new(0, 12)), &ctx)
		.unwrap_err();
	assert_eq!(err, SourceError::Unsupported("pushed-down queries"));
	assert_eq!(store.snapshot(&ctx).unwrap().len(), 3);
}

#[test]
fn any_of_group_matches_any_column() {
	let store = store(SourceCapabilities::remote());
	let query = RemoteQuery {
		filters: vec![Filter::AnyOf(vec![
			Filter::Ilike {
				column: Column::Title,
				pattern: "%turing%".into(),
			},
			Filter::Ilike {
				column: Column::Author,
				pattern: "%turing%".into(),
			},
		])],
		..RemoteQuery::all(RowRange::new(0, 12))
	};

	let response = store.query(&query, &QueryContext::detached()).unwrap();
	assert_eq!(titles(&response), ["On Computable Numbers"]);
	assert_eq!(response.total, 1);
}

#[test]
fn order_places_missing_values_as_requested() {
	let store = store(SourceCapabilities::remote());
	let mut order = OrderBy {
		column: Column::Price,
		ascending: false,
		nulls_first: true,
	};
	let query = |order: OrderBy| RemoteQuery {
		order: Some(order),
		..RemoteQuery::all(RowRange::new(0, 12))
	};
	let ctx = QueryContext::detached();

	let response = store.query(&query(order), &ctx).unwrap();
	assert_eq!(
		titles(&response),
		["Nature Weekly", "Calculus", "On Computable Numbers"]
	);

	order.nulls_first = false;
	order.ascending = true;
	let response = store.query(&query(order), &ctx).unwrap();
	assert_eq!(
		titles(&response),
		["On Computable Numbers", "Calculus", "Nature Weekly"]
	);
}

#[test]
fn range_slices_after_counting() {
	let store = store(SourceCapabilities::remote());
	let ctx = QueryContext::detached();

	let response = store
		.query(&RemoteQuery::all(RowRange::new(1, 2)), &ctx)
		.unwrap();
	assert_eq!(titles(&response), ["Nature Weekly"]);
	assert_eq!(response.total, 3);

	let past_end = store
		.query(&RemoteQuery::all(RowRange::new(12, 24)), &ctx)
		.unwrap();
	assert!(past_end.items.is_empty());
	assert_eq!(past_end.total, 3);
}
