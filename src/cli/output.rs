use anyhow::Result;
use bookswap_search::Listing;
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::workflow::SearchReport;

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;

/// Print a plain-text page of results.
pub(crate) fn print_plain(report: &SearchReport) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &SearchReport) -> String {
	let page = &report.page;
	let mut out = format!(
		"page {} of {}, {} {}\n",
		page.page,
		page.page_count(),
		page.total,
		if page.total == 1 { "result" } else { "results" }
	);

	if page.items.is_empty() {
		out.push_str("No results. Try a different term or broaden filters.\n");
		return out;
	}

	for listing in &page.items {
		out.push_str(&format_row(listing));
		out.push('\n');
	}
	out
}

fn format_row(listing: &Listing) -> String {
	format!(
		"{:<6} {:>9}  {}  {}  {}",
		listing.trade_type.as_str(),
		price_label(listing.price),
		fit(&listing.title, TITLE_WIDTH),
		fit(listing.author.as_deref().unwrap_or("-"), AUTHOR_WIDTH),
		listing.material_type.as_str(),
	)
}

fn price_label(price: Option<f64>) -> String {
	match price {
		Some(price) => format!("${price:.2}"),
		None => "n/a".to_string(),
	}
}

/// Pad or truncate `text` to exactly `width` terminal columns.
fn fit(text: &str, width: usize) -> String {
	let mut used = text.width();
	if used <= width {
		let mut padded = text.to_string();
		padded.extend(std::iter::repeat_n(' ', width - used));
		return padded;
	}

	let mut truncated = String::new();
	used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		truncated.push(ch);
		used += ch_width;
	}
	truncated.push('…');
	used += 1;
	truncated.extend(std::iter::repeat_n(' ', width - used));
	truncated
}

/// Format the search report as a JSON string.
pub(crate) fn format_report_json(report: &SearchReport) -> Result<String> {
	let filter = &report.filter;
	let payload = json!({
		"filter": {
			"term": filter.normalized_term(),
			"search_by": filter.search_by().id(),
			"condition": filter.condition().id(),
			"material_type": filter.material_type().id(),
			"sort": filter.sort().id(),
		},
		"page": report.page.page,
		"page_size": report.page.page_size.get(),
		"page_count": report.page.page_count(),
		"total": report.page.total,
		"items": report.page.items,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search report.
pub(crate) fn print_json(report: &SearchReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
