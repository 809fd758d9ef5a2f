use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let filter = &config.filter;
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(match &config.data_path {
		Some(path) => format!("  Listing data: {}", path.display()),
		None => "  Listing data: (data directory default)".to_string(),
	});
	lines.push(format!("  Pushdown: {}", config.capabilities.pushdown));
	lines.push(format!(
		"  Subject field: {}",
		bool_to_word(config.capabilities.subject)
	));
	if !filter.normalized_term().is_empty() {
		lines.push(format!("  Term: {}", filter.normalized_term()));
	}
	lines.push(format!("  Search by: {}", filter.search_by().label()));
	lines.push(format!("  Condition: {}", filter.condition().label()));
	lines.push(format!("  Material type: {}", filter.material_type().label()));
	lines.push(format!("  Sort: {}", filter.sort().label()));
	lines.push(format!(
		"  Page: {} ({} per page)",
		filter.page(),
		filter.page_size().get()
	));
	lines.push(format!("  Debounce: {} ms", config.debounce.as_millis()));
	lines.push(format!(
		"  Wait timeout: {} ms",
		config.wait_timeout.as_millis()
	));
	lines.push(format!(
		"  Log level: {}",
		config
			.log_level
			.map(|level| level.as_str().to_lowercase())
			.unwrap_or_else(|| "(default)".to_string())
	));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
