use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, PushdownArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `bookswap-search` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bookswap-search",
	version,
	long_version = long_version(),
	about = "Filter, sort and page the BookSwap listing catalogue",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "TERM",
		help = "Search term (default: empty, which matches every listing)"
	)]
	pub(crate) term: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BOOKSWAP_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "JSON listing export to search (default: listings.json in the data directory)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long,
		value_enum,
		help = "Where filtering runs: inside the store or in memory (default: remote)"
	)]
	pub(crate) pushdown: Option<PushdownArg>,
	#[arg(
		long = "no-subject",
		help = "Treat the store as having no subject field (default: disabled)"
	)]
	pub(crate) no_subject: bool,
	#[arg(
		short = 'b',
		long = "search-by",
		value_name = "FIELD",
		help = "Field to search: any, title, author, subject, isbn, genre (default: any)"
	)]
	pub(crate) search_by: Option<String>,
	#[arg(
		short = 'm',
		long,
		value_name = "MODE",
		help = "Match mode: contains, exact-phrase, starts-with (default: contains)"
	)]
	pub(crate) condition: Option<String>,
	#[arg(
		short = 't',
		long = "material-type",
		value_name = "TYPE",
		help = "Restrict to all, articles, books or journals (default: all)"
	)]
	pub(crate) material_type: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "ORDER",
		help = "Sort order: relevance, newest, price-asc, price-desc (default: relevance)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Page to show, starting at 1 (default: 1)"
	)]
	pub(crate) page: Option<u32>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Listings per page: 12, 24 or 48 (default: 12)"
	)]
	pub(crate) page_size: Option<u32>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Log more detail to stderr; repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
