//! Log output for the `bookswap-search` binary.
//!
//! Library code logs through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter on stderr, which also picks up `log` records.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use tracing_subscriber::filter::LevelFilter as SubscriberLevel;

/// Level used when neither `-v` nor configuration asks for one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Pick the effective level. Each `-v` raises the configured level by one step.
pub fn level_for(verbosity: u8, configured: Option<LevelFilter>) -> LevelFilter {
	let base = configured.unwrap_or(DEFAULT_LEVEL);
	let mut level = base;
	for _ in 0..verbosity {
		level = match level {
			LevelFilter::Off => LevelFilter::Error,
			LevelFilter::Error => LevelFilter::Warn,
			LevelFilter::Warn => LevelFilter::Info,
			LevelFilter::Info => LevelFilter::Debug,
			LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
		};
	}
	level
}

/// Install the stderr subscriber. Fails if one is already installed.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_max_level(subscriber_level(level))
		.try_init()
		.map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

fn subscriber_level(level: LevelFilter) -> SubscriberLevel {
	match level {
		LevelFilter::Off => SubscriberLevel::OFF,
		LevelFilter::Error => SubscriberLevel::ERROR,
		LevelFilter::Warn => SubscriberLevel::WARN,
		LevelFilter::Info => SubscriberLevel::INFO,
		LevelFilter::Debug => SubscriberLevel::DEBUG,
		LevelFilter::Trace => SubscriberLevel::TRACE,
	}
}
