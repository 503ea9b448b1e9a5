use tracing::Level;
use tracing_subscriber::{
	filter::{LevelFilter, Targets},
	fmt::{format::FmtSpan, Layer as FmtLayer},
	prelude::*,
	util::TryInitError,
};

use super::config::{AppConfig, RunningEnvironment};

/// Installs the global tracing subscriber. Everything the API and its models
/// log is shown, along with the request spans of `tower_http`.
pub fn initialize(config: &AppConfig) -> Result<(), TryInitError> {
	tracing_subscriber::registry()
		.with(
			FmtLayer::new()
				.with_span_events(FmtSpan::NONE)
				.event_format(
					tracing_subscriber::fmt::format()
						.with_ansi(true)
						.with_file(false)
						.compact(),
				)
				.with_filter(
					Targets::new()
						.with_target("sophor_api", LevelFilter::TRACE)
						.with_target("sophor_models", LevelFilter::TRACE)
						.with_target("tower_http", LevelFilter::DEBUG),
				)
				.with_filter(LevelFilter::from_level(
					if config.environment == RunningEnvironment::Development {
						Level::TRACE
					} else {
						Level::DEBUG
					},
				)),
		)
		.try_init()
}
