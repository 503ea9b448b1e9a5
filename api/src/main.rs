//! The Sophor API server. Serves the user, role and permission management API
//! along with the webhook of the Telegram intake bot.

#![forbid(unsafe_code)]

/// The application state and the HTTP server
mod app;
/// The Telegram intake bot
mod bot;
/// All database queries and the schema
mod db;
/// All the routes of the API
mod routes;
/// Business logic shared between routes
mod service;
/// Configuration, logging, extractors and other utilities
mod utils;

#[cfg(test)]
mod test;

/// The prelude module contains all the commonly used types and traits that are
/// used across the crate. This is mostly used to avoid having to import a lot
/// of things from different modules.
pub mod prelude {
	pub use models::prelude::*;
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::{
		app::AppState,
		db::{DatabaseConnection, DatabaseType},
		utils::{constants, extractors::*, RouterExt},
	};
}

use crate::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = utils::config::parse_config()?;

	utils::logger::initialize(&config)?;
	info!(
		"Configuration read. Running environment set to {}",
		config.environment
	);

	let database = db::connect(&config.database).await?;
	debug!("Database connection pool established");

	db::initialize(&database).await?;
	debug!("Database initialized");

	let state = AppState::new(config, database)?;
	service::initialize_bootstrap_user(&state).await?;

	if let Some(client) = &state.telegram {
		bot::register_webhook(client, state.config.telegram.as_ref()).await;
	}

	app::start_server(state).await
}
