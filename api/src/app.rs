use std::{fmt::Debug, sync::Arc};

use axum::{extract::DefaultBodyLimit, Router};
use sqlx::Pool;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
	bot::{ConversationStore, TelegramClient},
	prelude::*,
	routes,
	utils::config::AppConfig,
};

/// The state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
	/// The configuration the server was started with
	pub config: AppConfig,
	/// The connection pool to the database
	pub database: Pool<DatabaseType>,
	/// The in-progress bot conversations, keyed by chat ID
	pub conversations: ConversationStore,
	/// The client used to talk to the Telegram Bot API, if the bot is enabled
	pub telegram: Option<TelegramClient>,
}

impl AppState {
	/// Creates the state for a freshly started server
	pub fn new(config: AppConfig, database: Pool<DatabaseType>) -> Result<Self, reqwest::Error> {
		let telegram = config
			.telegram
			.as_ref()
			.map(TelegramClient::new)
			.transpose()?;
		Ok(Self {
			config,
			database,
			conversations: Arc::new(RwLock::new(Default::default())),
			telegram,
		})
	}
}

impl Debug for AppState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppState")
			.field("environment", &self.config.environment)
			.field("bind_addr", &self.config.bind_addr)
			.field("telegram", &self.telegram.is_some())
			.finish_non_exhaustive()
	}
}

/// Builds the router serving every route of the application
#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.merge(routes::setup_routes(state))
		.merge(crate::bot::setup_routes(state))
		.nest_service("/uploads", ServeDir::new(&state.config.upload.directory))
		.layer(DefaultBodyLimit::max(state.config.upload.max_size))
		.layer(CorsLayer::permissive())
		.layer(TraceLayer::new_for_http())
}

/// Binds to the configured address and serves the application until the
/// process is stopped
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
	let bind_addr = state.config.bind_addr;
	let router = setup_routes(&state);

	let listener = TcpListener::bind(bind_addr).await?;
	info!("Listening for connections on {}", bind_addr);

	axum::serve(listener, router)
		.with_graceful_shutdown(async {
			if let Err(error) = tokio::signal::ctrl_c().await {
				error!("Unable to listen for the shutdown signal: {}", error);
			}
			info!("Shutting down");
		})
		.await?;

	Ok(())
}
