use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use axum::{
	extract::{Path, State},
	http::StatusCode,
	routing::post,
	Json,
	Router,
};
use models::telegram::{Message, Update};
use tokio::sync::RwLock;

use crate::{
	db::{self, MessageDirection},
	prelude::*,
	service,
	utils::config::TelegramConfig,
};

mod client;
mod conversation;

pub use self::{client::*, conversation::*};

/// The in-progress conversations, keyed by chat ID. A conversation is added
/// on the first message of a chat and removed once it finishes.
pub type ConversationStore = Arc<RwLock<HashMap<i64, Conversation>>>;

/// Mounts the webhook Telegram delivers updates to. Nothing is mounted if the
/// bot is not configured.
///
/// Bot tokens contain a `:`, which the router would read as a parameter, so
/// the webhook is mounted on a single parameter and matched against the token
/// in the handler.
#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	if state.config.telegram.is_none() {
		info!("Telegram is not configured, the bot is disabled");
		return Router::new();
	}

	Router::new()
		.route("/:webhook", post(handle_update))
		.with_state(state.clone())
}

/// The path segment Telegram posts updates to, without the leading slash
fn webhook_path(config: &TelegramConfig) -> String {
	format!("bot{}", config.token)
}

/// Points Telegram at this server's webhook, if a public URL is configured.
/// Failures are logged, the server keeps running without updates.
pub async fn register_webhook(client: &TelegramClient, config: Option<&TelegramConfig>) {
	let Some(config) = config else {
		return;
	};
	let Some(webhook_url) = &config.webhook_url else {
		debug!("No webhook URL configured, not registering the webhook");
		return;
	};

	let url = format!(
		"{}/{}",
		webhook_url.trim_end_matches('/'),
		webhook_path(config)
	);
	match client.set_webhook(&url).await {
		Ok(()) => info!("Telegram webhook registered"),
		Err(error) => error!("Unable to register the Telegram webhook: {:?}", error),
	}
}

async fn handle_update(
	State(state): State<AppState>,
	Path(webhook): Path<String>,
	Json(update): Json<Update>,
) -> StatusCode {
	let is_webhook = state
		.config
		.telegram
		.as_ref()
		.is_some_and(|config| webhook_path(config) == webhook);
	if !is_webhook {
		return StatusCode::NOT_FOUND;
	}

	trace!("Telegram update `{}` received", update.update_id);

	let Some(message) = update.message else {
		return StatusCode::OK;
	};

	match handle_message(&state, &message).await {
		Ok(()) => StatusCode::OK,
		Err(error) => {
			error!(
				"Unable to handle message in chat `{}`: {:?}",
				message.chat.id, error
			);
			if let Some(client) = &state.telegram {
				if let Err(error) = client.send_message(message.chat.id, APOLOGY_TEXT).await {
					error!("Unable to apologise in chat `{}`: {:?}", message.chat.id, error);
				}
			}
			StatusCode::INTERNAL_SERVER_ERROR
		}
	}
}

/// Records the message and its sender, advances the chat's conversation and
/// sends the reply
async fn handle_message(state: &AppState, message: &Message) -> anyhow::Result<()> {
	let chat_id = message.chat.id;
	let telegram_id = message.from.as_ref().map_or(chat_id, |user| user.id);
	let text = message.text.as_deref().unwrap_or_default();

	let mut connection = state.database.acquire().await?;

	let now = service::get_current_time();
	if let Some(user) = &message.from {
		db::upsert_telegram_user(
			&mut connection,
			user.id,
			user.username.as_deref(),
			Some(user.first_name.as_str()),
			user.last_name.as_deref(),
			now,
		)
		.await?;
	}
	db::add_telegram_message(
		&mut connection,
		telegram_id,
		text,
		MessageDirection::Incoming,
		now,
	)
	.await?;

	let reply = advance_conversation(&state.conversations, chat_id, text).await;

	state
		.telegram
		.as_ref()
		.context("the Telegram client is not configured")?
		.send_message(chat_id, &reply.text)
		.await?;

	db::add_telegram_message(
		&mut connection,
		telegram_id,
		&reply.text,
		MessageDirection::Outgoing,
		service::get_current_time(),
	)
	.await?;

	Ok(())
}

/// Runs the conversation of a chat one step, dropping it once it is over
pub async fn advance_conversation(conversations: &ConversationStore, chat_id: i64, text: &str) -> Reply {
	let mut conversations = conversations.write().await;

	let reply = conversations.entry(chat_id).or_default().handle(text);
	if reply.finished {
		conversations.remove(&chat_id);
	}

	reply
}
