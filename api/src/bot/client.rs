use std::{fmt::Debug, time::Duration};

use anyhow::{bail, Context};
use models::telegram::{BotApiResponse, SendMessageRequest, SetWebhookRequest};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::{prelude::*, utils::config::TelegramConfig};

/// A client for the few Telegram Bot API methods the bot needs
#[derive(Clone)]
pub struct TelegramClient {
	client: Client,
	/// `<api base url>/bot<token>`
	base_url: String,
}

impl Debug for TelegramClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TelegramClient").finish_non_exhaustive()
	}
}

impl TelegramClient {
	pub fn new(config: &TelegramConfig) -> Result<Self, reqwest::Error> {
		Ok(Self {
			client: Client::builder().timeout(Duration::from_secs(30)).build()?,
			base_url: format!(
				"{}/bot{}",
				config.api_base_url.trim_end_matches('/'),
				config.token
			),
		})
	}

	/// Calls a Bot API method. The request URL carries the bot token, so it is
	/// stripped from any transport error before that error is returned.
	async fn call<B, R>(&self, method: &str, body: &B) -> anyhow::Result<R>
	where
		B: Serialize,
		R: DeserializeOwned,
	{
		let response = self
			.client
			.post(format!("{}/{}", self.base_url, method))
			.json(body)
			.send()
			.await
			.map_err(reqwest::Error::without_url)
			.with_context(|| format!("unable to call `{method}`"))?
			.json::<BotApiResponse<R>>()
			.await
			.map_err(reqwest::Error::without_url)
			.with_context(|| format!("unable to parse the response of `{method}`"))?;

		if !response.ok {
			bail!(
				"`{}` failed: {}",
				method,
				response.description.unwrap_or_default()
			);
		}

		response
			.result
			.with_context(|| format!("`{method}` returned no result"))
	}

	#[instrument(skip(self, text))]
	pub async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
		self.call::<_, serde_json::Value>(
			"sendMessage",
			&SendMessageRequest {
				chat_id,
				text: text.to_string(),
			},
		)
		.await
		.map(|_| ())
	}

	#[instrument(skip(self, url))]
	pub async fn set_webhook(&self, url: &str) -> anyhow::Result<()> {
		self.call::<_, bool>(
			"setWebhook",
			&SetWebhookRequest {
				url: url.to_string(),
			},
		)
		.await
		.map(|_| ())
	}
}
