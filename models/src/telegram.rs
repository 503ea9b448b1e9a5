use serde::{Deserialize, Serialize};

/// An incoming update delivered to the bot's webhook. Only message updates are
/// of interest, every other kind of update is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Update {
	/// The update's unique identifier
	pub update_id: i64,
	/// The new incoming message, if this update is one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<Message>,
}

/// A message sent to the bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
	/// Unique message identifier inside the chat
	pub message_id: i64,
	/// The sender of the message. Empty for messages sent to channels
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from: Option<User>,
	/// The chat the message belongs to
	pub chat: Chat,
	/// The date the message was sent, as a unix timestamp
	pub date: i64,
	/// The text of the message, if it is a text message
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

/// A Telegram user or bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
	/// Unique identifier of the user
	pub id: i64,
	/// Whether the user is a bot
	#[serde(default)]
	pub is_bot: bool,
	/// The user's first name
	pub first_name: String,
	/// The user's last name
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	/// The user's username
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
}

/// A chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
	/// Unique identifier of the chat
	pub id: i64,
	/// The type of chat, such as `private` or `group`
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
}

/// The body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
	/// The chat to send the message to
	pub chat_id: i64,
	/// The text of the message
	pub text: String,
}

/// The body of a `setWebhook` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetWebhookRequest {
	/// The HTTPS URL Telegram should deliver updates to
	pub url: String,
}

/// The envelope every Bot API method responds with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotApiResponse<T> {
	/// Whether the call succeeded
	pub ok: bool,
	/// The result of the call, if it succeeded
	#[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
	pub result: Option<T>,
	/// A human readable description of the failure, if it failed
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::{BotApiResponse, Update};

	#[test]
	fn parses_a_text_message_update() {
		let update: Update = serde_json::from_str(
			r#"{
				"update_id": 10000,
				"message": {
					"message_id": 1365,
					"date": 1441645532,
					"chat": { "id": 1111111, "type": "private", "first_name": "Test" },
					"from": { "id": 1111111, "is_bot": false, "first_name": "Test", "username": "test" },
					"text": "/start"
				}
			}"#,
		)
		.expect("valid update");
		let message = update.message.expect("message update");
		assert_eq!(message.chat.id, 1111111);
		assert_eq!(message.text.as_deref(), Some("/start"));
		assert_eq!(
			message.from.and_then(|user| user.username).as_deref(),
			Some("test")
		);
	}

	#[test]
	fn ignores_non_message_updates() {
		let update: Update = serde_json::from_str(
			r#"{ "update_id": 2, "edited_message": { "message_id": 1 } }"#,
		)
		.expect("valid update");
		assert!(update.message.is_none());
	}

	#[test]
	fn parses_failed_api_responses() {
		let response: BotApiResponse<bool> =
			serde_json::from_str(r#"{ "ok": false, "description": "Unauthorized" }"#)
				.expect("valid response");
		assert!(!response.ok);
		assert_eq!(response.result, None);
		assert_eq!(response.description.as_deref(), Some("Unauthorized"));
	}
}
