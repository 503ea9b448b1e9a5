use std::sync::Arc;

use axum::{
	body::Body,
	extract::{Path, State},
	http::{header, Method, Request, StatusCode},
	routing::post,
	Json,
	Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceExt;

use super::{init_tests, init_tests_with_config, test_config};
use crate::{
	app,
	bot::{START_COMMAND, WELCOME_TEXT},
	db::{self, MessageDirection},
	prelude::*,
	utils::config::TelegramConfig,
};

const BOT_TOKEN: &str = "123456:test-bot-token";

#[derive(Debug, PartialEq, Eq, sqlx::FromRow)]
struct StoredTelegramUser {
	telegram_id: i64,
	username: Option<String>,
	first_name: Option<String>,
	last_name: Option<String>,
	first_seen: i64,
	last_seen: i64,
}

async fn get_telegram_users(connection: &mut DatabaseConnection) -> Vec<StoredTelegramUser> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			telegram_user
		ORDER BY
			telegram_id;
		"#,
	)
	.fetch_all(&mut *connection)
	.await
	.unwrap()
}

async fn get_telegram_messages(connection: &mut DatabaseConnection) -> Vec<(i64, String, String)> {
	sqlx::query_as(
		r#"
		SELECT
			telegram_id,
			message,
			direction
		FROM
			telegram_message
		ORDER BY
			id;
		"#,
	)
	.fetch_all(&mut *connection)
	.await
	.unwrap()
}

type SentRequests = Arc<Mutex<Vec<(String, Value)>>>;

/// Serves a stand-in for the Bot API that accepts every call, and returns its
/// base URL along with the calls it received
async fn start_bot_api() -> (String, SentRequests) {
	async fn accept(
		State(sent): State<SentRequests>,
		Path((_, method)): Path<(String, String)>,
		Json(body): Json<Value>,
	) -> Json<Value> {
		sent.lock().await.push((method, body));
		Json(json!({ "ok": true, "result": { "message_id": 1 } }))
	}

	let sent = SentRequests::default();
	let router = Router::new()
		.route("/:bot/:method", post(accept))
		.with_state(sent.clone());
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let address = listener.local_addr().unwrap();
	tokio::spawn(async move { axum::serve(listener, router).await });

	(format!("http://{address}"), sent)
}

fn update(update_id: i64, username: &str, text: &str) -> Value {
	json!({
		"update_id": update_id,
		"message": {
			"message_id": update_id,
			"date": 1700000000,
			"chat": { "id": 42, "type": "private" },
			"from": {
				"id": 42,
				"is_bot": false,
				"first_name": "Ann",
				"last_name": "Lee",
				"username": username
			},
			"text": text
		}
	})
}

async fn post_update(router: &Router, path: &str, body: &Value) -> StatusCode {
	let request = Request::builder()
		.method(Method::POST)
		.uri(path)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap();
	router.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn repeat_senders_are_refreshed() {
	let state = init_tests().await.unwrap();
	let mut connection = state.database.acquire().await.unwrap();

	db::upsert_telegram_user(&mut connection, 7, Some("ann"), Some("Ann"), None, 100)
		.await
		.unwrap();
	db::upsert_telegram_user(
		&mut connection,
		7,
		Some("ann_lee"),
		Some("Ann"),
		Some("Lee"),
		250,
	)
	.await
	.unwrap();

	assert_eq!(
		get_telegram_users(&mut connection).await,
		vec![StoredTelegramUser {
			telegram_id: 7,
			username: Some("ann_lee".to_string()),
			first_name: Some("Ann".to_string()),
			last_name: Some("Lee".to_string()),
			first_seen: 100,
			last_seen: 250,
		}]
	);
}

#[tokio::test]
async fn messages_are_logged_in_both_directions() {
	let state = init_tests().await.unwrap();
	let mut connection = state.database.acquire().await.unwrap();

	db::add_telegram_message(&mut connection, 7, "/start", MessageDirection::Incoming, 100)
		.await
		.unwrap();
	db::add_telegram_message(&mut connection, 7, "Welcome", MessageDirection::Outgoing, 101)
		.await
		.unwrap();

	assert_eq!(
		get_telegram_messages(&mut connection).await,
		vec![
			(7, "/start".to_string(), "in".to_string()),
			(7, "Welcome".to_string(), "out".to_string()),
		]
	);
}

#[tokio::test]
async fn webhook_updates_are_answered_and_recorded() {
	let (api_base_url, sent) = start_bot_api().await;
	let mut config = test_config();
	config.telegram = Some(TelegramConfig {
		token: BOT_TOKEN.to_string(),
		api_base_url,
		webhook_url: None,
	});
	let state = init_tests_with_config(config).await.unwrap();
	let router = app::setup_routes(&state);
	let webhook = format!("/bot{BOT_TOKEN}");

	assert_eq!(
		post_update(&router, &webhook, &update(1, "ann", START_COMMAND)).await,
		StatusCode::OK
	);
	assert_eq!(
		post_update(&router, &webhook, &update(2, "ann_lee", "Ann Lee")).await,
		StatusCode::OK
	);

	let sent = sent.lock().await;
	assert_eq!(sent.len(), 2);
	assert_eq!(sent[0].0, "sendMessage");
	assert_eq!(sent[0].1, json!({ "chat_id": 42, "text": WELCOME_TEXT }));
	drop(sent);

	let mut connection = state.database.acquire().await.unwrap();
	let messages = get_telegram_messages(&mut connection).await;
	let directions = messages
		.iter()
		.map(|(telegram_id, message, direction)| (*telegram_id, message.as_str(), direction.as_str()))
		.collect::<Vec<_>>();
	assert_eq!(directions.len(), 4);
	assert_eq!(directions[0], (42, START_COMMAND, "in"));
	assert_eq!(directions[1], (42, WELCOME_TEXT, "out"));
	assert_eq!(directions[2], (42, "Ann Lee", "in"));
	assert_eq!(directions[3].2, "out");

	let users = get_telegram_users(&mut connection).await;
	assert_eq!(users.len(), 1);
	assert_eq!(users[0].telegram_id, 42);
	assert_eq!(users[0].username.as_deref(), Some("ann_lee"));
	assert!(users[0].last_seen >= users[0].first_seen);
}

#[tokio::test]
async fn updates_to_other_paths_are_rejected() {
	let (api_base_url, sent) = start_bot_api().await;
	let mut config = test_config();
	config.telegram = Some(TelegramConfig {
		token: BOT_TOKEN.to_string(),
		api_base_url,
		webhook_url: None,
	});
	let state = init_tests_with_config(config).await.unwrap();
	let router = app::setup_routes(&state);

	assert_eq!(
		post_update(&router, "/bot123456:wrong-token", &update(1, "ann", START_COMMAND)).await,
		StatusCode::NOT_FOUND
	);
	assert!(sent.lock().await.is_empty());

	let mut connection = state.database.acquire().await.unwrap();
	assert!(get_telegram_messages(&mut connection).await.is_empty());
}
