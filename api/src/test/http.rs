use std::collections::BTreeSet;

use axum::{
	body::{to_bytes, Body},
	http::{header, Method, Request, StatusCode},
	Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{create_test_user, init_tests, TEST_PASSWORD};
use crate::{app, db, prelude::*, service};

/// Sends a request to the router and returns the status along with the JSON
/// body. Bodies that are not JSON come back as a JSON string.
async fn send(
	router: &Router,
	method: Method,
	uri: &str,
	token: Option<&str>,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let mut request = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::HOST, "sophor.test");
	if let Some(token) = token {
		request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
	}
	let request = match body {
		Some(body) => request
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string())),
		None => request.body(Body::empty()),
	}
	.unwrap();

	let response = router.clone().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	let body = serde_json::from_slice(&bytes)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

	(status, body)
}

/// Creates a user holding the admin role and returns their ID and an access
/// token for them
async fn create_admin(state: &AppState) -> (i64, String) {
	let user_id = create_test_user(state, "admin@example.com").await.unwrap();
	let mut connection = state.database.acquire().await.unwrap();
	let admin = db::get_role_by_name(&mut connection, constants::ADMIN_ROLE_NAME)
		.await
		.unwrap()
		.expect("admin role exists");
	db::add_role_to_user(&mut connection, user_id, admin.id)
		.await
		.unwrap();
	let (access_token, _) = service::issue_token_pair(user_id, &state.config.jwt).unwrap();
	(user_id, access_token)
}

#[tokio::test]
async fn health_check() {
	let state = init_tests().await.unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(&router, Method::GET, "/", None, None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!("Sophor Telegram Bot is running 🚀"));
}

#[tokio::test]
async fn requests_without_a_token_are_unauthenticated() {
	let state = init_tests().await.unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(&router, Method::GET, "/api/users", None, None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["success"], json!(false));
	assert_eq!(body["error"], json!("unauthenticated"));

	let (status, body) = send(&router, Method::GET, "/api/users", Some("garbage"), None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], json!("malformedAccessToken"));
}

#[tokio::test]
async fn requests_without_the_permission_are_forbidden() {
	let state = init_tests().await.unwrap();
	let user_id = create_test_user(&state, "plain@example.com").await.unwrap();
	let (token, _) = service::issue_token_pair(user_id, &state.config.jwt).unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(&router, Method::GET, "/api/roles", Some(&token), None).await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body["error"], json!("forbidden"));
}

#[tokio::test]
async fn malformed_ids_are_checked_after_the_caller() {
	let state = init_tests().await.unwrap();
	let (_, admin_token) = create_admin(&state).await;
	let user_id = create_test_user(&state, "plain@example.com").await.unwrap();
	let (plain_token, _) = service::issue_token_pair(user_id, &state.config.jwt).unwrap();
	let router = app::setup_routes(&state);

	for uri in ["/api/users/abc", "/api/roles/abc", "/api/permissions/abc"] {
		let (status, body) = send(&router, Method::DELETE, uri, None, None).await;
		assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
		assert_eq!(body["error"], json!("unauthenticated"), "{uri}");
	}

	let (status, _) = send(&router, Method::GET, "/api/roles/abc", Some(&plain_token), None).await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let (status, _) = send(&router, Method::GET, "/api/roles/abc", Some(&admin_token), None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tokens_of_deleted_users_are_rejected() {
	let state = init_tests().await.unwrap();
	let (_, admin_token) = create_admin(&state).await;
	let user_id = create_test_user(&state, "gone@example.com").await.unwrap();
	let (token, _) = service::issue_token_pair(user_id, &state.config.jwt).unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(
		&router,
		Method::DELETE,
		&format!("/api/users/{user_id}"),
		Some(&admin_token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "success": true }));

	let (status, body) = send(&router, Method::GET, "/api/users", Some(&token), None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], json!("authorizationTokenInvalid"));
}

#[tokio::test]
async fn assignments_to_unknown_entities_are_not_found() {
	let state = init_tests().await.unwrap();
	let (_, token) = create_admin(&state).await;
	let router = app::setup_routes(&state);

	for (uri, body) in [
		("/api/users/999/roles", json!({ "roleIds": [1] })),
		("/api/users/999/permissions", json!({ "permissionIds": [1] })),
		("/api/roles/999/permissions", json!({ "permissionIds": [1] })),
	] {
		let (status, body) = send(&router, Method::PUT, uri, Some(&token), Some(body)).await;
		assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
		assert_eq!(body["error"], json!("resourceDoesNotExist"));
	}
}

#[tokio::test]
async fn role_assignment_round_trip() {
	let state = init_tests().await.unwrap();
	let (_, token) = create_admin(&state).await;
	let user_id = create_test_user(&state, "editor@example.com").await.unwrap();
	let router = app::setup_routes(&state);

	let (status, role) = send(
		&router,
		Method::POST,
		"/api/roles",
		Some(&token),
		Some(json!({ "name": "editor", "description": "Edits users" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	let role_id = role["id"].as_i64().unwrap();

	let (status, _) = send(
		&router,
		Method::POST,
		"/api/roles",
		Some(&token),
		Some(json!({ "name": "editor" })),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);

	let (_, permissions) = send(
		&router,
		Method::GET,
		"/api/permissions?search=_user&ordering=code",
		Some(&token),
		None,
	)
	.await;
	let permission_ids = permissions["data"]
		.as_array()
		.unwrap()
		.iter()
		.filter(|permission| {
			permission["code"] == json!("edit_user") || permission["code"] == json!("view_user")
		})
		.map(|permission| permission["id"].clone())
		.collect::<Vec<_>>();
	assert_eq!(permission_ids.len(), 2);

	let (status, role) = send(
		&router,
		Method::PUT,
		&format!("/api/roles/{role_id}/permissions"),
		Some(&token),
		Some(json!({ "permissionIds": permission_ids })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(role["permissions"].as_array().unwrap().len(), 2);

	let (status, user) = send(
		&router,
		Method::PUT,
		&format!("/api/users/{user_id}/roles"),
		Some(&token),
		Some(json!({ "roleIds": [role_id, role_id] })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(user["roles"].as_array().unwrap().len(), 1);

	let (status, effective) = send(
		&router,
		Method::GET,
		&format!("/api/users/{user_id}/effective-permissions"),
		Some(&token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(effective["permissions"], json!(["edit_user", "view_user"]));
	assert_eq!(effective["roles"][0]["name"], json!("editor"));
}

#[tokio::test]
async fn users_are_paginated() {
	let state = init_tests().await.unwrap();
	let (_, token) = create_admin(&state).await;
	for email in ["b@example.com", "c@example.com"] {
		create_test_user(&state, email).await.unwrap();
	}
	let router = app::setup_routes(&state);

	let (status, page) = send(
		&router,
		Method::GET,
		"/api/users?page=2&page_size=1&ordering=-email",
		Some(&token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(page["count"], json!(3));
	assert_eq!(page["total_pages"], json!(3));
	assert_eq!(page["current_page"], json!(2));
	assert_eq!(page["data"][0]["email"], json!("b@example.com"));
	assert_eq!(
		page["next"],
		json!("http://sophor.test/api/users?page=3&page_size=1&ordering=-email")
	);
	assert_eq!(
		page["previous"],
		json!("http://sophor.test/api/users?page=1&page_size=1&ordering=-email")
	);
	assert!(page["data"][0].get("password").is_none());

	let (status, body) = send(
		&router,
		Method::GET,
		"/api/users?ordering=password",
		Some(&token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("wrongParameters"));
}

#[tokio::test]
async fn login_and_refresh() {
	let state = init_tests().await.unwrap();
	let user_id = create_test_user(&state, "ann@example.com").await.unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/login",
		None,
		Some(json!({ "email": " Ann@Example.com ", "password": TEST_PASSWORD })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], json!(user_id));
	assert_eq!(body["email"], json!("ann@example.com"));
	assert_eq!(body["permissions"], json!([]));
	let access_token = body["accessToken"].as_str().unwrap().to_string();
	let refresh_token = body["refreshToken"].as_str().unwrap().to_string();
	assert_eq!(
		service::verify_access_token(&access_token, &state.config.jwt),
		Ok(user_id)
	);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/refresh-token",
		None,
		Some(json!({ "token": refresh_token })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	let refreshed = body["accessToken"].as_str().unwrap();
	assert_eq!(
		service::verify_access_token(refreshed, &state.config.jwt),
		Ok(user_id)
	);

	let (status, _) = send(
		&router,
		Method::POST,
		"/api/auth/refresh-token",
		None,
		Some(json!({ "token": access_token })),
	)
	.await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);

	let (status, _) = send(&router, Method::POST, "/api/auth/refresh-token", None, Some(json!({}))).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_failures() {
	let state = init_tests().await.unwrap();
	create_test_user(&state, "ann@example.com").await.unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/login",
		None,
		Some(json!({ "email": "ann@example.com", "password": "wrong password" })),
	)
	.await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], json!("invalidPassword"));

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/login",
		None,
		Some(json!({ "email": "bob@example.com", "password": TEST_PASSWORD })),
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("userNotFound"));
}

#[tokio::test]
async fn password_reset() {
	let state = init_tests().await.unwrap();
	let user_id = create_test_user(&state, "ann@example.com").await.unwrap();
	let router = app::setup_routes(&state);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/forgot-password",
		None,
		Some(json!({ "email": "ann@example.com" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		json!({ "success": true, "message": "Reset link sent (simulate email)" })
	);

	// The issued token is never returned, so plant a known one
	let (token, token_hash) = service::generate_reset_token();
	{
		let mut connection = state.database.acquire().await.unwrap();
		let user = db::get_user_by_id(&mut connection, user_id)
			.await
			.unwrap()
			.unwrap();
		assert!(user.reset_token_hash.is_some());
		db::set_password_reset_token(
			&mut connection,
			user_id,
			&token_hash,
			service::get_current_time() + 60,
		)
		.await
		.unwrap();
	}

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/reset-password",
		None,
		Some(json!({ "token": token, "newPassword": "a brand new password" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["message"], json!("Password reset successful"));

	// Tokens are single use
	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/reset-password",
		None,
		Some(json!({ "token": token, "newPassword": "another new password" })),
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("invalidResetToken"));

	let (status, _) = send(
		&router,
		Method::POST,
		"/api/auth/login",
		None,
		Some(json!({ "email": "ann@example.com", "password": "a brand new password" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn expired_reset_tokens_are_rejected() {
	let state = init_tests().await.unwrap();
	let user_id = create_test_user(&state, "ann@example.com").await.unwrap();
	let (token, token_hash) = service::generate_reset_token();
	{
		let mut connection = state.database.acquire().await.unwrap();
		db::set_password_reset_token(
			&mut connection,
			user_id,
			&token_hash,
			service::get_current_time() - 1,
		)
		.await
		.unwrap();
	}
	let router = app::setup_routes(&state);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/auth/reset-password",
		None,
		Some(json!({ "token": token, "newPassword": "a brand new password" })),
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("invalidResetToken"));
}

const BOUNDARY: &str = "sophor-test-boundary";

fn register_form(fields: &[(&str, &str)], avatar: Option<&[u8]>) -> Body {
	let mut body = Vec::new();
	for (name, value) in fields {
		body.extend_from_slice(
			format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
			)
			.as_bytes(),
		);
	}
	if let Some(avatar) = avatar {
		body.extend_from_slice(
			format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"avatar\"; filename=\"me.PNG\"\r\nContent-Type: image/png\r\n\r\n"
			)
			.as_bytes(),
		);
		body.extend_from_slice(avatar);
		body.extend_from_slice(b"\r\n");
	}
	body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
	Body::from(body)
}

async fn register(router: &Router, form: Body) -> (StatusCode, Value) {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/auth/register")
		.header(
			header::CONTENT_TYPE,
			format!("multipart/form-data; boundary={BOUNDARY}"),
		)
		.body(form)
		.unwrap();
	let response = router.clone().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	(status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn registration() {
	let state = init_tests().await.unwrap();
	let router = app::setup_routes(&state);
	let fields = [
		("first_name", "Ann"),
		("last_name", "Lee"),
		("phone", "+85512345678"),
		("email", "Ann@Example.com"),
		("password", "long enough password"),
	];

	let (status, body) = register(&router, register_form(&fields, None)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("avatarRequired"));

	let (status, body) = register(&router, register_form(&fields, Some(b"not really a png"))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["email"], json!("ann@example.com"));
	assert!(body["accessToken"].is_string());
	assert!(body["refreshToken"].is_string());
	let user_id = body["id"].as_i64().unwrap();

	let avatar_url = {
		let mut connection = state.database.acquire().await.unwrap();
		db::get_user_by_id(&mut connection, user_id)
			.await
			.unwrap()
			.and_then(|user| user.avatar_url)
			.unwrap()
	};
	let file_name = avatar_url.strip_prefix("uploads/").unwrap();
	assert!(file_name.ends_with(".png"));
	let stored = tokio::fs::read(state.config.upload.directory.join(file_name))
		.await
		.unwrap();
	assert_eq!(stored, b"not really a png");

	let (status, body) = register(&router, register_form(&fields, Some(b"again"))).await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], json!("emailUnavailable"));

	let mut weak = fields;
	weak[3] = ("email", "bob@example.com");
	weak[4] = ("password", "short");
	let (status, body) = register(&router, register_form(&weak, Some(b"avatar"))).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("passwordTooWeak"));

	let _ = tokio::fs::remove_dir_all(&state.config.upload.directory).await;
}

#[tokio::test]
async fn profile_updates() {
	let state = init_tests().await.unwrap();
	let (_, token) = create_admin(&state).await;
	let user_id = create_test_user(&state, "ann@example.com").await.unwrap();
	let router = app::setup_routes(&state);

	let (status, user) = send(
		&router,
		Method::PATCH,
		&format!("/api/users/{user_id}"),
		Some(&token),
		Some(json!({ "middle_name": "Marie", "phone": "+85512345678" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(user["first_name"], json!("Test"));
	assert_eq!(user["middle_name"], json!("Marie"));
	assert_eq!(user["phone"], json!("+85512345678"));

	let (status, body) = send(
		&router,
		Method::PUT,
		&format!("/api/users/{user_id}"),
		Some(&token),
		Some(json!({
			"first_name": "Ann",
			"last_name": "Lee",
			"email": "admin@example.com"
		})),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], json!("emailUnavailable"));

	let (status, user) = send(
		&router,
		Method::PUT,
		&format!("/api/users/{user_id}"),
		Some(&token),
		Some(json!({
			"first_name": "Ann",
			"last_name": "Lee",
			"email": "ANN.LEE@example.com"
		})),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(user["email"], json!("ann.lee@example.com"));
	assert_eq!(user["middle_name"], Value::Null);

	let (status, _) = send(
		&router,
		Method::PATCH,
		"/api/users/999",
		Some(&token),
		Some(json!({ "first_name": "Nobody" })),
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn permission_crud() {
	let state = init_tests().await.unwrap();
	let (admin_id, token) = create_admin(&state).await;
	let router = app::setup_routes(&state);

	let (status, permission) = send(
		&router,
		Method::POST,
		"/api/permissions",
		Some(&token),
		Some(json!({ "name": "Export reports", "code": "export_report" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	let id = permission["id"].as_i64().unwrap();
	assert_eq!(permission["description"], Value::Null);

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/permissions",
		Some(&token),
		Some(json!({ "name": "Duplicate", "code": "export_report" })),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], json!("permissionAlreadyExists"));

	let (status, body) = send(
		&router,
		Method::POST,
		"/api/permissions",
		Some(&token),
		Some(json!({ "name": "Bad", "code": "Not A Code" })),
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], json!("wrongParameters"));

	let (status, permission) = send(
		&router,
		Method::PATCH,
		&format!("/api/permissions/{id}"),
		Some(&token),
		Some(json!({ "description": "Download monthly reports" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(permission["code"], json!("export_report"));
	assert_eq!(permission["description"], json!("Download monthly reports"));

	let (status, _) = send(
		&router,
		Method::DELETE,
		&format!("/api/permissions/{id}"),
		Some(&token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);

	let (status, _) = send(
		&router,
		Method::GET,
		&format!("/api/permissions/{id}"),
		Some(&token),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	// The admin still holds every built-in permission
	let mut connection = state.database.acquire().await.unwrap();
	let effective = service::get_effective_permission_codes(&mut connection, admin_id)
		.await
		.unwrap();
	assert_eq!(effective.len(), 13);
	assert!(!effective.contains("export_report"));
	assert_ne!(effective, BTreeSet::new());
}
