use axum::{routing::get, Router};

use crate::prelude::*;

/// Registration, login and password recovery
mod auth;
/// Permissions and their CRUD
mod permission;
/// Roles, their CRUD and the permissions they bundle
mod role;
/// Users, their profile and their grants
mod user;

/// Sets up every route of the API
#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.route("/", get(health))
		.merge(auth::setup_routes(state))
		.merge(user::setup_routes(state))
		.merge(role::setup_routes(state))
		.merge(permission::setup_routes(state))
}

async fn health() -> &'static str {
	"Sophor Telegram Bot is running 🚀"
}
