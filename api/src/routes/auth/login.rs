use axum::{extract::State, Json};
use models::api::auth::*;

use super::{create_auth_response, get_user_by_email};
use crate::{prelude::*, service};

pub async fn login(
	State(state): State<AppState>,
	Json(LoginRequest { email, password }): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ErrorType> {
	info!("Starting: Login");

	let mut connection = state.database.acquire().await?;

	let user = get_user_by_email(&mut connection, &email).await?;

	if !service::validate_password(&password, &user.password, &state.config.password_pepper)? {
		warn!("Wrong password for user `{}`", user.id);
		return Err(ErrorType::InvalidPassword);
	}

	let response = create_auth_response(&mut connection, &state, user.id, user.email).await?;

	info!("User `{}` logged in", user.id);
	Ok(Json(response))
}
