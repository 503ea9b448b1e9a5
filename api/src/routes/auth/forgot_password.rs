use axum::{extract::State, Json};
use models::{api::auth::*, MessageResponse};

use super::get_user_by_email;
use crate::{db, prelude::*, service, utils::config::RunningEnvironment};

pub async fn forgot_password(
	State(state): State<AppState>,
	Json(ForgotPasswordRequest { email }): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, ErrorType> {
	info!("Starting: Forgot password");

	let mut connection = state.database.acquire().await?;

	let user = get_user_by_email(&mut connection, &email).await?;

	let (token, token_hash) = service::generate_reset_token();
	let expiry = service::get_current_time() + constants::RESET_TOKEN_VALIDITY;
	db::set_password_reset_token(&mut connection, user.id, &token_hash, expiry).await?;

	// No mail is sent yet, so the token is only retrievable from the logs
	if state.config.environment == RunningEnvironment::Development {
		debug!("Password reset token for user `{}`: {}", user.id, token);
	}

	info!("Password reset token issued for user `{}`", user.id);
	Ok(Json(MessageResponse::new("Reset link sent (simulate email)")))
}
