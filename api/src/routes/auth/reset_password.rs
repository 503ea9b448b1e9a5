use axum::{extract::State, Json};
use models::{api::auth::*, MessageResponse};

use crate::{db, prelude::*, service, utils::validator};

pub async fn reset_password(
	State(state): State<AppState>,
	Json(ResetPasswordRequest {
		token,
		new_password,
	}): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ErrorType> {
	info!("Starting: Reset password");

	if !validator::is_password_valid(&new_password) {
		return Err(ErrorType::PasswordTooWeak);
	}

	let mut connection = state.database.acquire().await?;

	let user = db::get_user_by_reset_token(
		&mut connection,
		&service::hash_reset_token(&token),
		service::get_current_time(),
	)
	.await?
	.ok_or(ErrorType::InvalidPasswordResetToken)?;

	let password = service::hash_password(&new_password, &state.config.password_pepper)?;
	db::update_user_password(&mut connection, user.id, &password).await?;

	info!("Password reset for user `{}`", user.id);
	Ok(Json(MessageResponse::new("Password reset successful")))
}
