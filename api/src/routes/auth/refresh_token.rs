use axum::{extract::State, Json};
use models::api::auth::*;

use crate::{db, prelude::*, service};

pub async fn refresh_token(
	State(state): State<AppState>,
	Json(RefreshTokenRequest { token }): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, ErrorType> {
	info!("Starting: Refresh access token");

	let token = token
		.filter(|token| !token.is_empty())
		.ok_or(ErrorType::Unauthenticated)?;
	let user_id = service::verify_refresh_token(&token, &state.config.jwt)?;

	let mut connection = state.database.acquire().await?;
	if db::get_user_by_id(&mut connection, user_id).await?.is_none() {
		warn!("Refresh token refers to user `{}` that does not exist", user_id);
		return Err(ErrorType::MalformedRefreshToken);
	}

	let access_token = service::issue_access_token(user_id, &state.config.jwt)?;

	Ok(Json(RefreshTokenResponse { access_token }))
}
