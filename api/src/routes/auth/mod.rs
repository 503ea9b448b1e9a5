use axum::Router;
use models::api::auth::*;

use crate::{db, prelude::*, service};

mod forgot_password;
mod login;
mod refresh_token;
mod register;
mod reset_password;

use self::{
	forgot_password::*,
	login::*,
	refresh_token::*,
	register::*,
	reset_password::*,
};

#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_endpoint::<RegisterRequest, _, _>(register)
		.mount_endpoint::<LoginRequest, _, _>(login)
		.mount_endpoint::<RefreshTokenRequest, _, _>(refresh_token)
		.mount_endpoint::<ForgotPasswordRequest, _, _>(forgot_password)
		.mount_endpoint::<ResetPasswordRequest, _, _>(reset_password)
		.with_state(state.clone())
}

/// Issues a fresh token pair for the user and builds the response shared by
/// registration and login
async fn create_auth_response(
	connection: &mut DatabaseConnection,
	state: &AppState,
	user_id: i64,
	email: String,
) -> Result<AuthResponse, ErrorType> {
	let roles = service::get_roles_of_user(connection, user_id).await?;
	let permissions = service::get_effective_permission_codes(connection, user_id).await?;
	let (access_token, refresh_token) = service::issue_token_pair(user_id, &state.config.jwt)?;

	debug!("Issued tokens for user `{}`", user_id);

	Ok(AuthResponse {
		id: user_id,
		email,
		roles,
		permissions,
		access_token,
		refresh_token,
	})
}

/// Makes sure an email belongs to an existing user
async fn get_user_by_email(
	connection: &mut DatabaseConnection,
	email: &str,
) -> Result<db::User, ErrorType> {
	db::get_user_by_email(connection, &service::normalize_email(email))
		.await?
		.ok_or(ErrorType::UserNotFound)
}
