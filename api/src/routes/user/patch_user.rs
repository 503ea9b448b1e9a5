use axum::{extract::State, Json};
use models::api::user::*;

use super::sanitize_profile;
use crate::{
	db::{self, UserProfile},
	prelude::*,
	service,
};

pub async fn patch_user(
	_: Authorized<PatchUserRequest>,
	UserPath { id }: UserPath,
	State(state): State<AppState>,
	Json(PatchUserRequest {
		first_name,
		middle_name,
		last_name,
		phone,
		email,
	}): Json<PatchUserRequest>,
) -> Result<Json<User>, ErrorType> {
	info!("Starting: Patch user `{}`", id);

	let mut transaction = state.database.begin().await?;

	let current = db::get_user_by_id(&mut transaction, id)
		.await?
		.map(UserProfile::from)
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	let profile = sanitize_profile(UserProfile {
		first_name: first_name.unwrap_or(current.first_name),
		middle_name: middle_name.or(current.middle_name),
		last_name: last_name.unwrap_or(current.last_name),
		phone: phone.or(current.phone),
		email: email.unwrap_or(current.email),
	})?;

	db::update_user_profile(&mut transaction, id, &profile)
		.await
		.map_err(db::map_unique_violation(ErrorType::EmailUnavailable))?;

	let user = service::get_user_details_by_id(&mut transaction, id).await?;

	transaction.commit().await?;

	Ok(Json(user))
}
