use axum::{extract::State, Json};
use models::api::user::*;

use super::sanitize_profile;
use crate::{
	db::{self, UserProfile},
	prelude::*,
	service,
};

pub async fn update_user(
	_: Authorized<UpdateUserRequest>,
	UserPath { id }: UserPath,
	State(state): State<AppState>,
	Json(UpdateUserRequest {
		first_name,
		middle_name,
		last_name,
		phone,
		email,
	}): Json<UpdateUserRequest>,
) -> Result<Json<User>, ErrorType> {
	info!("Starting: Update user `{}`", id);

	let profile = sanitize_profile(UserProfile {
		first_name,
		middle_name,
		last_name,
		phone,
		email,
	})?;

	let mut connection = state.database.acquire().await?;

	let updated = db::update_user_profile(&mut connection, id, &profile)
		.await
		.map_err(db::map_unique_violation(ErrorType::EmailUnavailable))?;
	if !updated {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	Ok(Json(service::get_user_details_by_id(&mut connection, id).await?))
}
