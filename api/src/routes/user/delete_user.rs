use axum::{extract::State, Json};
use models::{api::user::*, SuccessResponse};

use crate::{db, prelude::*};

pub async fn delete_user(
	_: Authorized<DeleteUserRequest>,
	UserPath { id }: UserPath,
	State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, ErrorType> {
	info!("Starting: Delete user `{}`", id);

	let mut connection = state.database.acquire().await?;

	if !db::delete_user(&mut connection, id).await? {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	info!("User `{}` deleted", id);
	Ok(Json(SuccessResponse::default()))
}
