use axum::{extract::State, Json};
use models::{api::permission::*, SuccessResponse};

use crate::{db, prelude::*};

pub async fn delete_permission(
	_: Authorized<DeletePermissionRequest>,
	PermissionPath { id }: PermissionPath,
	State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, ErrorType> {
	info!("Starting: Delete permission `{}`", id);

	let mut connection = state.database.acquire().await?;

	if !db::delete_permission(&mut connection, id).await? {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	info!("Permission `{}` deleted", id);
	Ok(Json(SuccessResponse::default()))
}
