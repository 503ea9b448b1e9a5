use axum::{extract::State, Json};
use models::api::permission::*;

use super::{sanitize_permission, PermissionFields};
use crate::{db, prelude::*};

pub async fn update_permission(
	_: Authorized<UpdatePermissionRequest>,
	PermissionPath { id }: PermissionPath,
	State(state): State<AppState>,
	Json(UpdatePermissionRequest {
		name,
		code,
		description,
	}): Json<UpdatePermissionRequest>,
) -> Result<Json<Permission>, ErrorType> {
	info!("Starting: Update permission `{}`", id);

	let PermissionFields {
		name,
		code,
		description,
	} = sanitize_permission(&name, &code, description)?;

	let mut connection = state.database.acquire().await?;

	let updated = db::update_permission(&mut connection, id, &name, &code, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::PermissionAlreadyExists))?;
	if !updated {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	Ok(Json(Permission {
		id,
		name,
		code,
		description,
	}))
}
