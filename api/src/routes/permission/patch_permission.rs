use axum::{extract::State, Json};
use models::api::permission::*;

use super::{sanitize_permission, PermissionFields};
use crate::{db, prelude::*};

pub async fn patch_permission(
	_: Authorized<PatchPermissionRequest>,
	PermissionPath { id }: PermissionPath,
	State(state): State<AppState>,
	Json(PatchPermissionRequest {
		name,
		code,
		description,
	}): Json<PatchPermissionRequest>,
) -> Result<Json<Permission>, ErrorType> {
	info!("Starting: Patch permission `{}`", id);

	let mut transaction = state.database.begin().await?;

	let current = db::get_permission_by_id(&mut transaction, id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	let PermissionFields {
		name,
		code,
		description,
	} = sanitize_permission(
		name.as_deref().unwrap_or(&current.name),
		code.as_deref().unwrap_or(&current.code),
		description.or(current.description),
	)?;

	db::update_permission(&mut transaction, id, &name, &code, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::PermissionAlreadyExists))?;

	transaction.commit().await?;

	Ok(Json(Permission {
		id,
		name,
		code,
		description,
	}))
}
