use axum::{extract::State, Json};
use models::api::role::*;

use super::sanitize_role;
use crate::{db, prelude::*, service};

pub async fn patch_role(
	_: Authorized<PatchRoleRequest>,
	RolePath { id }: RolePath,
	State(state): State<AppState>,
	Json(PatchRoleRequest { name, description }): Json<PatchRoleRequest>,
) -> Result<Json<Role>, ErrorType> {
	info!("Starting: Patch role `{}`", id);

	let mut transaction = state.database.begin().await?;

	let current = db::get_role_by_id(&mut transaction, id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	let (name, description) = sanitize_role(
		name.as_deref().unwrap_or(&current.name),
		description.or(current.description),
	)?;

	db::update_role(&mut transaction, id, &name, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::RoleAlreadyExists))?;

	let role = service::get_role_details_by_id(&mut transaction, id).await?;

	transaction.commit().await?;

	Ok(Json(role))
}
