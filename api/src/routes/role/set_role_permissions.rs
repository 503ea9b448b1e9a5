use std::collections::BTreeSet;

use axum::{extract::State, Json};
use models::api::role::*;

use crate::{db, prelude::*, service};

/// Replaces every permission of the role with the given ones
pub async fn set_role_permissions(
	_: Authorized<SetRolePermissionsRequest>,
	RolePermissionsPath { id }: RolePermissionsPath,
	State(state): State<AppState>,
	Json(SetRolePermissionsRequest { permission_ids }): Json<SetRolePermissionsRequest>,
) -> Result<Json<Role>, ErrorType> {
	info!("Starting: Set permissions of role `{}`", id);

	let permission_ids = permission_ids.into_iter().collect::<BTreeSet<_>>();

	let mut transaction = state.database.begin().await?;

	let role = db::get_role_by_id(&mut transaction, id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	db::set_permissions_for_role(&mut transaction, id, &permission_ids).await?;
	let role = service::get_role_details(&mut transaction, role).await?;

	transaction.commit().await?;

	info!(
		"Role `{}` now holds {} permissions",
		id,
		role.permissions.len()
	);
	Ok(Json(role))
}
