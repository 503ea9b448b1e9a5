use axum::{extract::State, Json};
use models::api::role::*;

use super::sanitize_role;
use crate::{db, prelude::*, service};

pub async fn update_role(
	_: Authorized<UpdateRoleRequest>,
	RolePath { id }: RolePath,
	State(state): State<AppState>,
	Json(UpdateRoleRequest { name, description }): Json<UpdateRoleRequest>,
) -> Result<Json<Role>, ErrorType> {
	info!("Starting: Update role `{}`", id);

	let (name, description) = sanitize_role(&name, description)?;

	let mut connection = state.database.acquire().await?;

	let updated = db::update_role(&mut connection, id, &name, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::RoleAlreadyExists))?;
	if !updated {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	Ok(Json(service::get_role_details_by_id(&mut connection, id).await?))
}
