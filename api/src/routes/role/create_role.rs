use axum::{extract::State, Json};
use models::api::role::*;

use super::sanitize_role;
use crate::{db, prelude::*, service};

pub async fn create_role(
	_: Authorized<CreateRoleRequest>,
	State(state): State<AppState>,
	Json(CreateRoleRequest { name, description }): Json<CreateRoleRequest>,
) -> Result<Json<Role>, ErrorType> {
	info!("Starting: Create role");

	let (name, description) = sanitize_role(&name, description)?;

	let mut connection = state.database.acquire().await?;

	let role_id = db::create_role(&mut connection, &name, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::RoleAlreadyExists))?;

	info!("Role `{}` created with ID `{}`", name, role_id);
	Ok(Json(service::get_role_details_by_id(&mut connection, role_id).await?))
}
