use axum::{extract::State, Json};
use models::api::permission::*;

use crate::{db, prelude::*};

pub async fn get_permission(
	_: Authorized<GetPermissionRequest>,
	PermissionPath { id }: PermissionPath,
	State(state): State<AppState>,
) -> Result<Json<Permission>, ErrorType> {
	info!("Starting: Get permission `{}`", id);

	let mut connection = state.database.acquire().await?;

	db::get_permission_by_id(&mut connection, id)
		.await?
		.map(Permission::from)
		.map(Json)
		.ok_or(ErrorType::ResourceDoesNotExist)
}
