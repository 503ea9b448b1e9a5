use axum::{extract::State, Json};
use models::api::permission::*;

use super::{sanitize_permission, PermissionFields};
use crate::{db, prelude::*};

pub async fn create_permission(
	_: Authorized<CreatePermissionRequest>,
	State(state): State<AppState>,
	Json(CreatePermissionRequest {
		name,
		code,
		description,
	}): Json<CreatePermissionRequest>,
) -> Result<Json<Permission>, ErrorType> {
	info!("Starting: Create permission");

	let PermissionFields {
		name,
		code,
		description,
	} = sanitize_permission(&name, &code, description)?;

	let mut connection = state.database.acquire().await?;

	let id = db::create_permission(&mut connection, &name, &code, description.as_deref())
		.await
		.map_err(db::map_unique_violation(ErrorType::PermissionAlreadyExists))?;

	info!("Permission `{}` created with ID `{}`", code, id);
	Ok(Json(Permission {
		id,
		name,
		code,
		description,
	}))
}
