use axum::{extract::State, Json};
use models::{api::role::*, SuccessResponse};

use crate::{db, prelude::*};

pub async fn delete_role(
	_: Authorized<DeleteRoleRequest>,
	RolePath { id }: RolePath,
	State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, ErrorType> {
	info!("Starting: Delete role `{}`", id);

	let mut connection = state.database.acquire().await?;

	if !db::delete_role(&mut connection, id).await? {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	info!("Role `{}` deleted", id);
	Ok(Json(SuccessResponse::default()))
}
