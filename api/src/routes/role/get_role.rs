use axum::{extract::State, Json};
use models::api::role::*;

use crate::{prelude::*, service};

pub async fn get_role(
	_: Authorized<GetRoleRequest>,
	RolePath { id }: RolePath,
	State(state): State<AppState>,
) -> Result<Json<Role>, ErrorType> {
	info!("Starting: Get role `{}`", id);

	let mut connection = state.database.acquire().await?;

	Ok(Json(service::get_role_details_by_id(&mut connection, id).await?))
}
