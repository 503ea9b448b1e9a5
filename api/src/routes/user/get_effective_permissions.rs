use axum::{extract::State, Json};
use models::api::user::*;

use crate::{prelude::*, service};

pub async fn get_effective_permissions(
	_: Authorized<GetEffectivePermissionsRequest>,
	UserEffectivePermissionsPath { id }: UserEffectivePermissionsPath,
	State(state): State<AppState>,
) -> Result<Json<EffectivePermissions>, ErrorType> {
	info!("Starting: Get effective permissions of user `{}`", id);

	let mut connection = state.database.acquire().await?;

	Ok(Json(
		service::get_effective_permissions(&mut connection, id).await?,
	))
}
