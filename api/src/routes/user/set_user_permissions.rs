use std::collections::BTreeSet;

use axum::{extract::State, Json};
use models::api::user::*;

use crate::{db, prelude::*, service};

/// Replaces every permission granted directly to the user with the given ones
pub async fn set_user_permissions(
	_: Authorized<SetUserPermissionsRequest>,
	UserPermissionsPath { id }: UserPermissionsPath,
	State(state): State<AppState>,
	Json(SetUserPermissionsRequest { permission_ids }): Json<SetUserPermissionsRequest>,
) -> Result<Json<User>, ErrorType> {
	info!("Starting: Set permissions of user `{}`", id);

	let permission_ids = permission_ids.into_iter().collect::<BTreeSet<_>>();

	let mut transaction = state.database.begin().await?;

	if db::get_user_by_id(&mut transaction, id).await?.is_none() {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	db::set_permissions_for_user(&mut transaction, id, &permission_ids).await?;
	let user = service::get_user_details_by_id(&mut transaction, id).await?;

	transaction.commit().await?;

	info!(
		"User `{}` now holds {} direct permissions",
		id,
		user.permissions.len()
	);
	Ok(Json(user))
}
