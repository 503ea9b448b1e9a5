use std::collections::BTreeSet;

use axum::{extract::State, Json};
use models::api::user::*;

use crate::{db, prelude::*, service};

/// Replaces every role of the user with the given ones
pub async fn set_user_roles(
	_: Authorized<SetUserRolesRequest>,
	UserRolesPath { id }: UserRolesPath,
	State(state): State<AppState>,
	Json(SetUserRolesRequest { role_ids }): Json<SetUserRolesRequest>,
) -> Result<Json<User>, ErrorType> {
	info!("Starting: Set roles of user `{}`", id);

	let role_ids = role_ids.into_iter().collect::<BTreeSet<_>>();

	let mut transaction = state.database.begin().await?;

	if db::get_user_by_id(&mut transaction, id).await?.is_none() {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	db::set_roles_for_user(&mut transaction, id, &role_ids).await?;
	let user = service::get_user_details_by_id(&mut transaction, id).await?;

	transaction.commit().await?;

	info!("User `{}` now holds {} roles", id, user.roles.len());
	Ok(Json(user))
}
