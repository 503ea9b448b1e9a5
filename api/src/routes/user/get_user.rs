use axum::{extract::State, Json};
use models::api::user::*;

use crate::{prelude::*, service};

pub async fn get_user(
	_: Authorized<GetUserRequest>,
	UserPath { id }: UserPath,
	State(state): State<AppState>,
) -> Result<Json<User>, ErrorType> {
	info!("Starting: Get user `{}`", id);

	let mut connection = state.database.acquire().await?;

	Ok(Json(service::get_user_details_by_id(&mut connection, id).await?))
}
