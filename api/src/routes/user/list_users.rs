use axum::{
	extract::{Query, State},
	Json,
};
use models::api::user::*;

use crate::{db, prelude::*, service, utils::pagination};

pub async fn list_users(
	_: Authorized<ListUsersRequest>,
	State(state): State<AppState>,
	RequestUrl(url): RequestUrl,
	Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<User>>, ErrorType> {
	info!("Starting: List users");

	let ordering = query.ordering();
	let order_by = db::order_column(&ordering.field, db::USER_ORDER_COLUMNS)?;

	let mut connection = state.database.acquire().await?;

	let count = db::count_users(&mut connection, query.search()).await?;
	let users = db::list_users(
		&mut connection,
		query.search(),
		order_by,
		ordering.direction(),
		query.page_size(),
		query.offset(),
	)
	.await?;

	let mut data = Vec::with_capacity(users.len());
	for user in users {
		data.push(service::get_user_details(&mut connection, user).await?);
	}

	Ok(Json(pagination::paginate(data, count, &query, &url)))
}
