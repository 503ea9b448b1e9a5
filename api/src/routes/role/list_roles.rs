use axum::{
	extract::{Query, State},
	Json,
};
use models::api::role::*;

use crate::{db, prelude::*, service, utils::pagination};

pub async fn list_roles(
	_: Authorized<ListRolesRequest>,
	State(state): State<AppState>,
	RequestUrl(url): RequestUrl,
	Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<Role>>, ErrorType> {
	info!("Starting: List roles");

	let ordering = query.ordering();
	let order_by = db::order_column(&ordering.field, db::ROLE_ORDER_COLUMNS)?;

	let mut connection = state.database.acquire().await?;

	let count = db::count_roles(&mut connection, query.search()).await?;
	let roles = db::list_roles(
		&mut connection,
		query.search(),
		order_by,
		ordering.direction(),
		query.page_size(),
		query.offset(),
	)
	.await?;

	let mut data = Vec::with_capacity(roles.len());
	for role in roles {
		data.push(service::get_role_details(&mut connection, role).await?);
	}

	Ok(Json(pagination::paginate(data, count, &query, &url)))
}
