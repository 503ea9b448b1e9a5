use axum::{
	extract::{Query, State},
	Json,
};
use models::api::permission::*;

use crate::{db, prelude::*, utils::pagination};

pub async fn list_permissions(
	_: Authorized<ListPermissionsRequest>,
	State(state): State<AppState>,
	RequestUrl(url): RequestUrl,
	Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<Permission>>, ErrorType> {
	info!("Starting: List permissions");

	let ordering = query.ordering();
	let order_by = db::order_column(&ordering.field, db::PERMISSION_ORDER_COLUMNS)?;

	let mut connection = state.database.acquire().await?;

	let count = db::count_permissions(&mut connection, query.search()).await?;
	let data: Vec<Permission> = db::list_permissions(
		&mut connection,
		query.search(),
		order_by,
		ordering.direction(),
		query.page_size(),
		query.offset(),
	)
	.await?
	.into_iter()
	.map(Permission::from)
	.collect();

	Ok(Json(pagination::paginate(data, count, &query, &url)))
}
