use axum::http::Method;

use super::{Role, RolesPath};
use crate::prelude::*;

/// List all roles, searching by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRolesRequest;

impl ApiEndpoint for ListRolesRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewRole);

	type RequestPath = RolesPath;
	type RequestQuery = ListQuery;
	type RequestBody = ();
	type ResponseBody = Paginated<Role>;
}
