use axum::http::Method;

use super::{Permission, PermissionsPath};
use crate::prelude::*;

/// List all permissions, searching by code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPermissionsRequest;

impl ApiEndpoint for ListPermissionsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewPermission);

	type RequestPath = PermissionsPath;
	type RequestQuery = ListQuery;
	type RequestBody = ();
	type ResponseBody = Paginated<Permission>;
}
