use axum::http::Method;

use super::{Role, RolePath};
use crate::prelude::*;

/// Get a role along with its permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetRoleRequest;

impl ApiEndpoint for GetRoleRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewRole);

	type RequestPath = RolePath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = Role;
}
