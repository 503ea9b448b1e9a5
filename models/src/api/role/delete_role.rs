use axum::http::Method;

use super::RolePath;
use crate::{prelude::*, SuccessResponse};

/// Delete a role, unassigning it from every user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRoleRequest;

impl ApiEndpoint for DeleteRoleRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::DeleteRole);

	type RequestPath = RolePath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = SuccessResponse;
}
