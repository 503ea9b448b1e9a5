use axum::http::Method;

use super::PermissionPath;
use crate::{prelude::*, SuccessResponse};

/// Delete a permission, revoking it from every role and user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePermissionRequest;

impl ApiEndpoint for DeletePermissionRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::DeletePermission);

	type RequestPath = PermissionPath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = SuccessResponse;
}
