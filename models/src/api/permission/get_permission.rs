use axum::http::Method;

use super::{Permission, PermissionPath};
use crate::prelude::*;

/// Get the details of a single permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPermissionRequest;

impl ApiEndpoint for GetPermissionRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewPermission);

	type RequestPath = PermissionPath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = Permission;
}
