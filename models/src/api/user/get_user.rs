use axum::http::Method;

use super::{User, UserPath};
use crate::prelude::*;

/// Get a user along with their roles and direct permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserRequest;

impl ApiEndpoint for GetUserRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewUser);

	type RequestPath = UserPath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = User;
}
