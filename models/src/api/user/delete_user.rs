use axum::http::Method;

use super::UserPath;
use crate::{prelude::*, SuccessResponse};

/// Delete a user along with their grants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUserRequest;

impl ApiEndpoint for DeleteUserRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::DeleteUser);

	type RequestPath = UserPath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = SuccessResponse;
}
