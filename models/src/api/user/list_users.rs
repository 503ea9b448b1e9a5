use axum::http::Method;

use super::{User, UsersPath};
use crate::prelude::*;

/// List all users, searching by name, phone and email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersRequest;

impl ApiEndpoint for ListUsersRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewUser);

	type RequestPath = UsersPath;
	type RequestQuery = ListQuery;
	type RequestBody = ();
	type ResponseBody = Paginated<User>;
}
