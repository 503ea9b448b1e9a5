use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::User;
use crate::prelude::*;

/// The path to the roles of a user
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/users/:id/roles")]
pub struct UserRolesPath {
	/// The ID of the user
	pub id: i64,
}

/// Replace every role of a user with the given ones. Roles that are not listed
/// are unassigned, and IDs that do not exist are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetUserRolesRequest {
	/// The IDs of the roles the user should hold
	pub role_ids: Vec<i64>,
}

impl ApiEndpoint for SetUserRolesRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::AssignRole);

	type RequestPath = UserRolesPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = User;
}
