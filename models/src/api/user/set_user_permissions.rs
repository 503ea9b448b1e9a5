use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::User;
use crate::prelude::*;

/// The path to the direct permissions of a user
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/users/:id/permissions")]
pub struct UserPermissionsPath {
	/// The ID of the user
	pub id: i64,
}

/// Replace every permission granted directly to a user with the given ones.
/// Permissions the user holds through a role are not affected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetUserPermissionsRequest {
	/// The IDs of the permissions to grant directly
	pub permission_ids: Vec<i64>,
}

impl ApiEndpoint for SetUserPermissionsRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::AssignPermission);

	type RequestPath = UserPermissionsPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = User;
}
