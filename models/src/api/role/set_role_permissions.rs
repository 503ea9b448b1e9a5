use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::Role;
use crate::prelude::*;

/// The path to the permissions of a role
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/roles/:id/permissions")]
pub struct RolePermissionsPath {
	/// The ID of the role
	pub id: i64,
}

/// Replace every permission of a role with the given ones. Permissions that
/// are not listed are revoked, and IDs that do not exist are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetRolePermissionsRequest {
	/// The IDs of the permissions the role should hold
	pub permission_ids: Vec<i64>,
}

impl ApiEndpoint for SetRolePermissionsRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::AssignPermission);

	type RequestPath = RolePermissionsPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Role;
}
