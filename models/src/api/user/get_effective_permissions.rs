use std::collections::BTreeSet;

use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use crate::{api::role::Role, prelude::*};

/// The path to the effective permissions of a user
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/users/:id/effective-permissions")]
pub struct UserEffectivePermissionsPath {
	/// The ID of the user
	pub id: i64,
}

/// Get every permission code a user holds, whether through a role or directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEffectivePermissionsRequest;

impl ApiEndpoint for GetEffectivePermissionsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::ViewUser);

	type RequestPath = UserEffectivePermissionsPath;
	type RequestQuery = ();
	type RequestBody = ();
	type ResponseBody = EffectivePermissions;
}

/// The roles of a user, and the union of the permission codes they hold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectivePermissions {
	/// The roles assigned to the user, with their permissions
	pub roles: Vec<Role>,
	/// Every permission code the user holds, each exactly once
	pub permissions: BTreeSet<String>,
}
