use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Role, RolePath};
use crate::prelude::*;

/// Change only the given fields of a role
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchRoleRequest {
	/// The new name, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// The new description, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl ApiEndpoint for PatchRoleRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditRole);

	type RequestPath = RolePath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Role;
}
