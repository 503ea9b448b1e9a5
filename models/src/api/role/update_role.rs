use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Role, RolePath};
use crate::prelude::*;

/// Replace the name and description of a role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRoleRequest {
	/// The new name
	pub name: String,
	/// The new description. Omitting it clears the description
	#[serde(default)]
	pub description: Option<String>,
}

impl ApiEndpoint for UpdateRoleRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditRole);

	type RequestPath = RolePath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Role;
}
