use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Permission, PermissionPath};
use crate::prelude::*;

/// Replace every editable field of a permission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePermissionRequest {
	/// The new name
	pub name: String,
	/// The new code
	pub code: String,
	/// The new description. Omitting it clears the description
	#[serde(default)]
	pub description: Option<String>,
}

impl ApiEndpoint for UpdatePermissionRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditPermission);

	type RequestPath = PermissionPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Permission;
}
