use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Permission, PermissionPath};
use crate::prelude::*;

/// Change only the given fields of a permission
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchPermissionRequest {
	/// The new name, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// The new code, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	/// The new description, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl ApiEndpoint for PatchPermissionRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditPermission);

	type RequestPath = PermissionPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Permission;
}
