use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Permission, PermissionsPath};
use crate::prelude::*;

/// Create a new permission with a unique code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePermissionRequest {
	/// A human readable name
	pub name: String,
	/// The unique code of the permission
	pub code: String,
	/// What the permission allows
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl ApiEndpoint for CreatePermissionRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::CreatePermission);

	type RequestPath = PermissionsPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Permission;
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::CreatePermissionRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreatePermissionRequest {
				name: "Export reports".to_string(),
				code: "export_report".to_string(),
				description: None,
			},
			&[
				Token::Struct {
					name: "CreatePermissionRequest",
					len: 2,
				},
				Token::Str("name"),
				Token::Str("Export reports"),
				Token::Str("code"),
				Token::Str("export_report"),
				Token::StructEnd,
			],
		);
	}
}
