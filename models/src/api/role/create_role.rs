use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{Role, RolesPath};
use crate::prelude::*;

/// Create a new role without any permissions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRoleRequest {
	/// The unique name of the role
	pub name: String,
	/// What the role is meant for
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl ApiEndpoint for CreateRoleRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::CreateRole);

	type RequestPath = RolesPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = Role;
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::CreateRoleRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreateRoleRequest {
				name: "editor".to_string(),
				description: Some("Edits user profiles".to_string()),
			},
			&[
				Token::Struct {
					name: "CreateRoleRequest",
					len: 2,
				},
				Token::Str("name"),
				Token::Str("editor"),
				Token::Str("description"),
				Token::Some,
				Token::Str("Edits user profiles"),
				Token::StructEnd,
			],
		);
	}
}
