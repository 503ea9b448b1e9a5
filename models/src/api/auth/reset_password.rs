use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, MessageResponse};

/// The path to reset a password
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/auth/reset-password")]
pub struct ResetPasswordPath;

/// Set a new password using a reset token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
	/// The token that was issued by the forgot password endpoint
	pub token: String,
	/// The new password
	pub new_password: String,
}

impl ApiEndpoint for ResetPasswordRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType = AuthenticationType::NoAuthentication;

	type RequestPath = ResetPasswordPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = MessageResponse;
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::ResetPasswordRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&ResetPasswordRequest {
				token: "abcdef".to_string(),
				new_password: "hunter43".to_string(),
			},
			&[
				Token::Struct {
					name: "ResetPasswordRequest",
					len: 2,
				},
				Token::Str("token"),
				Token::Str("abcdef"),
				Token::Str("newPassword"),
				Token::Str("hunter43"),
				Token::StructEnd,
			],
		);
	}
}
