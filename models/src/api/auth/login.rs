use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::AuthResponse;
use crate::prelude::*;

/// The path to login
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/auth/login")]
pub struct LoginPath;

/// Login with an email and password
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
	/// The email of the account
	pub email: String,
	/// The password of the account
	pub password: String,
}

impl ApiEndpoint for LoginRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType = AuthenticationType::NoAuthentication;

	type RequestPath = LoginPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = AuthResponse;
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::LoginRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&LoginRequest {
				email: "ann@example.com".to_string(),
				password: "hunter42".to_string(),
			},
			&[
				Token::Struct {
					name: "LoginRequest",
					len: 2,
				},
				Token::Str("email"),
				Token::Str("ann@example.com"),
				Token::Str("password"),
				Token::Str("hunter42"),
				Token::StructEnd,
			],
		);
	}
}
