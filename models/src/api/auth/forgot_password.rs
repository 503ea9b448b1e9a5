use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, MessageResponse};

/// The path to request a password reset
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/auth/forgot-password")]
pub struct ForgotPasswordPath;

/// Request a password reset token for an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
	/// The email of the account
	pub email: String,
}

impl ApiEndpoint for ForgotPasswordRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType = AuthenticationType::NoAuthentication;

	type RequestPath = ForgotPasswordPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = MessageResponse;
}
