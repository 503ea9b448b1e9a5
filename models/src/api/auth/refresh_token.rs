use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The path to get a new access token
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/auth/refresh-token")]
pub struct RefreshTokenPath;

/// Exchange a refresh token for a new access token
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshTokenRequest {
	/// The refresh token issued at login
	#[serde(default)]
	pub token: Option<String>,
}

/// A freshly issued access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
	/// The new access token
	pub access_token: String,
}

impl ApiEndpoint for RefreshTokenRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType = AuthenticationType::NoAuthentication;

	type RequestPath = RefreshTokenPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = RefreshTokenResponse;
}
