use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::AuthResponse;
use crate::prelude::*;

/// The path to create a new account
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/auth/register")]
pub struct RegisterPath;

/// Create a new account. This is sent as `multipart/form-data`, with these
/// fields as text parts and the avatar image as a file part named
/// [`RegisterRequest::AVATAR_FIELD`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
	/// The first name of the user
	pub first_name: String,
	/// The middle name of the user
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub middle_name: Option<String>,
	/// The last name of the user
	pub last_name: String,
	/// The phone number of the user
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	/// The email to login with
	pub email: String,
	/// The password to login with
	pub password: String,
}

impl RegisterRequest {
	/// The name of the multipart field carrying the avatar image
	pub const AVATAR_FIELD: &'static str = "avatar";
}

impl ApiEndpoint for RegisterRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: AuthenticationType = AuthenticationType::NoAuthentication;

	type RequestPath = RegisterPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = AuthResponse;
}
