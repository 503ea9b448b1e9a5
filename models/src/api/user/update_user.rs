use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{User, UserPath};
use crate::prelude::*;

/// Replace the profile of a user. Optional fields that are omitted are
/// cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
	/// The new first name
	pub first_name: String,
	/// The new middle name
	#[serde(default)]
	pub middle_name: Option<String>,
	/// The new last name
	pub last_name: String,
	/// The new phone number
	#[serde(default)]
	pub phone: Option<String>,
	/// The new email address
	pub email: String,
}

impl ApiEndpoint for UpdateUserRequest {
	const METHOD: Method = Method::PUT;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditUser);

	type RequestPath = UserPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = User;
}
