use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{User, UserPath};
use crate::prelude::*;

/// Change only the given profile fields of a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchUserRequest {
	/// The new first name, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	/// The new middle name, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub middle_name: Option<String>,
	/// The new last name, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	/// The new phone number, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	/// The new email address, if it should change
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
}

impl ApiEndpoint for PatchUserRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: AuthenticationType =
		AuthenticationType::PermissionRequired(PermissionCode::EditUser);

	type RequestPath = UserPath;
	type RequestQuery = ();
	type RequestBody = Self;
	type ResponseBody = User;
}
