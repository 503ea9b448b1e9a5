use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::role::Role;

mod forgot_password;
mod login;
mod refresh_token;
mod register;
mod reset_password;

pub use self::{
	forgot_password::*,
	login::*,
	refresh_token::*,
	register::*,
	reset_password::*,
};

/// The response of a successful registration or login. Contains the newly
/// issued token pair, along with the roles and effective permissions of the
/// user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
	/// The ID of the user
	pub id: i64,
	/// The email of the user
	pub email: String,
	/// The roles assigned to the user
	pub roles: Vec<Role>,
	/// The effective permission codes of the user
	pub permissions: BTreeSet<String>,
	/// A short-lived token to authenticate requests with
	#[serde(rename = "accessToken")]
	pub access_token: String,
	/// A long-lived token to get new access tokens with
	#[serde(rename = "refreshToken")]
	pub refresh_token: String,
}
