use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::{permission::Permission, role::Role};

mod delete_user;
mod get_effective_permissions;
mod get_user;
mod list_users;
mod patch_user;
mod set_user_permissions;
mod set_user_roles;
mod update_user;

pub use self::{
	delete_user::*,
	get_effective_permissions::*,
	get_user::*,
	list_users::*,
	patch_user::*,
	set_user_permissions::*,
	set_user_roles::*,
	update_user::*,
};

/// A user, along with the roles assigned to them and the permissions granted
/// to them directly. The password and any reset token are never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
	/// The ID of the user
	pub id: i64,
	/// The first name of the user
	pub first_name: String,
	/// The middle name of the user, if any
	pub middle_name: Option<String>,
	/// The last name of the user
	pub last_name: String,
	/// The phone number of the user, if any
	pub phone: Option<String>,
	/// The unique email address of the user
	pub email: String,
	/// The path the user's avatar is served at
	pub avatar_url: Option<String>,
	/// The roles assigned to the user
	#[serde(default)]
	pub roles: Vec<Role>,
	/// The permissions granted directly to the user
	#[serde(default)]
	pub permissions: Vec<Permission>,
}

/// The path of the collection of all users
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/users")]
pub struct UsersPath;

/// The path of a single user
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/users/:id")]
pub struct UserPath {
	/// The ID of the user
	pub id: i64,
}
