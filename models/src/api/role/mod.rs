use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

use super::permission::Permission;

mod create_role;
mod delete_role;
mod get_role;
mod list_roles;
mod patch_role;
mod set_role_permissions;
mod update_role;

pub use self::{
	create_role::*,
	delete_role::*,
	get_role::*,
	list_roles::*,
	patch_role::*,
	set_role_permissions::*,
	update_role::*,
};

/// A named bundle of permissions that can be assigned to users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
	/// The ID of the role
	pub id: i64,
	/// The unique name of the role
	pub name: String,
	/// What the role is meant for
	pub description: Option<String>,
	/// The permissions every holder of this role is granted
	#[serde(default)]
	pub permissions: Vec<Permission>,
}

/// The path of the collection of all roles
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/roles")]
pub struct RolesPath;

/// The path of a single role
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/roles/:id")]
pub struct RolePath {
	/// The ID of the role
	pub id: i64,
}
