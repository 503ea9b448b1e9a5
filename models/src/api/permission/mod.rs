use axum_extra::routing::TypedPath;
use serde::{Deserialize, Serialize};

mod create_permission;
mod delete_permission;
mod get_permission;
mod list_permissions;
mod patch_permission;
mod update_permission;

pub use self::{
	create_permission::*,
	delete_permission::*,
	get_permission::*,
	list_permissions::*,
	patch_permission::*,
	update_permission::*,
};

/// A permission that can be granted to a role, or directly to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permission {
	/// The ID of the permission
	pub id: i64,
	/// A human readable name
	pub name: String,
	/// The unique code that endpoints check for, such as `edit_user`
	pub code: String,
	/// What the permission allows
	pub description: Option<String>,
}

/// The path of the collection of all permissions
#[derive(
	Eq, Ord, Copy, Hash, Debug, Clone, Default, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize,
)]
#[typed_path("/api/permissions")]
pub struct PermissionsPath;

/// The path of a single permission
#[derive(Eq, Ord, Copy, Hash, Debug, Clone, TypedPath, PartialEq, Serialize, PartialOrd, Deserialize)]
#[typed_path("/api/permissions/:id")]
pub struct PermissionPath {
	/// The ID of the permission
	pub id: i64,
}
