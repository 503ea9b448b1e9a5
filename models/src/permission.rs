use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumMessage, EnumString, VariantNames};

/// A list of all the permission codes that the API checks for. Any permission
/// can be stored with an arbitrary code, but only these codes gate endpoints.
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	AsRefStr,
	Display,
	EnumIter,
	PartialEq,
	Serialize,
	EnumString,
	PartialOrd,
	EnumMessage,
	Deserialize,
	VariantNames,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PermissionCode {
	/// List users and view their details
	#[strum(message = "View users", detailed_message = "List users and view their details")]
	ViewUser,
	/// Edit a user's profile
	#[strum(message = "Edit users", detailed_message = "Edit the profile of a user")]
	EditUser,
	/// Delete a user
	#[strum(message = "Delete users", detailed_message = "Delete a user")]
	DeleteUser,
	/// Replace the roles assigned to a user
	#[strum(message = "Assign roles", detailed_message = "Replace the roles of a user")]
	AssignRole,
	/// Replace the permissions granted to a user or a role
	#[strum(
		message = "Assign permissions",
		detailed_message = "Replace the permissions granted to a user or a role"
	)]
	AssignPermission,
	/// List roles and view their details
	#[strum(message = "View roles", detailed_message = "List roles and view their details")]
	ViewRole,
	/// Create a new role
	#[strum(message = "Create roles", detailed_message = "Create a new role")]
	CreateRole,
	/// Edit a role's name and description
	#[strum(message = "Edit roles", detailed_message = "Edit the name and description of a role")]
	EditRole,
	/// Delete a role
	#[strum(message = "Delete roles", detailed_message = "Delete a role")]
	DeleteRole,
	/// List permissions and view their details
	#[strum(
		message = "View permissions",
		detailed_message = "List permissions and view their details"
	)]
	ViewPermission,
	/// Create a new permission
	#[strum(message = "Create permissions", detailed_message = "Create a new permission")]
	CreatePermission,
	/// Edit a permission
	#[strum(
		message = "Edit permissions",
		detailed_message = "Edit the name, code and description of a permission"
	)]
	EditPermission,
	/// Delete a permission
	#[strum(message = "Delete permissions", detailed_message = "Delete a permission")]
	DeletePermission,
}

impl PermissionCode {
	/// The code as stored in the database
	pub fn code(&self) -> &str {
		self.as_ref()
	}

	/// A short human readable name for this permission
	pub fn name(&self) -> &'static str {
		self.get_message().unwrap_or_default()
	}

	/// A longer description of what this permission allows
	pub fn description(&self) -> &'static str {
		self.get_detailed_message().unwrap_or_default()
	}
}
