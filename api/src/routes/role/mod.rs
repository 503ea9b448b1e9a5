use axum::Router;
use models::api::role::*;

use crate::{prelude::*, utils::validator};

mod create_role;
mod delete_role;
mod get_role;
mod list_roles;
mod patch_role;
mod set_role_permissions;
mod update_role;

use self::{
	create_role::*,
	delete_role::*,
	get_role::*,
	list_roles::*,
	patch_role::*,
	set_role_permissions::*,
	update_role::*,
};

#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_endpoint::<ListRolesRequest, _, _>(list_roles)
		.mount_endpoint::<CreateRoleRequest, _, _>(create_role)
		.mount_endpoint::<GetRoleRequest, _, _>(get_role)
		.mount_endpoint::<UpdateRoleRequest, _, _>(update_role)
		.mount_endpoint::<PatchRoleRequest, _, _>(patch_role)
		.mount_endpoint::<DeleteRoleRequest, _, _>(delete_role)
		.mount_endpoint::<SetRolePermissionsRequest, _, _>(set_role_permissions)
		.with_state(state.clone())
}

/// Trims the name and clears a blank description. Fails if the name is empty
/// or too long.
fn sanitize_role(name: &str, description: Option<String>) -> Result<(String, Option<String>), ErrorType> {
	let name = name.trim().to_string();
	if !validator::is_name_valid(&name) {
		return Err(ErrorType::WrongParameters);
	}

	let description = description
		.map(|description| description.trim().to_string())
		.filter(|description| !description.is_empty());

	Ok((name, description))
}
