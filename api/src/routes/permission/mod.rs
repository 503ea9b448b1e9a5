use axum::Router;
use models::api::permission::*;

use crate::{prelude::*, utils::validator};

mod create_permission;
mod delete_permission;
mod get_permission;
mod list_permissions;
mod patch_permission;
mod update_permission;

use self::{
	create_permission::*,
	delete_permission::*,
	get_permission::*,
	list_permissions::*,
	patch_permission::*,
	update_permission::*,
};

#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_endpoint::<ListPermissionsRequest, _, _>(list_permissions)
		.mount_endpoint::<CreatePermissionRequest, _, _>(create_permission)
		.mount_endpoint::<GetPermissionRequest, _, _>(get_permission)
		.mount_endpoint::<UpdatePermissionRequest, _, _>(update_permission)
		.mount_endpoint::<PatchPermissionRequest, _, _>(patch_permission)
		.mount_endpoint::<DeletePermissionRequest, _, _>(delete_permission)
		.with_state(state.clone())
}

/// A permission's fields as they are stored
struct PermissionFields {
	name: String,
	code: String,
	description: Option<String>,
}

/// Trims every field and clears a blank description. Fails if the name is
/// empty or the code is not a lower case identifier.
fn sanitize_permission(
	name: &str,
	code: &str,
	description: Option<String>,
) -> Result<PermissionFields, ErrorType> {
	let name = name.trim().to_string();
	let code = code.trim().to_string();
	if !validator::is_name_valid(&name) || !validator::is_permission_code_valid(&code) {
		return Err(ErrorType::WrongParameters);
	}

	let description = description
		.map(|description| description.trim().to_string())
		.filter(|description| !description.is_empty());

	Ok(PermissionFields {
		name,
		code,
		description,
	})
}
