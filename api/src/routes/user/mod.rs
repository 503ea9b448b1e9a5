use axum::Router;
use models::api::user::*;

use crate::{db::UserProfile, prelude::*, service, utils::validator};

mod delete_user;
mod get_effective_permissions;
mod get_user;
mod list_users;
mod patch_user;
mod set_user_permissions;
mod set_user_roles;
mod update_user;

use self::{
	delete_user::*,
	get_effective_permissions::*,
	get_user::*,
	list_users::*,
	patch_user::*,
	set_user_permissions::*,
	set_user_roles::*,
	update_user::*,
};

#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_endpoint::<ListUsersRequest, _, _>(list_users)
		.mount_endpoint::<GetUserRequest, _, _>(get_user)
		.mount_endpoint::<UpdateUserRequest, _, _>(update_user)
		.mount_endpoint::<PatchUserRequest, _, _>(patch_user)
		.mount_endpoint::<DeleteUserRequest, _, _>(delete_user)
		.mount_endpoint::<SetUserRolesRequest, _, _>(set_user_roles)
		.mount_endpoint::<SetUserPermissionsRequest, _, _>(set_user_permissions)
		.mount_endpoint::<GetEffectivePermissionsRequest, _, _>(get_effective_permissions)
		.with_state(state.clone())
}

/// Normalizes a profile before it is stored: names are trimmed, the email is
/// lower cased and blank optional fields are cleared. Fails if any field is
/// not valid.
fn sanitize_profile(profile: UserProfile) -> Result<UserProfile, ErrorType> {
	let optional = |value: Option<String>| {
		value
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty())
	};
	let profile = UserProfile {
		first_name: profile.first_name.trim().to_string(),
		middle_name: optional(profile.middle_name),
		last_name: profile.last_name.trim().to_string(),
		phone: optional(profile.phone),
		email: service::normalize_email(&profile.email),
	};

	if !validator::is_email_valid(&profile.email) {
		return Err(ErrorType::InvalidEmail);
	}

	let names_valid = validator::is_name_valid(&profile.first_name) &&
		validator::is_name_valid(&profile.last_name) &&
		profile
			.middle_name
			.as_deref()
			.map_or(true, validator::is_name_valid);
	let phone_valid = profile
		.phone
		.as_deref()
		.map_or(true, validator::is_phone_number_valid);
	if !names_valid || !phone_valid {
		return Err(ErrorType::WrongParameters);
	}

	Ok(profile)
}
