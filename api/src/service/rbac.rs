use std::collections::BTreeSet;

use models::{
	api::{
		permission::Permission,
		role::Role,
		user::EffectivePermissions,
	},
	rbac,
};

use crate::{db, prelude::*};

impl From<db::Permission> for Permission {
	fn from(permission: db::Permission) -> Self {
		Self {
			id: permission.id,
			name: permission.name,
			code: permission.code,
			description: permission.description,
		}
	}
}

/// Computes the effective permission codes of a user, from their roles and
/// their direct grants. Fails with [`ErrorType::ResourceDoesNotExist`] if the
/// user does not exist.
#[instrument(skip(connection))]
pub async fn get_effective_permission_codes(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<BTreeSet<String>, ErrorType> {
	if db::get_user_by_id(connection, user_id).await?.is_none() {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	let role_codes = db::get_role_permission_codes_for_user(connection, user_id).await?;
	let direct_codes = db::get_direct_permission_codes_for_user(connection, user_id).await?;

	Ok(rbac::effective_permissions(role_codes, direct_codes))
}

/// The authorization gate. Resolves the user's effective permissions fresh
/// from the database and checks that they include `code`. Returns the
/// effective permissions if they do.
#[instrument(skip(connection))]
pub async fn authorize(
	connection: &mut DatabaseConnection,
	user_id: i64,
	code: PermissionCode,
) -> Result<BTreeSet<String>, ErrorType> {
	let permissions = get_effective_permission_codes(connection, user_id).await?;

	if !rbac::permits(&permissions, code) {
		warn!("User `{}` does not hold the permission `{}`", user_id, code);
		return Err(ErrorType::Forbidden);
	}

	Ok(permissions)
}

/// The roles of a user along with their effective permission codes
#[instrument(skip(connection))]
pub async fn get_effective_permissions(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<EffectivePermissions, ErrorType> {
	let permissions = get_effective_permission_codes(connection, user_id).await?;
	let roles = get_roles_of_user(connection, user_id).await?;

	Ok(EffectivePermissions { roles, permissions })
}

/// Builds the full representation of a role, including its permissions
pub async fn get_role_details(
	connection: &mut DatabaseConnection,
	role: db::Role,
) -> Result<Role, ErrorType> {
	let permissions = db::get_permissions_for_role(connection, role.id)
		.await?
		.into_iter()
		.map(Permission::from)
		.collect();

	Ok(Role {
		id: role.id,
		name: role.name,
		description: role.description,
		permissions,
	})
}

/// Looks up a role by its ID and builds its full representation
#[instrument(skip(connection))]
pub async fn get_role_details_by_id(
	connection: &mut DatabaseConnection,
	role_id: i64,
) -> Result<Role, ErrorType> {
	let role = db::get_role_by_id(connection, role_id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	get_role_details(connection, role).await
}

/// The roles assigned to a user, each with its permissions
pub async fn get_roles_of_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<Role>, ErrorType> {
	let mut roles = Vec::new();
	for role in db::get_roles_for_user(connection, user_id).await? {
		roles.push(get_role_details(connection, role).await?);
	}
	Ok(roles)
}
