use strum::IntoEnumIterator;

use crate::{db, prelude::*};

mod permission;
mod role;

pub use self::{permission::*, role::*};

pub async fn initialize_rbac_tables(connection: &mut DatabaseConnection) -> Result<(), sqlx::Error> {
	info!("Setting up rbac tables");

	sqlx::query(
		r#"
		CREATE TABLE role(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT NOT NULL
				CONSTRAINT role_uq_name UNIQUE,
			description TEXT
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE permission(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT NOT NULL,
			code TEXT NOT NULL
				CONSTRAINT permission_uq_code UNIQUE,
			description TEXT
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE user_role(
			user_id INTEGER NOT NULL
				CONSTRAINT user_role_fk_user_id
					REFERENCES user(id) ON DELETE CASCADE,
			role_id INTEGER NOT NULL
				CONSTRAINT user_role_fk_role_id
					REFERENCES role(id) ON DELETE CASCADE,
			CONSTRAINT user_role_pk PRIMARY KEY(user_id, role_id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE user_permission(
			user_id INTEGER NOT NULL
				CONSTRAINT user_permission_fk_user_id
					REFERENCES user(id) ON DELETE CASCADE,
			permission_id INTEGER NOT NULL
				CONSTRAINT user_permission_fk_permission_id
					REFERENCES permission(id) ON DELETE CASCADE,
			CONSTRAINT user_permission_pk PRIMARY KEY(user_id, permission_id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE role_permission(
			role_id INTEGER NOT NULL
				CONSTRAINT role_permission_fk_role_id
					REFERENCES role(id) ON DELETE CASCADE,
			permission_id INTEGER NOT NULL
				CONSTRAINT role_permission_fk_permission_id
					REFERENCES permission(id) ON DELETE CASCADE,
			CONSTRAINT role_permission_pk PRIMARY KEY(role_id, permission_id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Makes sure every built-in permission exists, and that the admin role exists
/// and holds all of them. Safe to run on every start-up.
pub async fn initialize_rbac_data(connection: &mut DatabaseConnection) -> Result<(), sqlx::Error> {
	info!("Initializing rbac data");

	for code in PermissionCode::iter() {
		db::ensure_permission_exists(&mut *connection, code.code(), code.name(), code.description())
			.await?;
	}

	let admin_role_id = db::ensure_role_exists(
		&mut *connection,
		constants::ADMIN_ROLE_NAME,
		"Holds every built-in permission",
	)
	.await?;

	let codes = PermissionCode::iter()
		.map(|code| code.code().to_string())
		.collect::<Vec<_>>();
	db::grant_permission_codes_to_role(&mut *connection, admin_role_id, &codes).await?;

	debug!("Admin role `{}` holds {} permissions", admin_role_id, codes.len());

	Ok(())
}
