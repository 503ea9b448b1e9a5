use std::collections::BTreeSet;

use sqlx::FromRow;

use crate::{db, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Permission {
	pub id: i64,
	pub name: String,
	pub code: String,
	pub description: Option<String>,
}

/// The columns a list of permissions can be ordered by
pub const PERMISSION_ORDER_COLUMNS: &[&str] = &["id", "name", "code", "description"];

#[instrument(skip(connection))]
pub async fn create_permission(
	connection: &mut DatabaseConnection,
	name: &str,
	code: &str,
	description: Option<&str>,
) -> Result<i64, sqlx::Error> {
	sqlx::query_scalar(
		r#"
		INSERT INTO
			permission(
				name,
				code,
				description
			)
		VALUES
			(?1, ?2, ?3)
		RETURNING id;
		"#,
	)
	.bind(name)
	.bind(code)
	.bind(description)
	.fetch_one(&mut *connection)
	.await
}

/// Creates the permission unless one with that code exists
#[instrument(skip(connection))]
pub async fn ensure_permission_exists(
	connection: &mut DatabaseConnection,
	code: &str,
	name: &str,
	description: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			permission(
				name,
				code,
				description
			)
		VALUES
			(?1, ?2, ?3)
		ON CONFLICT(code) DO NOTHING;
		"#,
	)
	.bind(name)
	.bind(code)
	.bind(description)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}

#[instrument(skip(connection))]
pub async fn get_permission_by_id(
	connection: &mut DatabaseConnection,
	permission_id: i64,
) -> Result<Option<Permission>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			id,
			name,
			code,
			description
		FROM
			permission
		WHERE
			id = ?1;
		"#,
	)
	.bind(permission_id)
	.fetch_optional(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn get_permission_by_code(
	connection: &mut DatabaseConnection,
	code: &str,
) -> Result<Option<Permission>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			id,
			name,
			code,
			description
		FROM
			permission
		WHERE
			code = ?1;
		"#,
	)
	.bind(code)
	.fetch_optional(&mut *connection)
	.await
}

/// Lists a page of permissions whose code contains `search`. `order_by` must
/// be one of [`PERMISSION_ORDER_COLUMNS`].
#[instrument(skip(connection))]
pub async fn list_permissions(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
	order_by: &str,
	direction: &str,
	limit: u32,
	offset: u64,
) -> Result<Vec<Permission>, sqlx::Error> {
	sqlx::query_as(&format!(
		r#"
		SELECT
			id,
			name,
			code,
			description
		FROM
			permission
		WHERE
			?1 IS NULL OR
			code LIKE ?1 ESCAPE '\'
		ORDER BY
			{order_by} {direction},
			id {direction}
		LIMIT ?2
		OFFSET ?3;
		"#
	))
	.bind(search.map(db::search_pattern))
	.bind(i64::from(limit))
	.bind(i64::try_from(offset).unwrap_or(i64::MAX))
	.fetch_all(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn count_permissions(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
) -> Result<u64, sqlx::Error> {
	sqlx::query_scalar::<_, i64>(
		r#"
		SELECT
			COUNT(*)
		FROM
			permission
		WHERE
			?1 IS NULL OR
			code LIKE ?1 ESCAPE '\';
		"#,
	)
	.bind(search.map(db::search_pattern))
	.fetch_one(&mut *connection)
	.await
	.map(|count| count.max(0) as u64)
}

/// Returns false if the permission does not exist
#[instrument(skip(connection))]
pub async fn update_permission(
	connection: &mut DatabaseConnection,
	permission_id: i64,
	name: &str,
	code: &str,
	description: Option<&str>,
) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			permission
		SET
			name = ?2,
			code = ?3,
			description = ?4
		WHERE
			id = ?1;
		"#,
	)
	.bind(permission_id)
	.bind(name)
	.bind(code)
	.bind(description)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

/// Returns false if the permission does not exist
#[instrument(skip(connection))]
pub async fn delete_permission(
	connection: &mut DatabaseConnection,
	permission_id: i64,
) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			permission
		WHERE
			id = ?1;
		"#,
	)
	.bind(permission_id)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

#[instrument(skip(connection))]
pub async fn get_permissions_for_role(
	connection: &mut DatabaseConnection,
	role_id: i64,
) -> Result<Vec<Permission>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			permission.id,
			permission.name,
			permission.code,
			permission.description
		FROM
			permission
		INNER JOIN
			role_permission
		ON
			role_permission.permission_id = permission.id
		WHERE
			role_permission.role_id = ?1
		ORDER BY
			permission.id;
		"#,
	)
	.bind(role_id)
	.fetch_all(&mut *connection)
	.await
}

/// The permissions granted to the user directly, not through any role
#[instrument(skip(connection))]
pub async fn get_direct_permissions_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<Permission>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			permission.id,
			permission.name,
			permission.code,
			permission.description
		FROM
			permission
		INNER JOIN
			user_permission
		ON
			user_permission.permission_id = permission.id
		WHERE
			user_permission.user_id = ?1
		ORDER BY
			permission.id;
		"#,
	)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await
}

/// The codes of every permission the user holds through their roles. A code
/// appears once for every role that grants it.
#[instrument(skip(connection))]
pub async fn get_role_permission_codes_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
	sqlx::query_scalar(
		r#"
		SELECT
			permission.code
		FROM
			permission
		INNER JOIN
			role_permission
		ON
			role_permission.permission_id = permission.id
		INNER JOIN
			user_role
		ON
			user_role.role_id = role_permission.role_id
		WHERE
			user_role.user_id = ?1;
		"#,
	)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await
}

/// The codes of every permission granted to the user directly
#[instrument(skip(connection))]
pub async fn get_direct_permission_codes_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
	sqlx::query_scalar(
		r#"
		SELECT
			permission.code
		FROM
			permission
		INNER JOIN
			user_permission
		ON
			user_permission.permission_id = permission.id
		WHERE
			user_permission.user_id = ?1;
		"#,
	)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await
}

/// Replaces every permission of the role with the given ones. IDs of
/// permissions that do not exist are skipped. Run this inside a transaction so
/// that the role is never observed with a partial set of permissions.
#[instrument(skip(connection))]
pub async fn set_permissions_for_role(
	connection: &mut DatabaseConnection,
	role_id: i64,
	permission_ids: &BTreeSet<i64>,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			role_permission
		WHERE
			role_id = ?1;
		"#,
	)
	.bind(role_id)
	.execute(&mut *connection)
	.await?;

	for permission_id in permission_ids {
		sqlx::query(
			r#"
			INSERT INTO
				role_permission(
					role_id,
					permission_id
				)
			SELECT
				?1,
				id
			FROM
				permission
			WHERE
				id = ?2;
			"#,
		)
		.bind(role_id)
		.bind(permission_id)
		.execute(&mut *connection)
		.await?;
	}

	Ok(())
}

/// Replaces every permission granted directly to the user with the given
/// ones. IDs of permissions that do not exist are skipped. Run this inside a
/// transaction so that the user is never observed with a partial set of
/// permissions.
#[instrument(skip(connection))]
pub async fn set_permissions_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
	permission_ids: &BTreeSet<i64>,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			user_permission
		WHERE
			user_id = ?1;
		"#,
	)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	for permission_id in permission_ids {
		sqlx::query(
			r#"
			INSERT INTO
				user_permission(
					user_id,
					permission_id
				)
			SELECT
				?1,
				id
			FROM
				permission
			WHERE
				id = ?2;
			"#,
		)
		.bind(user_id)
		.bind(permission_id)
		.execute(&mut *connection)
		.await?;
	}

	Ok(())
}

/// Adds the permissions with the given codes to the role, keeping the ones it
/// already holds. Unknown codes are skipped.
#[instrument(skip(connection, codes))]
pub async fn grant_permission_codes_to_role(
	connection: &mut DatabaseConnection,
	role_id: i64,
	codes: &[String],
) -> Result<(), sqlx::Error> {
	for code in codes {
		sqlx::query(
			r#"
			INSERT INTO
				role_permission(
					role_id,
					permission_id
				)
			SELECT
				?1,
				id
			FROM
				permission
			WHERE
				code = ?2
			ON CONFLICT DO NOTHING;
			"#,
		)
		.bind(role_id)
		.bind(code)
		.execute(&mut *connection)
		.await?;
	}

	Ok(())
}
