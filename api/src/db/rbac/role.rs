use std::collections::BTreeSet;

use sqlx::FromRow;

use crate::{db, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Role {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
}

/// The columns a list of roles can be ordered by
pub const ROLE_ORDER_COLUMNS: &[&str] = &["id", "name", "description"];

#[instrument(skip(connection))]
pub async fn create_role(
	connection: &mut DatabaseConnection,
	name: &str,
	description: Option<&str>,
) -> Result<i64, sqlx::Error> {
	sqlx::query_scalar(
		r#"
		INSERT INTO
			role(
				name,
				description
			)
		VALUES
			(?1, ?2)
		RETURNING id;
		"#,
	)
	.bind(name)
	.bind(description)
	.fetch_one(&mut *connection)
	.await
}

/// Creates the role unless one with that name exists. Returns its ID either way
#[instrument(skip(connection))]
pub async fn ensure_role_exists(
	connection: &mut DatabaseConnection,
	name: &str,
	description: &str,
) -> Result<i64, sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			role(
				name,
				description
			)
		VALUES
			(?1, ?2)
		ON CONFLICT(name) DO NOTHING;
		"#,
	)
	.bind(name)
	.bind(description)
	.execute(&mut *connection)
	.await?;

	sqlx::query_scalar(
		r#"
		SELECT
			id
		FROM
			role
		WHERE
			name = ?1;
		"#,
	)
	.bind(name)
	.fetch_one(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn get_role_by_id(
	connection: &mut DatabaseConnection,
	role_id: i64,
) -> Result<Option<Role>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			id,
			name,
			description
		FROM
			role
		WHERE
			id = ?1;
		"#,
	)
	.bind(role_id)
	.fetch_optional(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn get_role_by_name(
	connection: &mut DatabaseConnection,
	name: &str,
) -> Result<Option<Role>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			id,
			name,
			description
		FROM
			role
		WHERE
			name = ?1;
		"#,
	)
	.bind(name)
	.fetch_optional(&mut *connection)
	.await
}

/// Lists a page of roles whose name contains `search`. `order_by` must be one
/// of [`ROLE_ORDER_COLUMNS`].
#[instrument(skip(connection))]
pub async fn list_roles(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
	order_by: &str,
	direction: &str,
	limit: u32,
	offset: u64,
) -> Result<Vec<Role>, sqlx::Error> {
	sqlx::query_as(&format!(
		r#"
		SELECT
			id,
			name,
			description
		FROM
			role
		WHERE
			?1 IS NULL OR
			name LIKE ?1 ESCAPE '\'
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
pub async fn count_roles(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
) -> Result<u64, sqlx::Error> {
	sqlx::query_scalar::<_, i64>(
		r#"
		SELECT
			COUNT(*)
		FROM
			role
		WHERE
			?1 IS NULL OR
			name LIKE ?1 ESCAPE '\';
		"#,
	)
	.bind(search.map(db::search_pattern))
	.fetch_one(&mut *connection)
	.await
	.map(|count| count.max(0) as u64)
}

/// Returns false if the role does not exist
#[instrument(skip(connection))]
pub async fn update_role(
	connection: &mut DatabaseConnection,
	role_id: i64,
	name: &str,
	description: Option<&str>,
) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			role
		SET
			name = ?2,
			description = ?3
		WHERE
			id = ?1;
		"#,
	)
	.bind(role_id)
	.bind(name)
	.bind(description)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

/// Returns false if the role does not exist
#[instrument(skip(connection))]
pub async fn delete_role(connection: &mut DatabaseConnection, role_id: i64) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			role
		WHERE
			id = ?1;
		"#,
	)
	.bind(role_id)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

#[instrument(skip(connection))]
pub async fn get_roles_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<Role>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			role.id,
			role.name,
			role.description
		FROM
			role
		INNER JOIN
			user_role
		ON
			user_role.role_id = role.id
		WHERE
			user_role.user_id = ?1
		ORDER BY
			role.id;
		"#,
	)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await
}

/// Replaces every role of the user with the given ones. IDs of roles that do
/// not exist are skipped. Run this inside a transaction so that the user is
/// never observed with a partial set of roles.
#[instrument(skip(connection))]
pub async fn set_roles_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
	role_ids: &BTreeSet<i64>,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			user_role
		WHERE
			user_id = ?1;
		"#,
	)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	for role_id in role_ids {
		sqlx::query(
			r#"
			INSERT INTO
				user_role(
					user_id,
					role_id
				)
			SELECT
				?1,
				id
			FROM
				role
			WHERE
				id = ?2;
			"#,
		)
		.bind(user_id)
		.bind(role_id)
		.execute(&mut *connection)
		.await?;
	}

	Ok(())
}

/// Assigns a single role to a user, keeping their other roles
#[instrument(skip(connection))]
pub async fn add_role_to_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
	role_id: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			user_role(
				user_id,
				role_id
			)
		VALUES
			(?1, ?2)
		ON CONFLICT DO NOTHING;
		"#,
	)
	.bind(user_id)
	.bind(role_id)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}
