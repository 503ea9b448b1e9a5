use sqlx::FromRow;
use typed_builder::TypedBuilder;

use crate::{db, prelude::*};

/// A user as stored in the database, including their credentials
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
	pub id: i64,
	pub first_name: String,
	pub middle_name: Option<String>,
	pub last_name: String,
	pub phone: Option<String>,
	pub email: String,
	pub password: String,
	pub avatar_url: Option<String>,
	pub reset_token_hash: Option<String>,
	pub reset_token_expiry: Option<i64>,
	pub created: i64,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct UserToSignUp<'a> {
	pub first_name: &'a str,
	#[builder(default)]
	pub middle_name: Option<&'a str>,
	pub last_name: &'a str,
	#[builder(default)]
	pub phone: Option<&'a str>,
	pub email: &'a str,
	/// Already hashed
	pub password: &'a str,
	#[builder(default)]
	pub avatar_url: Option<&'a str>,
	pub created: i64,
}

/// The editable profile fields of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
	pub first_name: String,
	pub middle_name: Option<String>,
	pub last_name: String,
	pub phone: Option<String>,
	pub email: String,
}

impl From<User> for UserProfile {
	fn from(user: User) -> Self {
		Self {
			first_name: user.first_name,
			middle_name: user.middle_name,
			last_name: user.last_name,
			phone: user.phone,
			email: user.email,
		}
	}
}

/// The columns a list of users can be ordered by
pub const USER_ORDER_COLUMNS: &[&str] = &[
	"id",
	"first_name",
	"middle_name",
	"last_name",
	"phone",
	"email",
	"created",
];

pub async fn initialize_user_tables(connection: &mut DatabaseConnection) -> Result<(), sqlx::Error> {
	info!("Setting up user tables");
	sqlx::query(
		r#"
		CREATE TABLE user(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			first_name TEXT NOT NULL,
			middle_name TEXT,
			last_name TEXT NOT NULL,
			phone TEXT,
			email TEXT NOT NULL
				CONSTRAINT user_uq_email UNIQUE,
			password TEXT NOT NULL,
			avatar_url TEXT,
			reset_token_hash TEXT,
			reset_token_expiry INTEGER,
			created INTEGER NOT NULL,
			CONSTRAINT user_chk_reset_token CHECK(
				(reset_token_hash IS NULL AND reset_token_expiry IS NULL) OR
				(reset_token_hash IS NOT NULL AND reset_token_expiry IS NOT NULL)
			)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE INDEX user_idx_reset_token_hash
		ON user(reset_token_hash);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

#[instrument(skip(connection, user))]
pub async fn create_user(
	connection: &mut DatabaseConnection,
	user: &UserToSignUp<'_>,
) -> Result<i64, sqlx::Error> {
	sqlx::query_scalar(
		r#"
		INSERT INTO
			user(
				first_name,
				middle_name,
				last_name,
				phone,
				email,
				password,
				avatar_url,
				created
			)
		VALUES
			(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
		RETURNING id;
		"#,
	)
	.bind(user.first_name)
	.bind(user.middle_name)
	.bind(user.last_name)
	.bind(user.phone)
	.bind(user.email)
	.bind(user.password)
	.bind(user.avatar_url)
	.bind(user.created)
	.fetch_one(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn get_user_by_id(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			user
		WHERE
			id = ?1;
		"#,
	)
	.bind(user_id)
	.fetch_optional(&mut *connection)
	.await
}

#[instrument(skip(connection))]
pub async fn get_user_by_email(
	connection: &mut DatabaseConnection,
	email: &str,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			user
		WHERE
			email = ?1;
		"#,
	)
	.bind(email)
	.fetch_optional(&mut *connection)
	.await
}

/// Lists a page of users whose names, phone or email contain `search`.
/// `order_by` must be one of [`USER_ORDER_COLUMNS`].
#[instrument(skip(connection))]
pub async fn list_users(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
	order_by: &str,
	direction: &str,
	limit: u32,
	offset: u64,
) -> Result<Vec<User>, sqlx::Error> {
	sqlx::query_as(&format!(
		r#"
		SELECT
			*
		FROM
			user
		WHERE
			?1 IS NULL OR
			first_name LIKE ?1 ESCAPE '\' OR
			middle_name LIKE ?1 ESCAPE '\' OR
			last_name LIKE ?1 ESCAPE '\' OR
			phone LIKE ?1 ESCAPE '\' OR
			email LIKE ?1 ESCAPE '\'
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
pub async fn count_users(
	connection: &mut DatabaseConnection,
	search: Option<&str>,
) -> Result<u64, sqlx::Error> {
	sqlx::query_scalar::<_, i64>(
		r#"
		SELECT
			COUNT(*)
		FROM
			user
		WHERE
			?1 IS NULL OR
			first_name LIKE ?1 ESCAPE '\' OR
			middle_name LIKE ?1 ESCAPE '\' OR
			last_name LIKE ?1 ESCAPE '\' OR
			phone LIKE ?1 ESCAPE '\' OR
			email LIKE ?1 ESCAPE '\';
		"#,
	)
	.bind(search.map(db::search_pattern))
	.fetch_one(&mut *connection)
	.await
	.map(|count| count.max(0) as u64)
}

/// Returns false if the user does not exist
#[instrument(skip(connection, profile))]
pub async fn update_user_profile(
	connection: &mut DatabaseConnection,
	user_id: i64,
	profile: &UserProfile,
) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			user
		SET
			first_name = ?2,
			middle_name = ?3,
			last_name = ?4,
			phone = ?5,
			email = ?6
		WHERE
			id = ?1;
		"#,
	)
	.bind(user_id)
	.bind(&profile.first_name)
	.bind(&profile.middle_name)
	.bind(&profile.last_name)
	.bind(&profile.phone)
	.bind(&profile.email)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

/// Returns false if the user does not exist
#[instrument(skip(connection))]
pub async fn delete_user(connection: &mut DatabaseConnection, user_id: i64) -> Result<bool, sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			user
		WHERE
			id = ?1;
		"#,
	)
	.bind(user_id)
	.execute(&mut *connection)
	.await
	.map(|result| result.rows_affected() > 0)
}

#[instrument(skip(connection, token_hash))]
pub async fn set_password_reset_token(
	connection: &mut DatabaseConnection,
	user_id: i64,
	token_hash: &str,
	expiry: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			user
		SET
			reset_token_hash = ?2,
			reset_token_expiry = ?3
		WHERE
			id = ?1;
		"#,
	)
	.bind(user_id)
	.bind(token_hash)
	.bind(expiry)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}

/// Finds the user holding the given reset token, if it has not expired by
/// `now`
#[instrument(skip(connection, token_hash))]
pub async fn get_user_by_reset_token(
	connection: &mut DatabaseConnection,
	token_hash: &str,
	now: i64,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			user
		WHERE
			reset_token_hash = ?1 AND
			reset_token_expiry > ?2;
		"#,
	)
	.bind(token_hash)
	.bind(now)
	.fetch_optional(&mut *connection)
	.await
}

/// Sets a new password hash, and invalidates any pending reset token
#[instrument(skip(connection, password_hash))]
pub async fn update_user_password(
	connection: &mut DatabaseConnection,
	user_id: i64,
	password_hash: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			user
		SET
			password = ?2,
			reset_token_hash = NULL,
			reset_token_expiry = NULL
		WHERE
			id = ?1;
		"#,
	)
	.bind(user_id)
	.bind(password_hash)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}
