mod http;
mod telegram;

use std::{path::PathBuf, str::FromStr, time::Duration};

use rand::Rng;
use sqlx::{pool::PoolOptions, sqlite::SqliteConnectOptions};

use crate::{
	db,
	prelude::*,
	service,
	utils::config::{AppConfig, DatabaseConfig, JwtConfig, RunningEnvironment, UploadConfig},
};

pub(super) const TEST_PASSWORD: &str = "correct horse battery";

pub(super) fn test_config() -> AppConfig {
	AppConfig {
		bind_addr: "127.0.0.1:0".parse().expect("valid address"),
		environment: RunningEnvironment::Development,
		password_pepper: "test-pepper".to_string(),
		jwt: JwtConfig {
			access_secret: "test-access-secret".to_string(),
			refresh_secret: "test-refresh-secret".to_string(),
			issuer: "sophor".to_string(),
			access_token_validity: 900,
			refresh_token_validity: 604800,
		},
		database: DatabaseConfig {
			url: "sqlite::memory:".to_string(),
			connection_limit: 1,
		},
		upload: UploadConfig {
			directory: test_upload_directory(),
			max_size: 1024 * 1024,
		},
		bootstrap: None,
		telegram: None,
	}
}

fn test_upload_directory() -> PathBuf {
	std::env::temp_dir().join(format!(
		"sophor-test-uploads-{}",
		rand::thread_rng().gen::<u64>()
	))
}

/// Creates an application state backed by a fresh in-memory database. The
/// pool holds a single connection that is never closed, since closing it
/// would drop the database.
pub(super) async fn init_tests() -> anyhow::Result<AppState> {
	init_tests_with_config(test_config()).await
}

pub(super) async fn init_tests_with_config(config: AppConfig) -> anyhow::Result<AppState> {
	let database = PoolOptions::<DatabaseType>::new()
		.max_connections(1)
		.idle_timeout(None::<Duration>)
		.max_lifetime(None::<Duration>)
		.connect_with(SqliteConnectOptions::from_str(&config.database.url)?.foreign_keys(true))
		.await?;
	db::initialize(&database).await?;

	Ok(AppState::new(config, database)?)
}

/// Creates a user with [`TEST_PASSWORD`] as their password
pub(super) async fn create_test_user(
	state: &AppState,
	email: &str,
) -> anyhow::Result<i64> {
	let password = service::hash_password(TEST_PASSWORD, &state.config.password_pepper)
		.map_err(|_| anyhow::anyhow!("unable to hash password"))?;
	let mut connection = state.database.acquire().await?;
	Ok(db::create_user(
		&mut connection,
		&db::UserToSignUp::builder()
			.first_name("Test")
			.last_name("User")
			.email(email)
			.password(&password)
			.created(service::get_current_time())
			.build(),
	)
	.await?)
}

/// Creates a role holding the given built-in permissions
pub(super) async fn create_test_role(
	connection: &mut DatabaseConnection,
	name: &str,
	codes: &[PermissionCode],
) -> anyhow::Result<i64> {
	let role_id = db::create_role(connection, name, None).await?;
	let codes = codes
		.iter()
		.map(|code| code.code().to_string())
		.collect::<Vec<_>>();
	db::grant_permission_codes_to_role(connection, role_id, &codes).await?;
	Ok(role_id)
}

pub(super) async fn get_permission_id(
	connection: &mut DatabaseConnection,
	code: PermissionCode,
) -> anyhow::Result<i64> {
	db::get_permission_by_code(connection, code.code())
		.await?
		.map(|permission| permission.id)
		.ok_or_else(|| anyhow::anyhow!("permission `{}` does not exist", code))
}
