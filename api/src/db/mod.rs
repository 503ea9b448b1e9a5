use std::str::FromStr;

use sqlx::{pool::PoolOptions, sqlite::SqliteConnectOptions, Pool};

use crate::{prelude::*, utils::config::DatabaseConfig};

mod initializer;
mod meta_data;
mod rbac;
mod telegram;
mod user;

pub use self::{initializer::*, meta_data::*, rbac::*, telegram::*, user::*};

pub type DatabaseType = sqlx::Sqlite;
pub type DatabaseConnection = <DatabaseType as sqlx::Database>::Connection;

/// Connects to the database based on a config. The database file is created if
/// it does not exist yet, and foreign keys are enforced on every connection.
#[instrument(skip(config))]
pub async fn connect(config: &DatabaseConfig) -> Result<Pool<DatabaseType>, sqlx::Error> {
	PoolOptions::<DatabaseType>::new()
		.max_connections(config.connection_limit)
		.connect_with(
			SqliteConnectOptions::from_str(&config.url)?
				.create_if_missing(true)
				.foreign_keys(true),
		)
		.await
}

/// Escapes a user provided search term for use in a `LIKE ... ESCAPE '\'`
/// clause, and wraps it to match anywhere in the column.
pub(crate) fn search_pattern(search: &str) -> String {
	let escaped = search
		.replace('\\', "\\\\")
		.replace('%', "\\%")
		.replace('_', "\\_");
	format!("%{escaped}%")
}

/// Looks up the column a user provided ordering field refers to. Only the
/// columns listed are accepted, so the result is safe to put in a query.
pub(crate) fn order_column(
	field: &str,
	allowed: &'static [&'static str],
) -> Result<&'static str, ErrorType> {
	allowed
		.iter()
		.find(|column| **column == field)
		.copied()
		.ok_or(ErrorType::WrongParameters)
}

/// Turns a unique constraint violation into the given conflict error. Any
/// other database error stays an internal error.
pub(crate) fn map_unique_violation(conflict: ErrorType) -> impl FnOnce(sqlx::Error) -> ErrorType {
	move |error| match error {
		sqlx::Error::Database(error) if error.is_unique_violation() => conflict,
		error => error.into(),
	}
}

#[cfg(test)]
mod tests {
	use super::{order_column, search_pattern};
	use crate::prelude::*;

	#[test]
	fn search_pattern_escapes_wildcards() {
		assert_eq!(search_pattern("ann"), "%ann%");
		assert_eq!(search_pattern("50%_off"), "%50\\%\\_off%");
	}

	#[test]
	fn unknown_order_columns_are_rejected() {
		assert_eq!(order_column("email", &["id", "email"]), Ok("email"));
		assert_eq!(
			order_column("password", &["id", "email"]),
			Err(ErrorType::WrongParameters)
		);
	}
}
