use std::cmp::Ordering;

use sqlx::Pool;

use crate::{db, prelude::*};

/// Creates the schema on a fresh database, or checks that an existing one is
/// of a version this build understands. Then makes sure every built-in
/// permission, and the admin role holding them, exist.
pub async fn initialize(database: &Pool<DatabaseType>) -> anyhow::Result<()> {
	info!("Initializing database");

	let mut transaction = database.begin().await?;

	db::initialize_meta_tables(&mut transaction).await?;
	let version = db::get_database_version(&mut transaction).await?;

	match version {
		None => {
			warn!("No tables exist. Creating fresh");

			db::initialize_user_tables(&mut transaction).await?;
			db::initialize_rbac_tables(&mut transaction).await?;
			db::initialize_telegram_tables(&mut transaction).await?;

			db::set_database_version(&mut transaction, &constants::DATABASE_VERSION).await?;

			info!("Database created fresh");
		}
		Some(version) => match version.cmp(&constants::DATABASE_VERSION) {
			Ordering::Greater => {
				error!("Database version is higher than what's recognised. Exiting...");
				anyhow::bail!(
					"database schema version {} is newer than {}",
					version,
					constants::DATABASE_VERSION
				);
			}
			Ordering::Less => {
				error!("No migration exists from database version {}. Exiting...", version);
				anyhow::bail!(
					"database schema version {} cannot be migrated to {}",
					version,
					constants::DATABASE_VERSION
				);
			}
			Ordering::Equal => {
				info!("Database already in the latest version. No migration required.");
			}
		},
	}

	db::initialize_rbac_data(&mut transaction).await?;

	transaction.commit().await?;

	Ok(())
}
