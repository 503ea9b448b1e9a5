use semver::Version;

use crate::prelude::*;

pub async fn initialize_meta_tables(connection: &mut DatabaseConnection) -> Result<(), sqlx::Error> {
	info!("Initializing meta tables");
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS meta_data(
			id TEXT NOT NULL PRIMARY KEY,
			value TEXT NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn set_database_version(
	connection: &mut DatabaseConnection,
	version: &Version,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			meta_data(id, value)
		VALUES
			('version_major', ?1),
			('version_minor', ?2),
			('version_patch', ?3)
		ON CONFLICT(id) DO UPDATE SET
			value = EXCLUDED.value;
		"#,
	)
	.bind(version.major.to_string())
	.bind(version.minor.to_string())
	.bind(version.patch.to_string())
	.execute(&mut *connection)
	.await
	.map(|_| ())
}

/// Returns `None` if the database has never been initialized
pub async fn get_database_version(
	connection: &mut DatabaseConnection,
) -> Result<Option<Version>, sqlx::Error> {
	let rows = sqlx::query_as::<_, (String, String)>(
		r#"
		SELECT
			id,
			value
		FROM
			meta_data
		WHERE
			id = 'version_major' OR
			id = 'version_minor' OR
			id = 'version_patch';
		"#,
	)
	.fetch_all(&mut *connection)
	.await?;

	if rows.is_empty() {
		return Ok(None);
	}

	let mut version = Version::new(0, 0, 0);

	// If versions can't be parsed, assume it to be the max value, so that
	// migrations would fail
	for (id, value) in rows {
		match id.as_str() {
			"version_major" => {
				version.major = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			"version_minor" => {
				version.minor = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			"version_patch" => {
				version.patch = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			_ => {}
		}
	}

	Ok(Some(version))
}
