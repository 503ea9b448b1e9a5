use crate::prelude::*;

/// Which way a bot message travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
	/// Sent by a Telegram user to the bot
	Incoming,
	/// Sent by the bot to a Telegram user
	Outgoing,
}

impl MessageDirection {
	fn as_str(&self) -> &'static str {
		match self {
			Self::Incoming => "in",
			Self::Outgoing => "out",
		}
	}
}

pub async fn initialize_telegram_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up telegram tables");

	sqlx::query(
		r#"
		CREATE TABLE telegram_user(
			telegram_id INTEGER NOT NULL PRIMARY KEY,
			username TEXT,
			first_name TEXT,
			last_name TEXT,
			first_seen INTEGER NOT NULL,
			last_seen INTEGER NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE telegram_message(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			telegram_id INTEGER NOT NULL,
			message TEXT NOT NULL,
			direction TEXT NOT NULL
				CONSTRAINT telegram_message_chk_direction CHECK(direction IN ('in', 'out')),
			created INTEGER NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE INDEX telegram_message_idx_telegram_id
		ON telegram_message(telegram_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Records a Telegram user the bot has heard from, refreshing their names if
/// they were seen before
#[instrument(skip(connection))]
pub async fn upsert_telegram_user(
	connection: &mut DatabaseConnection,
	telegram_id: i64,
	username: Option<&str>,
	first_name: Option<&str>,
	last_name: Option<&str>,
	now: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			telegram_user(
				telegram_id,
				username,
				first_name,
				last_name,
				first_seen,
				last_seen
			)
		VALUES
			(?1, ?2, ?3, ?4, ?5, ?5)
		ON CONFLICT(telegram_id) DO UPDATE SET
			username = EXCLUDED.username,
			first_name = EXCLUDED.first_name,
			last_name = EXCLUDED.last_name,
			last_seen = EXCLUDED.last_seen;
		"#,
	)
	.bind(telegram_id)
	.bind(username)
	.bind(first_name)
	.bind(last_name)
	.bind(now)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}

#[instrument(skip(connection, message))]
pub async fn add_telegram_message(
	connection: &mut DatabaseConnection,
	telegram_id: i64,
	message: &str,
	direction: MessageDirection,
	now: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			telegram_message(
				telegram_id,
				message,
				direction,
				created
			)
		VALUES
			(?1, ?2, ?3, ?4);
		"#,
	)
	.bind(telegram_id)
	.bind(message)
	.bind(direction.as_str())
	.bind(now)
	.execute(&mut *connection)
	.await
	.map(|_| ())
}
