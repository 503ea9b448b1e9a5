use models::api::{permission::Permission, user::User};

use super::{get_current_time, get_roles_of_user, hash_password};
use crate::{db, prelude::*, utils::validator};

/// Builds the full representation of a user, including their roles and
/// direct permissions
pub async fn get_user_details(
	connection: &mut DatabaseConnection,
	user: db::User,
) -> Result<User, ErrorType> {
	let roles = get_roles_of_user(connection, user.id).await?;
	let permissions = db::get_direct_permissions_for_user(connection, user.id)
		.await?
		.into_iter()
		.map(Permission::from)
		.collect();

	Ok(User {
		id: user.id,
		first_name: user.first_name,
		middle_name: user.middle_name,
		last_name: user.last_name,
		phone: user.phone,
		email: user.email,
		avatar_url: user.avatar_url,
		roles,
		permissions,
	})
}

/// Looks up a user by their ID and builds their full representation
#[instrument(skip(connection))]
pub async fn get_user_details_by_id(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<User, ErrorType> {
	let user = db::get_user_by_id(connection, user_id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;

	get_user_details(connection, user).await
}

/// Emails are compared and stored without surrounding whitespace and in lower
/// case
pub fn normalize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

/// Creates the configured bootstrap account if it does not exist yet, and
/// makes sure it holds the admin role.
pub async fn initialize_bootstrap_user(state: &AppState) -> anyhow::Result<()> {
	let Some(bootstrap) = &state.config.bootstrap else {
		debug!("No bootstrap user configured");
		return Ok(());
	};

	let email = normalize_email(&bootstrap.email);
	if !validator::is_email_valid(&email) {
		anyhow::bail!("bootstrap email `{}` is not a valid email", email);
	}

	let mut transaction = state.database.begin().await?;

	let user_id = match db::get_user_by_email(&mut transaction, &email).await? {
		Some(user) => user.id,
		None => {
			let password = hash_password(&bootstrap.password, &state.config.password_pepper)
				.map_err(|_| anyhow::anyhow!("unable to hash the bootstrap password"))?;
			let user_id = db::create_user(
				&mut transaction,
				&db::UserToSignUp::builder()
					.first_name(&bootstrap.first_name)
					.last_name(&bootstrap.last_name)
					.email(&email)
					.password(&password)
					.created(get_current_time())
					.build(),
			)
			.await?;
			info!("Created bootstrap user `{}`", email);
			user_id
		}
	};

	let admin_role = db::get_role_by_name(&mut transaction, constants::ADMIN_ROLE_NAME)
		.await?
		.ok_or_else(|| anyhow::anyhow!("the admin role does not exist"))?;
	db::add_role_to_user(&mut transaction, user_id, admin_role.id).await?;

	transaction.commit().await?;

	Ok(())
}
