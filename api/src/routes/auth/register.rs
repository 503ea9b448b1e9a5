use std::path::{Path, PathBuf};

use axum::{
	body::Bytes,
	extract::{multipart::MultipartError, Multipart, State},
	Json,
};
use models::api::auth::*;

use super::create_auth_response;
use crate::{db, prelude::*, service, utils::validator};

/// An uploaded avatar, before it is written to disk
struct Avatar {
	/// The extension of the uploaded file, including the leading dot
	extension: String,
	data: Bytes,
}

pub async fn register(
	State(state): State<AppState>,
	multipart: Multipart,
) -> Result<Json<AuthResponse>, ErrorType> {
	info!("Starting: Register");

	let (request, avatar) = read_register_form(multipart).await?;
	let avatar = avatar.ok_or(ErrorType::AvatarRequired)?;

	let email = service::normalize_email(&request.email);
	validate_register_request(&request, &email)?;

	let mut connection = state.database.acquire().await?;
	if db::get_user_by_email(&mut connection, &email).await?.is_some() {
		return Err(ErrorType::EmailUnavailable);
	}

	let (path, avatar_url) = save_avatar(&state.config.upload.directory, &avatar).await?;

	match create_account(&mut connection, &state, &request, &email, &avatar_url).await {
		Ok(response) => {
			info!("User `{}` registered", response.id);
			Ok(Json(response))
		}
		Err(error) => {
			if let Err(err) = tokio::fs::remove_file(&path).await {
				warn!("Unable to remove avatar `{}`: {}", path.display(), err);
			}
			Err(error)
		}
	}
}

/// Reads the text fields and the avatar out of the multipart form. Unknown
/// fields are skipped.
async fn read_register_form(
	mut multipart: Multipart,
) -> Result<(RegisterRequest, Option<Avatar>), ErrorType> {
	let mut request = RegisterRequest::default();
	let mut avatar = None;

	while let Some(field) = multipart.next_field().await.map_err(reject_form)? {
		let Some(name) = field.name().map(str::to_string) else {
			continue;
		};

		if name == RegisterRequest::AVATAR_FIELD {
			let extension = field
				.file_name()
				.and_then(|file_name| Path::new(file_name).extension())
				.and_then(|extension| extension.to_str())
				.map(|extension| format!(".{}", extension.to_lowercase()))
				.unwrap_or_default();
			let data = field.bytes().await.map_err(reject_form)?;
			if !data.is_empty() {
				avatar = Some(Avatar { extension, data });
			}
			continue;
		}

		let value = field.text().await.map_err(reject_form)?;
		let optional = Some(value.trim().to_string()).filter(|value| !value.is_empty());
		match name.as_str() {
			"first_name" => request.first_name = value,
			"middle_name" => request.middle_name = optional,
			"last_name" => request.last_name = value,
			"phone" => request.phone = optional,
			"email" => request.email = value,
			"password" => request.password = value,
			unknown => trace!("Ignoring unknown register field `{}`", unknown),
		}
	}

	Ok((request, avatar))
}

fn reject_form(error: MultipartError) -> ErrorType {
	warn!("Unable to read register form: {}", error);
	ErrorType::WrongParameters
}

fn validate_register_request(request: &RegisterRequest, email: &str) -> Result<(), ErrorType> {
	if !validator::is_email_valid(email) {
		return Err(ErrorType::InvalidEmail);
	}

	if !validator::is_password_valid(&request.password) {
		return Err(ErrorType::PasswordTooWeak);
	}

	let names_valid = validator::is_name_valid(&request.first_name) &&
		validator::is_name_valid(&request.last_name) &&
		request
			.middle_name
			.as_deref()
			.map_or(true, validator::is_name_valid);
	let phone_valid = request
		.phone
		.as_deref()
		.map_or(true, validator::is_phone_number_valid);
	if !names_valid || !phone_valid {
		return Err(ErrorType::WrongParameters);
	}

	Ok(())
}

/// Writes the avatar to the upload directory as `<unix millis><extension>`.
/// Returns where it was written along with the URL it is served at.
async fn save_avatar(directory: &Path, avatar: &Avatar) -> Result<(PathBuf, String), ErrorType> {
	let file_name = format!(
		"{}{}",
		time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000,
		avatar.extension
	);

	tokio::fs::create_dir_all(directory).await?;
	let path = directory.join(&file_name);
	tokio::fs::write(&path, &avatar.data).await?;

	debug!("Avatar saved to `{}`", path.display());
	Ok((path, format!("uploads/{file_name}")))
}

async fn create_account(
	connection: &mut DatabaseConnection,
	state: &AppState,
	request: &RegisterRequest,
	email: &str,
	avatar_url: &str,
) -> Result<AuthResponse, ErrorType> {
	let password = service::hash_password(&request.password, &state.config.password_pepper)?;

	let user_id = db::create_user(
		connection,
		&db::UserToSignUp::builder()
			.first_name(request.first_name.trim())
			.middle_name(request.middle_name.as_deref())
			.last_name(request.last_name.trim())
			.phone(request.phone.as_deref())
			.email(email)
			.password(&password)
			.avatar_url(Some(avatar_url))
			.created(service::get_current_time())
			.build(),
	)
	.await
	.map_err(db::map_unique_violation(ErrorType::EmailUnavailable))?;

	create_auth_response(connection, state, user_id, email.to_string()).await
}
