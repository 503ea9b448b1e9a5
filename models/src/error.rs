use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{de::Error, Deserialize, Serialize};

use crate::ApiErrorResponse;

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The email provided is invalid
	InvalidEmail,
	/// The user was not found
	UserNotFound,
	/// The password provided is invalid
	InvalidPassword,
	/// The password provided does not meet the minimum requirements
	PasswordTooWeak,
	/// The parameters sent with the request is invalid. This would ideally not
	/// happen unless there is a bug in the client
	WrongParameters,
	/// An avatar image is required to create an account, and none was uploaded
	AvatarRequired,
	/// No authentication token was provided with a protected request
	Unauthenticated,
	/// The access token (JWT) provided is malformed
	MalformedAccessToken,
	/// The refresh token provided is malformed
	MalformedRefreshToken,
	/// The access token (JWT) provided is valid, but the user it refers to no
	/// longer exists
	AuthorizationTokenInvalid,
	/// The authenticated user does not hold the permission required to perform
	/// the requested action
	Forbidden,
	/// The email provided is not available. It is being used by another account
	EmailUnavailable,
	/// A role with the given name already exists
	RoleAlreadyExists,
	/// A permission with the given code already exists
	PermissionAlreadyExists,
	/// The reset token used to reset the given user's password is invalid.
	InvalidPasswordResetToken,
	/// The resource that the user is trying to access does not exist.
	ResourceDoesNotExist,
	/// An internal server error occurred. This should not happen unless there
	/// is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can override
	/// this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::InvalidEmail => StatusCode::BAD_REQUEST,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::InvalidPassword => StatusCode::UNAUTHORIZED,
			Self::PasswordTooWeak => StatusCode::BAD_REQUEST,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::AvatarRequired => StatusCode::BAD_REQUEST,
			Self::Unauthenticated => StatusCode::UNAUTHORIZED,
			Self::MalformedAccessToken => StatusCode::UNAUTHORIZED,
			Self::MalformedRefreshToken => StatusCode::UNAUTHORIZED,
			Self::AuthorizationTokenInvalid => StatusCode::UNAUTHORIZED,
			Self::Forbidden => StatusCode::FORBIDDEN,
			Self::EmailUnavailable => StatusCode::CONFLICT,
			Self::RoleAlreadyExists => StatusCode::CONFLICT,
			Self::PermissionAlreadyExists => StatusCode::CONFLICT,
			Self::InvalidPasswordResetToken => StatusCode::BAD_REQUEST,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::InvalidEmail => "Invalid email",
			Self::UserNotFound => "No user exists with those credentials",
			Self::InvalidPassword => "Invalid Password",
			Self::PasswordTooWeak => "The password must be at least 8 characters long",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::AvatarRequired => "Avatar required",
			Self::Unauthenticated => "Access denied. Please login to continue",
			Self::MalformedAccessToken => "Your access token is invalid. Please login again",
			Self::MalformedRefreshToken => "Your refresh token is invalid. Please login again",
			Self::AuthorizationTokenInvalid => {
				"Your access token is no longer valid. Please login again"
			}
			Self::Forbidden => "You are not authorized to perform that action",
			Self::EmailUnavailable => "An account already exists with that email",
			Self::RoleAlreadyExists => "A role with that name already exists",
			Self::PermissionAlreadyExists => "A permission with that code already exists",
			Self::InvalidPasswordResetToken => "Invalid or expired token",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl IntoResponse for ErrorType {
	fn into_response(self) -> Response {
		if let Self::InternalServerError(error) = &self {
			tracing::error!("Internal server error: {:?}", error);
		}
		ApiErrorResponse::error(self).into_response()
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::InvalidEmail => Self::InvalidEmail,
			Self::UserNotFound => Self::UserNotFound,
			Self::InvalidPassword => Self::InvalidPassword,
			Self::PasswordTooWeak => Self::PasswordTooWeak,
			Self::WrongParameters => Self::WrongParameters,
			Self::AvatarRequired => Self::AvatarRequired,
			Self::Unauthenticated => Self::Unauthenticated,
			Self::MalformedAccessToken => Self::MalformedAccessToken,
			Self::MalformedRefreshToken => Self::MalformedRefreshToken,
			Self::AuthorizationTokenInvalid => Self::AuthorizationTokenInvalid,
			Self::Forbidden => Self::Forbidden,
			Self::EmailUnavailable => Self::EmailUnavailable,
			Self::RoleAlreadyExists => Self::RoleAlreadyExists,
			Self::PermissionAlreadyExists => Self::PermissionAlreadyExists,
			Self::InvalidPasswordResetToken => Self::InvalidPasswordResetToken,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(match self {
			Self::InvalidEmail => "invalidEmail",
			Self::UserNotFound => "userNotFound",
			Self::InvalidPassword => "invalidPassword",
			Self::PasswordTooWeak => "passwordTooWeak",
			Self::WrongParameters => "wrongParameters",
			Self::AvatarRequired => "avatarRequired",
			Self::Unauthenticated => "unauthenticated",
			Self::MalformedAccessToken => "malformedAccessToken",
			Self::MalformedRefreshToken => "malformedRefreshToken",
			Self::AuthorizationTokenInvalid => "authorizationTokenInvalid",
			Self::Forbidden => "forbidden",
			Self::EmailUnavailable => "emailUnavailable",
			Self::RoleAlreadyExists => "roleAlreadyExists",
			Self::PermissionAlreadyExists => "permissionAlreadyExists",
			Self::InvalidPasswordResetToken => "invalidResetToken",
			Self::ResourceDoesNotExist => "resourceDoesNotExist",
			Self::InternalServerError(_) => "internalServerError",
		})
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"invalidEmail" => Self::InvalidEmail,
			"userNotFound" => Self::UserNotFound,
			"invalidPassword" => Self::InvalidPassword,
			"passwordTooWeak" => Self::PasswordTooWeak,
			"wrongParameters" => Self::WrongParameters,
			"avatarRequired" => Self::AvatarRequired,
			"unauthenticated" => Self::Unauthenticated,
			"malformedAccessToken" => Self::MalformedAccessToken,
			"malformedRefreshToken" => Self::MalformedRefreshToken,
			"authorizationTokenInvalid" => Self::AuthorizationTokenInvalid,
			"forbidden" => Self::Forbidden,
			"emailUnavailable" => Self::EmailUnavailable,
			"roleAlreadyExists" => Self::RoleAlreadyExists,
			"permissionAlreadyExists" => Self::PermissionAlreadyExists,
			"invalidResetToken" => Self::InvalidPasswordResetToken,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}

#[cfg(test)]
mod tests {
	use axum::http::StatusCode;
	use serde_test::{assert_tokens, Token};

	use super::ErrorType;

	#[test]
	fn assert_error_types() {
		assert_tokens(&ErrorType::Forbidden, &[Token::Str("forbidden")]);
		assert_tokens(
			&ErrorType::InvalidPasswordResetToken,
			&[Token::Str("invalidResetToken")],
		);
		assert_tokens(
			&ErrorType::server_error("database went away"),
			&[Token::Str("internalServerError")],
		);
	}

	#[test]
	fn gate_errors_map_to_expected_status_codes() {
		assert_eq!(
			ErrorType::Unauthenticated.default_status_code(),
			StatusCode::UNAUTHORIZED
		);
		assert_eq!(
			ErrorType::Forbidden.default_status_code(),
			StatusCode::FORBIDDEN
		);
		assert_eq!(
			ErrorType::ResourceDoesNotExist.default_status_code(),
			StatusCode::NOT_FOUND
		);
	}

	#[test]
	fn std_errors_become_internal_server_errors() {
		let error: ErrorType = std::io::Error::other("disk full").into();
		assert_eq!(error, ErrorType::server_error("anything"));
	}
}
