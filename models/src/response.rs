use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::{
	utils::{False, True},
	ErrorType,
};

/// This struct represents an error response from the API. It contains the
/// status code and the body of the response.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
	/// The status code of the error response. Ideally in the 4xx or 5xx range.
	pub status_code: StatusCode,
	/// The body of the error response. This is a JSON object that contains the
	/// error message.
	pub body: ApiErrorResponseBody,
}

impl ApiErrorResponse {
	/// Creates a new [`ApiErrorResponse`] with the given [`ErrorType`], using
	/// the default status code.
	pub fn error(error: ErrorType) -> Self {
		Self {
			status_code: error.default_status_code(),
			body: ApiErrorResponseBody {
				success: False,
				message: error.message().into(),
				error,
			},
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> axum::response::Response {
		(self.status_code, Json(self.body)).into_response()
	}
}

/// This struct represents the JSON body of an error response from the API.
/// This is mostly used internally and would ideally not need to be constructed
/// manually.
///
/// Use [`ApiErrorResponse`] to create an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponseBody {
	/// Whether the request was successful or not. This is always false.
	pub success: False,
	/// The error type of the response.
	pub error: ErrorType,
	/// A user-friendly message describing the error.
	pub message: String,
}

/// The body returned by endpoints that have nothing to return other than an
/// acknowledgement, such as deletes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
	/// Always true
	pub success: True,
}

/// The body returned by endpoints that only acknowledge with a human readable
/// message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
	/// Always true
	pub success: True,
	/// What happened
	pub message: String,
}

impl MessageResponse {
	/// Creates a new successful [`MessageResponse`] with the given message
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			success: True,
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_ser_tokens, assert_tokens, Token};

	use super::{ApiErrorResponse, ApiErrorResponseBody, SuccessResponse};
	use crate::{utils::False, ErrorType};

	#[test]
	fn assert_success_response_types() {
		assert_tokens(
			&SuccessResponse::default(),
			&[
				Token::Struct {
					name: "SuccessResponse",
					len: 1,
				},
				Token::Str("success"),
				Token::Bool(true),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_error_response_types() {
		let response = ApiErrorResponse::error(ErrorType::Forbidden);
		assert_eq!(response.status_code.as_u16(), 403);
		assert_ser_tokens(
			&response.body,
			&[
				Token::Struct {
					name: "ApiErrorResponseBody",
					len: 3,
				},
				Token::Str("success"),
				Token::Bool(false),
				Token::Str("error"),
				Token::Str("forbidden"),
				Token::Str("message"),
				Token::Str("You are not authorized to perform that action"),
				Token::StructEnd,
			],
		);
		assert_eq!(
			response.body,
			ApiErrorResponseBody {
				success: False,
				error: ErrorType::Forbidden,
				message: "You are not authorized to perform that action".to_string(),
			}
		);
	}
}
