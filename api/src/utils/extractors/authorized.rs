use std::{collections::BTreeSet, marker::PhantomData};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
	headers::{authorization::Bearer, Authorization},
	TypedHeader,
};

use crate::{prelude::*, service};

/// Extractor that authenticates the caller of an endpoint using the bearer
/// access token, and then runs the authorization gate for the permission the
/// endpoint `E` requires.
///
/// A missing token rejects with [`ErrorType::Unauthenticated`], an invalid or
/// expired one with [`ErrorType::MalformedAccessToken`], and a caller lacking
/// the required permission with [`ErrorType::Forbidden`].
#[derive(Debug)]
pub struct Authorized<E> {
	/// The ID of the authenticated user
	pub user_id: i64,
	/// The effective permissions of the user at the time of the request
	pub permissions: BTreeSet<String>,
	/// The endpoint the caller was authorized for
	endpoint: PhantomData<E>,
}

#[axum::async_trait]
impl<E> FromRequestParts<AppState> for Authorized<E>
where
	E: ApiEndpoint,
{
	type Rejection = ErrorType;

	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		let TypedHeader(Authorization(bearer)) =
			TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
				.await
				.map_err(|rejection| {
					if rejection.is_missing() {
						ErrorType::Unauthenticated
					} else {
						warn!("Authorization header is not a bearer token");
						ErrorType::MalformedAccessToken
					}
				})?;

		let user_id = service::verify_access_token(bearer.token(), &state.config.jwt)?;

		let mut connection = state.database.acquire().await?;
		let permissions = match E::AUTHENTICATION.required_permission() {
			Some(code) => service::authorize(&mut connection, user_id, code).await,
			None => service::get_effective_permission_codes(&mut connection, user_id).await,
		}
		.map_err(|error| match error {
			ErrorType::ResourceDoesNotExist => {
				warn!("Access token refers to user `{}` that does not exist", user_id);
				ErrorType::AuthorizationTokenInvalid
			}
			error => error,
		})?;

		Ok(Self {
			user_id,
			permissions,
			endpoint: PhantomData,
		})
	}
}
