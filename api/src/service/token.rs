use jsonwebtoken::{
	errors::{Error, ErrorKind},
	Algorithm,
	DecodingKey,
	EncodingKey,
	Header,
	Validation,
};
use serde::{Deserialize, Serialize};

use super::get_current_time;
use crate::{prelude::*, utils::config::JwtConfig};

/// What a token may be used for. An access token is never accepted as a
/// refresh token, and the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
	Access,
	Refresh,
}

/// The claims carried by both access and refresh tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
	/// The issuer of the token
	pub iss: String,
	/// The ID of the user the token was issued to
	pub sub: String,
	/// Issued at, as a unix timestamp
	pub iat: i64,
	/// Expiry, as a unix timestamp
	pub exp: i64,
	pub typ: TokenType,
}

impl TokenClaims {
	pub fn new(user_id: i64, typ: TokenType, issuer: &str, validity: i64, now: i64) -> Self {
		Self {
			iss: issuer.to_string(),
			sub: user_id.to_string(),
			iat: now,
			exp: now + validity,
			typ,
		}
	}

	pub fn encode(&self, secret: &str) -> Result<String, Error> {
		jsonwebtoken::encode(
			&Header::new(Algorithm::HS256),
			self,
			&EncodingKey::from_secret(secret.as_bytes()),
		)
	}

	/// Decodes and validates a token. The signature, expiry, issuer and type
	/// all have to match.
	pub fn decode(token: &str, secret: &str, issuer: &str, typ: TokenType) -> Result<Self, Error> {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.leeway = 0;
		validation.set_issuer(&[issuer]);
		validation.set_required_spec_claims(&["exp", "iss", "sub"]);

		let claims = jsonwebtoken::decode::<Self>(
			token,
			&DecodingKey::from_secret(secret.as_bytes()),
			&validation,
		)?
		.claims;

		if claims.typ != typ {
			return Err(ErrorKind::InvalidToken.into());
		}

		Ok(claims)
	}

	/// The ID of the user this token was issued to
	pub fn user_id(&self) -> Option<i64> {
		self.sub.parse().ok()
	}
}

/// Issues a new access token and refresh token for the user
pub fn issue_token_pair(user_id: i64, config: &JwtConfig) -> Result<(String, String), ErrorType> {
	let now = get_current_time();

	let access_token = TokenClaims::new(
		user_id,
		TokenType::Access,
		&config.issuer,
		config.access_token_validity,
		now,
	)
	.encode(&config.access_secret)?;
	let refresh_token = TokenClaims::new(
		user_id,
		TokenType::Refresh,
		&config.issuer,
		config.refresh_token_validity,
		now,
	)
	.encode(&config.refresh_secret)?;

	Ok((access_token, refresh_token))
}

/// Issues a new access token for the user
pub fn issue_access_token(user_id: i64, config: &JwtConfig) -> Result<String, ErrorType> {
	Ok(TokenClaims::new(
		user_id,
		TokenType::Access,
		&config.issuer,
		config.access_token_validity,
		get_current_time(),
	)
	.encode(&config.access_secret)?)
}

/// Verifies an access token, returning the ID of the user it was issued to
pub fn verify_access_token(token: &str, config: &JwtConfig) -> Result<i64, ErrorType> {
	TokenClaims::decode(token, &config.access_secret, &config.issuer, TokenType::Access)
		.inspect_err(|err| {
			warn!("Rejected access token: {}", err);
		})
		.ok()
		.and_then(|claims| claims.user_id())
		.ok_or(ErrorType::MalformedAccessToken)
}

/// Verifies a refresh token, returning the ID of the user it was issued to
pub fn verify_refresh_token(token: &str, config: &JwtConfig) -> Result<i64, ErrorType> {
	TokenClaims::decode(token, &config.refresh_secret, &config.issuer, TokenType::Refresh)
		.inspect_err(|err| {
			warn!("Rejected refresh token: {}", err);
		})
		.ok()
		.and_then(|claims| claims.user_id())
		.ok_or(ErrorType::MalformedRefreshToken)
}
