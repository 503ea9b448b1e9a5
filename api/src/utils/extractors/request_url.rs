use std::convert::Infallible;

use axum::{
	extract::{FromRequestParts, Host},
	http::request::Parts,
};

/// Extractor for the absolute URL of the current request, without its query.
/// The scheme is taken from the `X-Forwarded-Proto` header when the server is
/// behind a proxy, and is `http` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestUrl(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequestUrl
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let scheme = parts
			.headers
			.get("X-Forwarded-Proto")
			.and_then(|header_value| header_value.to_str().ok())
			.and_then(|value| value.split(',').next())
			.map(|scheme| scheme.trim().to_string())
			.filter(|scheme| !scheme.is_empty())
			.unwrap_or_else(|| "http".to_string());
		let host = Host::from_request_parts(parts, state)
			.await
			.map(|Host(host)| host)
			.unwrap_or_else(|_| "localhost".to_string());
		let path = parts.uri.path();

		Ok(Self(format!("{scheme}://{host}{path}")))
	}
}
