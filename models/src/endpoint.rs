use axum::http::Method;
use axum_extra::routing::TypedPath;
use serde::{de::DeserializeOwned, Serialize};

use crate::permission::PermissionCode;

/// A trait that defines an API endpoint. This is used to mount the routes for
/// the API, as well as to describe the corresponding path, request query,
/// request body and response body types.
///
/// Ideally, this trait would contain all the information needed to define the
/// functionality of a route, so that the server and any client agree on it.
pub trait ApiEndpoint
where
	Self: Sized + Send + Sync + 'static,
{
	/// The HTTP method that should be used for this endpoint
	const METHOD: Method;
	/// How a request to this endpoint is authenticated, and which permission
	/// the caller must hold, if any
	const AUTHENTICATION: AuthenticationType;

	/// The path that should be used for this endpoint. This should be a valid
	/// URL path and can contain URL parameters as a struct. For example,
	/// `/api/users/:id` would be a valid path. This is internally implemented
	/// using [`axum_extra::routing::TypedPath`]
	type RequestPath: TypedPath + Send + Sync + 'static;
	/// The query parameters accepted by this endpoint
	type RequestQuery: Serialize + DeserializeOwned + Send + Sync + 'static;
	/// The body of the request
	type RequestBody: Serialize + DeserializeOwned + Send + Sync + 'static;
	/// The body of a successful response
	type ResponseBody: Serialize + DeserializeOwned + Send + Sync + 'static;
}

/// The kind of authentication an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationType {
	/// Anyone can call the endpoint
	NoAuthentication,
	/// The caller must present a valid access token, and hold the given
	/// permission in their effective permission set
	PermissionRequired(PermissionCode),
}

impl AuthenticationType {
	/// The permission the caller needs to hold, if the endpoint is protected
	pub fn required_permission(&self) -> Option<PermissionCode> {
		match self {
			Self::NoAuthentication => None,
			Self::PermissionRequired(code) => Some(*code),
		}
	}
}
