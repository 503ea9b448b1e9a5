use axum::{
	handler::Handler,
	routing::{MethodFilter, MethodRouter},
	Router,
};
use axum_extra::routing::TypedPath;

use crate::prelude::*;

/// Extension trait for axum Router to mount an API endpoint directly at the
/// path and method its [`ApiEndpoint`] declares.
pub trait RouterExt<S>
where
	S: Clone + Send + Sync + 'static,
{
	/// Mount the handler of an API endpoint at the endpoint's path and method.
	/// Endpoints sharing a path are merged into the same route.
	#[track_caller]
	fn mount_endpoint<E, H, T>(self, handler: H) -> Self
	where
		E: ApiEndpoint,
		H: Handler<T, S>,
		T: 'static;
}

impl<S> RouterExt<S> for Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	#[track_caller]
	fn mount_endpoint<E, H, T>(self, handler: H) -> Self
	where
		E: ApiEndpoint,
		H: Handler<T, S>,
		T: 'static,
	{
		let path = <E::RequestPath as TypedPath>::PATH;
		trace!("Mounting {} {}", E::METHOD, path);
		self.route(
			path,
			MethodRouter::new().on(
				MethodFilter::try_from(E::METHOD)
					.unwrap_or_else(|_| panic!("unsupported method for {path}")),
				handler,
			),
		)
	}
}
