//! All the types shared between the Sophor API server and its clients. Every
//! endpoint is described by a type implementing [`ApiEndpoint`], along with its
//! path, request and response types.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

/// All the endpoints of the API, grouped by the resource they act on
pub mod api;
/// The permission codes understood by the API
pub mod permission;
/// Resolution of a user's effective permissions
pub mod rbac;
/// The subset of the Telegram Bot API used by the intake bot
pub mod telegram;
/// Utility types used across the API
pub mod utils;

/// The commonly used types of this crate, to avoid importing each of them
/// individually.
pub mod prelude {
	pub use crate::{
		permission::PermissionCode,
		utils::{False, ListQuery, Paginated, True},
		ApiEndpoint,
		AuthenticationType,
		ErrorType,
	};
}

mod endpoint;
mod error;
mod response;

pub use self::{endpoint::*, error::*, response::*};

/// Asserts that the given value serializes to JSON and deserializes back to the
/// same value.
#[cfg(test)]
fn assert_types<T>(value: T)
where
	T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
	let json = serde_json::to_value(&value).expect("unable to serialize");
	let parsed: T = serde_json::from_value(json).expect("unable to deserialize");
	assert_eq!(value, parsed);
}
