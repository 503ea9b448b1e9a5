use std::ops::Deref;

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

/// Declares a zero-sized type that always (de)serializes as the given boolean
/// literal, and refuses to deserialize from the other one.
macro_rules! constant_bool {
	($(#[$meta:meta])* $name:ident => $value:literal) => {
		$(#[$meta])*
		#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub struct $name;

		impl<'de> Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: Deserializer<'de>,
			{
				if bool::deserialize(deserializer)? == $value {
					Ok($name)
				} else {
					Err(D::Error::custom(concat!("bool is not ", stringify!($value))))
				}
			}
		}

		impl Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: Serializer,
			{
				serializer.serialize_bool($value)
			}
		}

		impl From<$name> for bool {
			fn from(_: $name) -> Self {
				$value
			}
		}

		impl Deref for $name {
			type Target = bool;

			fn deref(&self) -> &Self::Target {
				&$value
			}
		}
	};
}

constant_bool! {
	/// A type that can be used to represent a constant `true` boolean, such as
	/// the `success` field of a successful response.
	True => true
}

constant_bool! {
	/// A type that can be used to represent a constant `false` boolean, such as
	/// the `success` field of an error response.
	False => false
}
