//! Business logic shared between the routes, the extractors and the bot.

mod auth;
mod rbac;
mod token;
mod user;

pub use self::{auth::*, rbac::*, token::*, user::*};

/// The current time as a unix timestamp, in seconds
pub fn get_current_time() -> i64 {
	time::OffsetDateTime::now_utc().unix_timestamp()
}
