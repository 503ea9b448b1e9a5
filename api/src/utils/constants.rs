use semver::Version;

/// The version of the database schema this build creates and understands
pub const DATABASE_VERSION: Version = Version::new(0, 1, 0);

pub const HASHING_PARAMS: argon2::Params = argon2::Params::DEFAULT;

/// How long a password reset token stays valid, in seconds
pub const RESET_TOKEN_VALIDITY: i64 = 60 * 60;
/// Number of random bytes in a password reset token
pub const RESET_TOKEN_LENGTH: usize = 32;

/// The role created on start-up holding every built-in permission
pub const ADMIN_ROLE_NAME: &str = "admin";

pub const MIN_PASSWORD_LENGTH: usize = 8;
