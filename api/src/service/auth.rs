use argon2::{
	password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
	Algorithm,
	Argon2,
	Version,
};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::prelude::*;

fn get_hasher(pepper: &str) -> Result<Argon2<'_>, ErrorType> {
	Argon2::new_with_secret(
		pepper.as_bytes(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.inspect_err(|err| {
		error!("Error creating Argon2: `{}`", err);
	})
	.map_err(ErrorType::server_error)
}

/// Hashes a password with argon2id, using the pepper as the secret
pub fn hash_password(password: &str, pepper: &str) -> Result<String, ErrorType> {
	Ok(get_hasher(pepper)?
		.hash_password(
			password.as_bytes(),
			&SaltString::generate(&mut rand::thread_rng()),
		)
		.inspect_err(|err| {
			error!("Error hashing password: `{}`", err);
		})
		.map_err(ErrorType::server_error)?
		.to_string())
}

/// Checks a password against a hash created by [`hash_password`]
pub fn validate_password(password: &str, hash: &str, pepper: &str) -> Result<bool, ErrorType> {
	let hash = PasswordHash::new(hash)
		.inspect_err(|err| {
			error!("Stored password hash is not valid: `{}`", err);
		})
		.map_err(ErrorType::server_error)?;

	Ok(get_hasher(pepper)?
		.verify_password(password.as_bytes(), &hash)
		.is_ok())
}

/// Generates a new password reset token. Returns the token to hand out along
/// with the hash to store.
pub fn generate_reset_token() -> (String, String) {
	let mut bytes = [0u8; constants::RESET_TOKEN_LENGTH];
	rand::thread_rng().fill_bytes(&mut bytes);
	let token = hex::encode(bytes);
	let hash = hash_reset_token(&token);
	(token, hash)
}

/// Reset tokens are random enough that a fast, unsalted hash is sufficient,
/// and lets the token be looked up by its hash
pub fn hash_reset_token(token: &str) -> String {
	hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn password_round_trip() {
		let hash = hash_password("hunter42", "pepper").unwrap();
		assert_ne!(hash, "hunter42");
		assert!(validate_password("hunter42", &hash, "pepper").unwrap());
		assert!(!validate_password("hunter43", &hash, "pepper").unwrap());
	}

	#[test]
	fn pepper_is_part_of_the_hash() {
		let hash = hash_password("hunter42", "pepper").unwrap();
		assert!(!validate_password("hunter42", &hash, "salt").unwrap());
	}

	#[test]
	fn reset_tokens_are_random_hex() {
		let (token, hash) = generate_reset_token();
		let (other, _) = generate_reset_token();
		assert_eq!(token.len(), constants::RESET_TOKEN_LENGTH * 2);
		assert!(token.chars().all(|ch| ch.is_ascii_hexdigit()));
		assert_ne!(token, other);
		assert_eq!(hash, hash_reset_token(&token));
		assert_ne!(hash, token);
	}
}
