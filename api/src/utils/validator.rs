use lazy_static::lazy_static;
use regex::Regex;

use super::constants;

lazy_static! {
	// Email regex: https://stackoverflow.com/a/201378
	static ref EMAIL_REGEX: Regex = Regex::new("^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|\"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\\\[\x01-\x09\x0b\x0c\x0e-\x7f])*\")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\\])$").unwrap();
	// An optional '+' followed by 7-15 digits
	static ref PHONE_NUMBER_REGEX: Regex = Regex::new("^\\+?[0-9]{7,15}$").unwrap();
	// Lowercase letters, digits and underscores, starting with a letter
	static ref PERMISSION_CODE_REGEX: Regex = Regex::new("^[a-z][a-z0-9_]{0,99}$").unwrap();
}

/// Expects an already lowercased email
pub fn is_email_valid(email: &str) -> bool {
	email.len() <= 320 && EMAIL_REGEX.is_match(email)
}

pub fn is_phone_number_valid(phone: &str) -> bool {
	PHONE_NUMBER_REGEX.is_match(phone)
}

pub fn is_password_valid(password: &str) -> bool {
	password.chars().count() >= constants::MIN_PASSWORD_LENGTH
}

pub fn is_permission_code_valid(code: &str) -> bool {
	PERMISSION_CODE_REGEX.is_match(code)
}

/// Between 1 and 100 characters, not counting surrounding whitespace
pub fn is_name_valid(name: &str) -> bool {
	let name = name.trim();
	!name.is_empty() && name.chars().count() <= 100
}
