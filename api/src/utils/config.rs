use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
	path::PathBuf,
};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Reads the configuration from `config/dev` or `config/prod` (in any format
/// the `config` crate understands), overridden by environment variables
/// prefixed with `APP_`. Nested keys are separated by `__`, so
/// `APP_JWT__ACCESS_SECRET` sets `jwt.access_secret`.
#[instrument]
pub fn parse_config() -> Result<AppConfig, ConfigError> {
	trace!("Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	match env.as_ref() {
		"prod" | "production" => Config::builder()
			.add_source(File::with_name("config/prod").required(false))
			.set_default("environment", "production")?,
		"dev" | "development" => Config::builder()
			.add_source(File::with_name("config/dev").required(false))
			.set_default("environment", "development")?,
		unknown => {
			return Err(ConfigError::Message(format!(
				"Unknown running environment `{unknown}` found!"
			)));
		}
	}
	.add_source(
		Environment::with_prefix("APP")
			.prefix_separator("_")
			.separator("__")
			.try_parsing(true),
	)
	.build()?
	.try_deserialize()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
	pub bind_addr: SocketAddr,
	pub environment: RunningEnvironment,
	pub password_pepper: String,
	pub jwt: JwtConfig,
	pub database: DatabaseConfig,
	#[serde(default)]
	pub upload: UploadConfig,
	/// An account created on start-up and given the admin role, so that a
	/// fresh installation can be administered
	#[serde(default)]
	pub bootstrap: Option<BootstrapConfig>,
	/// The Telegram bot is only enabled if this is set
	#[serde(default)]
	pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	Development,
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
	pub access_secret: String,
	pub refresh_secret: String,
	#[serde(default = "default_issuer")]
	pub issuer: String,
	/// In seconds
	#[serde(default = "default_access_token_validity")]
	pub access_token_validity: i64,
	/// In seconds
	#[serde(default = "default_refresh_token_validity")]
	pub refresh_token_validity: i64,
}

fn default_issuer() -> String {
	"sophor".to_string()
}

fn default_access_token_validity() -> i64 {
	15 * 60
}

fn default_refresh_token_validity() -> i64 {
	7 * 24 * 60 * 60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
	/// For example `sqlite://sophor.db`
	pub url: String,
	#[serde(default = "default_connection_limit")]
	pub connection_limit: u32,
}

fn default_connection_limit() -> u32 {
	10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
	#[serde(default = "default_upload_directory")]
	pub directory: PathBuf,
	/// In bytes
	#[serde(default = "default_upload_max_size")]
	pub max_size: usize,
}

impl Default for UploadConfig {
	fn default() -> Self {
		Self {
			directory: default_upload_directory(),
			max_size: default_upload_max_size(),
		}
	}
}

fn default_upload_directory() -> PathBuf {
	PathBuf::from("uploads")
}

fn default_upload_max_size() -> usize {
	5 * 1024 * 1024
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
	pub email: String,
	pub password: String,
	#[serde(default = "default_bootstrap_name")]
	pub first_name: String,
	#[serde(default = "default_bootstrap_name")]
	pub last_name: String,
}

fn default_bootstrap_name() -> String {
	"Admin".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
	pub token: String,
	#[serde(default = "default_telegram_api_base_url")]
	pub api_base_url: String,
	/// The public base URL of this server, such as `https://bot.example.com`.
	/// If set, the webhook is registered on start-up at `/bot<token>` under it
	#[serde(default)]
	pub webhook_url: Option<String>,
}

fn default_telegram_api_base_url() -> String {
	"https://api.telegram.org".to_string()
}
