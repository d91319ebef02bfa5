//! Application settings.
//!
//! Loaded once in `main` from `CAMPSITE_*` environment variables with
//! local defaults, then passed explicitly through the application.

use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_DATABASE_NAME: &str = "campsite";

#[derive(Debug, Clone)]
pub struct Settings {
	pub bind_addr: SocketAddr,
	pub database_url: String,
	pub database_name: String,
}

impl Settings {
	/// Read settings from the environment.
	///
	/// An unparseable `CAMPSITE_BIND_ADDR` falls back to the default with
	/// a warning.
	pub fn from_env() -> Self {
		let bind_addr = std::env::var("CAMPSITE_BIND_ADDR")
			.ok()
			.and_then(|raw| match raw.parse() {
				Ok(addr) => Some(addr),
				Err(_) => {
					tracing::warn!(value = %raw, "invalid CAMPSITE_BIND_ADDR, using default");
					None
				}
			})
			.unwrap_or_else(|| {
				DEFAULT_BIND_ADDR
					.parse()
					.expect("default bind address is valid")
			});

		Self {
			bind_addr,
			database_url: std::env::var("CAMPSITE_DATABASE_URL")
				.unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
			database_name: std::env::var("CAMPSITE_DATABASE_NAME")
				.unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			bind_addr: DEFAULT_BIND_ADDR
				.parse()
				.expect("default bind address is valid"),
			database_url: DEFAULT_DATABASE_URL.to_string(),
			database_name: DEFAULT_DATABASE_NAME.to_string(),
		}
	}
}
