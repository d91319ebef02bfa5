//! Session middleware.
//!
//! Guarantees every request a session id: reads the session cookie when
//! present, otherwise mints a UUID and sets the cookie on the response.
//! The id keys flash-message storage.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::exception::Result;
use crate::http::{Handler, Middleware, Request, Response};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sessionid";

pub struct SessionMiddleware {
	cookie_name: String,
}

impl SessionMiddleware {
	/// Create a middleware using the default cookie name.
	pub fn new() -> Self {
		Self {
			cookie_name: SESSION_COOKIE.to_string(),
		}
	}

	/// Create a middleware with a custom cookie name.
	pub fn with_cookie_name(cookie_name: impl Into<String>) -> Self {
		Self {
			cookie_name: cookie_name.into(),
		}
	}
}

impl Default for SessionMiddleware {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Middleware for SessionMiddleware {
	async fn process(&self, mut request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		match request.cookie(&self.cookie_name) {
			Some(id) => {
				request.session_id = Some(id);
				next.handle(request).await
			}
			None => {
				let id = Uuid::new_v4().to_string();
				request.session_id = Some(id.clone());
				let response = next.handle(request).await?;
				Ok(response.with_cookie(&self.cookie_name, &id))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::HeaderMap;
	use rstest::rstest;

	struct SessionEcho;

	#[async_trait]
	impl Handler for SessionEcho {
		async fn handle(&self, request: Request) -> Result<Response> {
			Ok(Response::ok().with_body(request.session_key()))
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_existing_cookie_reused() {
		let mut headers = HeaderMap::new();
		headers.insert("cookie", "sessionid=known-id".parse().unwrap());
		let request = Request::builder().headers(headers).build().unwrap();

		let response = SessionMiddleware::new()
			.process(request, Arc::new(SessionEcho))
			.await
			.unwrap();

		assert_eq!(response.body_text(), "known-id");
		assert!(response.headers.get("set-cookie").is_none());
	}

	#[rstest]
	#[tokio::test]
	async fn test_missing_cookie_mints_id_and_sets_cookie() {
		let request = Request::builder().build().unwrap();

		let response = SessionMiddleware::new()
			.process(request, Arc::new(SessionEcho))
			.await
			.unwrap();

		let minted = response.body_text();
		assert!(!minted.is_empty());
		assert_ne!(minted, "default");

		let cookie = response
			.headers
			.get("set-cookie")
			.unwrap()
			.to_str()
			.unwrap()
			.to_string();
		assert!(cookie.starts_with(&format!("sessionid={}", minted)));
		assert!(cookie.contains("HttpOnly"));
	}
}
