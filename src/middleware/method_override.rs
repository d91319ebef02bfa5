//! Method override middleware.
//!
//! HTML forms can only issue GET and POST, so PUT and DELETE are tunneled
//! through POST with a `_method` form field. This middleware rewrites the
//! request method before routing.

use async_trait::async_trait;
use hyper::Method;
use std::sync::Arc;

use crate::exception::Result;
use crate::http::{Handler, Middleware, Request, Response};

/// Form field carrying the tunneled method.
const OVERRIDE_FIELD: &str = "_method";

/// Rewrites `POST` + `_method=PUT|DELETE` into the named method.
///
/// Non-POST requests, bodies that are not parseable forms, and unknown
/// `_method` values pass through unchanged.
pub struct MethodOverrideMiddleware;

impl MethodOverrideMiddleware {
	pub fn new() -> Self {
		Self
	}
}

impl Default for MethodOverrideMiddleware {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Middleware for MethodOverrideMiddleware {
	async fn process(&self, mut request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		if request.method == Method::POST
			&& let Ok(form) = request.form_data()
			&& let Some(value) = form.get(OVERRIDE_FIELD)
		{
			match value.to_ascii_uppercase().as_str() {
				"PUT" => request.method = Method::PUT,
				"DELETE" => request.method = Method::DELETE,
				_ => {}
			}
		}

		next.handle(request).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct MethodEcho;

	#[async_trait]
	impl Handler for MethodEcho {
		async fn handle(&self, request: Request) -> Result<Response> {
			Ok(Response::ok().with_body(request.method.to_string()))
		}
	}

	async fn run(method: Method, body: &'static [u8]) -> String {
		let request = Request::builder()
			.method(method)
			.uri("/campgrounds/1")
			.body(body)
			.build()
			.unwrap();
		MethodOverrideMiddleware::new()
			.process(request, Arc::new(MethodEcho))
			.await
			.unwrap()
			.body_text()
	}

	#[rstest]
	#[tokio::test]
	async fn test_post_with_delete_override() {
		assert_eq!(run(Method::POST, b"_method=DELETE").await, "DELETE");
	}

	#[rstest]
	#[tokio::test]
	async fn test_post_with_put_override() {
		assert_eq!(
			run(Method::POST, b"_method=PUT&campground%5Btitle%5D=x").await,
			"PUT"
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_lowercase_value_accepted() {
		assert_eq!(run(Method::POST, b"_method=delete").await, "DELETE");
	}

	#[rstest]
	#[tokio::test]
	async fn test_unknown_value_passes_through() {
		assert_eq!(run(Method::POST, b"_method=PATCH").await, "POST");
	}

	#[rstest]
	#[tokio::test]
	async fn test_get_is_never_rewritten() {
		assert_eq!(run(Method::GET, b"_method=DELETE").await, "GET");
	}

	#[rstest]
	#[tokio::test]
	async fn test_post_without_field_passes_through() {
		assert_eq!(run(Method::POST, b"campground%5Btitle%5D=x").await, "POST");
	}
}
