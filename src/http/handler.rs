//! Handler and middleware traits.
//!
//! The `Handler` trait is the core abstraction: every request handler is a
//! fallible async operation, and failures propagate unchanged to the
//! centralized error renderer. Middleware wraps handlers to add
//! cross-cutting concerns (method override, sessions, request logging).

use async_trait::async_trait;
use std::sync::Arc;

use super::{Request, Response};
use crate::exception::Result;

/// Handler trait for processing requests.
///
/// # Examples
///
/// ```
/// use campsite::http::{Handler, Request, Response};
/// use async_trait::async_trait;
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
///     async fn handle(&self, _request: Request) -> campsite::exception::Result<Response> {
///         Ok(Response::ok().with_body("Hello!"))
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed; the server
	/// renders it centrally.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation so `Arc<dyn Handler>` is itself a Handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Middleware trait for request/response processing.
///
/// Uses composition: middleware may modify the request before calling
/// `next`, or the response after.
#[async_trait]
pub trait Middleware: Send + Sync {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;
}

/// Composes middleware around a terminal handler.
///
/// Middleware run in the order they were added: the first added is the
/// outermost.
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
		self.middlewares.push(middleware);
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		if self.middlewares.is_empty() {
			return self.handler.handle(request).await;
		}

		// Build the nested handler chain innermost-first so the first
		// added middleware ends up outermost.
		let mut current: Arc<dyn Handler> = self.handler.clone();
		for middleware in self.middlewares.iter().rev() {
			current = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current,
			});
		}

		current.handle(request).await
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::Method;
	use rstest::rstest;

	struct MockHandler {
		response_body: String,
	}

	#[async_trait]
	impl Handler for MockHandler {
		async fn handle(&self, _request: Request) -> Result<Response> {
			Ok(Response::ok().with_body(self.response_body.clone()))
		}
	}

	struct PrefixMiddleware {
		prefix: String,
	}

	#[async_trait]
	impl Middleware for PrefixMiddleware {
		async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
			let response = next.handle(request).await?;
			let body = format!("{}{}", self.prefix, response.body_text());
			Ok(Response::ok().with_body(body))
		}
	}

	fn test_request() -> Request {
		Request::builder().method(Method::GET).uri("/").build().unwrap()
	}

	#[rstest]
	#[tokio::test]
	async fn test_empty_chain_calls_handler() {
		let chain = MiddlewareChain::new(Arc::new(MockHandler {
			response_body: "Test".to_string(),
		}));

		let response = chain.handle(test_request()).await.unwrap();
		assert_eq!(response.body_text(), "Test");
	}

	#[rstest]
	#[tokio::test]
	async fn test_middleware_applied_in_add_order() {
		let chain = MiddlewareChain::new(Arc::new(MockHandler {
			response_body: "Data".to_string(),
		}))
		.with_middleware(Arc::new(PrefixMiddleware {
			prefix: "M1:".to_string(),
		}))
		.with_middleware(Arc::new(PrefixMiddleware {
			prefix: "M2:".to_string(),
		}));

		let response = chain.handle(test_request()).await.unwrap();
		assert_eq!(response.body_text(), "M1:M2:Data");
	}

	#[rstest]
	#[tokio::test]
	async fn test_error_propagates_through_chain() {
		struct Failing;

		#[async_trait]
		impl Handler for Failing {
			async fn handle(&self, _request: Request) -> Result<Response> {
				Err(crate::exception::HttpError::NotFound("gone".to_string()))
			}
		}

		let chain = MiddlewareChain::new(Arc::new(Failing)).with_middleware(Arc::new(
			PrefixMiddleware {
				prefix: "unused:".to_string(),
			},
		));

		let error = chain.handle(test_request()).await.unwrap_err();
		assert_eq!(error.to_string(), "gone");
	}
}
