//! Request logging middleware.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::exception::Result;
use crate::http::{Handler, Middleware, Request, Response};

/// Logs each request with its method, path, status, and duration.
pub struct RequestLogMiddleware;

impl RequestLogMiddleware {
	pub fn new() -> Self {
		Self
	}
}

impl Default for RequestLogMiddleware {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Middleware for RequestLogMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		let start = Instant::now();
		let method = request.method.to_string();
		let path = request.path().to_string();

		let result = next.handle(request).await;
		let elapsed_ms = start.elapsed().as_millis() as u64;

		match &result {
			Ok(response) => {
				tracing::info!(
					%method,
					%path,
					status = response.status.as_u16(),
					elapsed_ms,
					"request"
				);
			}
			Err(err) => {
				tracing::warn!(
					%method,
					%path,
					status = err.status().as_u16(),
					elapsed_ms,
					error = %err,
					"request failed"
				);
			}
		}

		result
	}
}
