//! Route table and dispatch.

use async_trait::async_trait;
use hyper::Method;
use std::sync::Arc;

use super::pattern::PathPattern;
use crate::exception::{HttpError, Result};
use crate::http::{Handler, Request, Response};

/// A single route: method, path pattern, handler.
#[derive(Clone)]
pub struct Route {
	pub method: Method,
	pub path: String,
	handler: Arc<dyn Handler>,
	pub name: Option<String>,
}

impl Route {
	/// Create a new route.
	pub fn new(method: Method, path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
		Self {
			method,
			path: path.into(),
			handler,
			name: None,
		}
	}

	/// Create a route from a concrete handler without wrapping in `Arc`
	/// at the call site.
	pub fn from_handler<H>(method: Method, path: impl Into<String>, handler: H) -> Self
	where
		H: Handler + 'static,
	{
		Self::new(method, path, Arc::new(handler))
	}

	/// Set the name of the route.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Get a reference to the route's handler.
	pub fn handler(&self) -> &dyn Handler {
		&*self.handler
	}
}

/// Ordered route table.
///
/// Dispatch finds the first route whose pattern and method both match,
/// injects the extracted path parameters into the request, and calls the
/// handler. Any unmatched request resolves to a 404 error: the catch-all.
pub struct Router {
	routes: Vec<(PathPattern, Route)>,
}

impl Router {
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	/// Register a route. Panics on an invalid path pattern; the route
	/// table is wired once at startup.
	pub fn add_route(&mut self, route: Route) {
		let pattern = PathPattern::new(&route.path).expect("invalid path pattern");
		self.routes.push((pattern, route));
	}

	/// All registered routes.
	pub fn routes(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter().map(|(_, route)| route)
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Handler for Router {
	async fn handle(&self, mut request: Request) -> Result<Response> {
		let path = request.path().to_string();

		for (pattern, route) in &self.routes {
			if route.method != request.method {
				continue;
			}
			if let Some(params) = pattern.extract_params(&path) {
				for (key, value) in params {
					request.set_path_param(key, value);
				}
				return route.handler().handle(request).await;
			}
		}

		Err(HttpError::NotFound("Page Not Found!".to_string()))
	}
}
