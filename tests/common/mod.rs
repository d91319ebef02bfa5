//! Test application: the full middleware chain and route table over an
//! in-memory store, driven without a socket.

use std::sync::Arc;

use campsite::db::MemoryStore;
use campsite::http::{Handler, MiddlewareChain, Request, Response};
use campsite::middleware::{MethodOverrideMiddleware, SessionMiddleware};
use campsite::server::error_response;
use campsite::state::AppState;
use campsite::urls;
use hyper::{HeaderMap, Method};

pub struct TestApp {
	pub state: AppState,
	handler: Arc<dyn Handler>,
	cookie: Option<String>,
}

impl TestApp {
	pub fn new() -> Self {
		let state = AppState::new(Arc::new(MemoryStore::new()));
		let router = urls::routes(state.clone());
		let handler: Arc<dyn Handler> = Arc::new(
			MiddlewareChain::new(Arc::new(router))
				.with_middleware(Arc::new(SessionMiddleware::new()))
				.with_middleware(Arc::new(MethodOverrideMiddleware::new())),
		);
		Self {
			state,
			handler,
			cookie: None,
		}
	}

	pub async fn get(&mut self, path: &str) -> Response {
		self.send(Method::GET, path, &[]).await
	}

	pub async fn post(&mut self, path: &str, fields: &[(&str, &str)]) -> Response {
		self.send(Method::POST, path, fields).await
	}

	/// Drive a request through the chain, rendering errors the way the
	/// server does, and keep the session cookie across requests.
	async fn send(&mut self, method: Method, path: &str, fields: &[(&str, &str)]) -> Response {
		let body = serde_urlencoded::to_string(fields).expect("encodable form fields");

		let mut headers = HeaderMap::new();
		if let Some(cookie) = &self.cookie {
			headers.insert(
				"cookie",
				format!("sessionid={}", cookie).parse().expect("valid cookie"),
			);
		}

		let request = Request::builder()
			.method(method)
			.uri(path)
			.headers(headers)
			.body(body)
			.build()
			.expect("valid test request");

		let response = match self.handler.handle(request).await {
			Ok(response) => response,
			Err(error) => error_response(&error),
		};

		if let Some(set_cookie) = response
			.headers
			.get("set-cookie")
			.and_then(|h| h.to_str().ok())
			&& let Some(rest) = set_cookie.strip_prefix("sessionid=")
			&& let Some(value) = rest.split(';').next()
		{
			self.cookie = Some(value.to_string());
		}

		response
	}
}

/// A complete, valid campground form body.
pub fn campground_fields() -> Vec<(&'static str, &'static str)> {
	vec![
		("campground[title]", "Pine Ridge"),
		("campground[location]", "Bend, OR"),
		("campground[price]", "24.50"),
		("campground[description]", "Tall pines and river access"),
		("campground[image]", "https://example.com/pine.jpg"),
	]
}

/// Extract the id segment from a `/campgrounds/<id>` Location header.
pub fn id_from_location(response: &Response) -> String {
	response
		.location()
		.expect("redirect with location")
		.rsplit('/')
		.next()
		.expect("location has an id segment")
		.to_string()
}
