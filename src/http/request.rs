//! HTTP request representation.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;
use std::net::SocketAddr;

use super::form_data::FormData;
use crate::exception::Result;

/// Incoming HTTP request.
///
/// Built by the server from the hyper parts, enriched by middleware
/// (session id) and the router (path parameters) before it reaches a
/// handler.
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Path variables extracted by the router (`/campgrounds/{id}`).
	pub path_params: HashMap<String, String>,
	/// Raw query parameters from the URI.
	pub query_params: HashMap<String, String>,
	pub remote_addr: Option<SocketAddr>,
	/// Session id guaranteed by the session middleware.
	pub session_id: Option<String>,
}

impl Request {
	/// Create a new request from its parts.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::http::Request;
	/// use hyper::{Method, Uri, Version, HeaderMap};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/campgrounds?sort=price"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.path(), "/campgrounds");
	/// assert_eq!(request.query_params.get("sort"), Some(&"price".to_string()));
	/// ```
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
			remote_addr: None,
			session_id: None,
		}
	}

	/// Builder for constructing requests, mainly in tests.
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// The request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Set a path parameter (used by the router for path variable extraction).
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}

	/// Parse the body as a urlencoded form.
	pub fn form_data(&self) -> Result<FormData> {
		FormData::parse(&self.body)
	}

	/// Look up a cookie by name.
	///
	/// Malformed cookie fragments (missing `=`, empty name) are skipped.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::http::Request;
	/// use hyper::Method;
	///
	/// let mut headers = hyper::HeaderMap::new();
	/// headers.insert("cookie", "sessionid=abc123; theme=dark".parse().unwrap());
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/")
	///     .headers(headers)
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.cookie("sessionid"), Some("abc123".to_string()));
	/// assert_eq!(request.cookie("missing"), None);
	/// ```
	pub fn cookie(&self, name: &str) -> Option<String> {
		self.headers
			.get(hyper::header::COOKIE)
			.and_then(|h| h.to_str().ok())
			.and_then(|cookies| {
				cookies.split(';').find_map(|cookie| {
					let (k, v) = cookie.trim().split_once('=')?;
					if !k.is_empty() && k == name {
						Some(v.to_string())
					} else {
						None
					}
				})
			})
	}

	/// Session key for flash-message storage.
	///
	/// Prefers the id placed by the session middleware, then the session
	/// cookie, then a fixed fallback.
	pub fn session_key(&self) -> String {
		self.session_id
			.clone()
			.or_else(|| self.cookie(crate::middleware::session::SESSION_COOKIE))
			.unwrap_or_else(|| "default".to_string())
	}

	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}
}

/// Builder for `Request`.
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Build the request. Fails on an unparseable URI.
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e| crate::exception::HttpError::Internal(format!("invalid uri: {}", e)))?;
		Ok(Request::new(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_query_params_preserve_equals_in_value() {
		let request = Request::builder().uri("/x?token=abc==").build().unwrap();
		assert_eq!(request.query_params.get("token"), Some(&"abc==".to_string()));
	}

	#[rstest]
	fn test_path_params_set_by_router() {
		let mut request = Request::builder().uri("/campgrounds/123").build().unwrap();
		request.set_path_param("id", "123");
		assert_eq!(request.path_params.get("id"), Some(&"123".to_string()));
	}

	#[rstest]
	fn test_session_key_falls_back_to_cookie() {
		let mut headers = HeaderMap::new();
		headers.insert("cookie", "sessionid=s-1".parse().unwrap());
		let request = Request::builder().headers(headers).build().unwrap();
		assert_eq!(request.session_key(), "s-1");
	}

	#[rstest]
	fn test_session_key_default_without_cookie() {
		let request = Request::builder().build().unwrap();
		assert_eq!(request.session_key(), "default");
	}

	#[rstest]
	fn test_form_data_from_body() {
		let request = Request::builder()
			.method(Method::POST)
			.uri("/campgrounds")
			.body(&b"campground%5Btitle%5D=Pine"[..])
			.build()
			.unwrap();
		let form = request.form_data().unwrap();
		assert_eq!(form.get("campground[title]"), Some("Pine"));
	}

	#[rstest]
	fn test_malformed_cookie_fragment_skipped() {
		let mut headers = HeaderMap::new();
		headers.insert("cookie", "garbage; sessionid=ok".parse().unwrap());
		let request = Request::builder().headers(headers).build().unwrap();
		assert_eq!(request.cookie("sessionid"), Some("ok".to_string()));
	}
}
