//! HTTP response representation.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};

/// Outgoing HTTP response.
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// 200 OK.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// 404 Not Found.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// 500 Internal Server Error.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// 302 Found with a Location header.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::redirect("/campgrounds");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/campgrounds"
	/// );
	/// ```
	pub fn redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// 200 OK with an HTML body and Content-Type header.
	pub fn html(body: impl Into<Bytes>) -> Self {
		let mut response = Self::ok().with_body(body);
		response.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
		);
		response
	}

	/// Set the response body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a header. Invalid names or values are silently dropped.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Add a Location header.
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = hyper::header::HeaderValue::from_str(location) {
			self.headers.insert(hyper::header::LOCATION, value);
		}
		self
	}

	/// Add a Set-Cookie header (HttpOnly, Path=/).
	pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
		let cookie = format!("{}={}; Path=/; HttpOnly", name, value);
		if let Ok(header_value) = hyper::header::HeaderValue::from_str(&cookie) {
			self.headers
				.append(hyper::header::SET_COOKIE, header_value);
		}
		self
	}

	/// The Location header value, if any.
	pub fn location(&self) -> Option<&str> {
		self.headers
			.get(hyper::header::LOCATION)
			.and_then(|h| h.to_str().ok())
	}

	/// Response body as UTF-8 text (lossy).
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).to_string()
	}
}
