//! Application error type shared by every handler.
//!
//! Handlers never catch: a failure bubbles up through the middleware chain
//! to the server, which renders it centrally. `status()` maps each variant
//! to the HTTP status the rendered error page carries.

use hyper::StatusCode;

use crate::db::StoreError;

/// Tagged error carrying a message and an HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
	/// Request body failed schema validation. Carries the joined
	/// violation messages.
	#[error("{0}")]
	Validation(String),

	/// No route or resource matched.
	#[error("{0}")]
	NotFound(String),

	/// Document store failure.
	#[error(transparent)]
	Store(#[from] StoreError),

	/// Template rendering failure.
	#[error("template error: {0}")]
	Template(String),

	/// Anything else. Rendered as a 500.
	#[error("{0}")]
	Internal(String),
}

impl HttpError {
	/// Status code for the centrally rendered error page.
	///
	/// Variants without an explicit mapping default to 500.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::exception::HttpError;
	/// use hyper::StatusCode;
	///
	/// assert_eq!(HttpError::Validation("price is required".into()).status(), StatusCode::BAD_REQUEST);
	/// assert_eq!(HttpError::NotFound("Page Not Found!".into()).status(), StatusCode::NOT_FOUND);
	/// assert_eq!(HttpError::Internal("boom".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
	/// ```
	pub fn status(&self) -> StatusCode {
		match self {
			HttpError::Validation(_) => StatusCode::BAD_REQUEST,
			HttpError::NotFound(_) => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Result type used by handlers and middleware.
pub type Result<T> = std::result::Result<T, HttpError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(HttpError::Validation("x".into()), StatusCode::BAD_REQUEST)]
	#[case(HttpError::NotFound("x".into()), StatusCode::NOT_FOUND)]
	#[case(HttpError::Template("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
	#[case(HttpError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_status_mapping(#[case] error: HttpError, #[case] expected: StatusCode) {
		assert_eq!(error.status(), expected);
	}

	#[rstest]
	fn test_store_error_maps_to_500() {
		let error = HttpError::from(StoreError::Query("cursor died".to_string()));
		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[rstest]
	fn test_display_carries_message() {
		let error = HttpError::Validation("campground.price is required".to_string());
		assert_eq!(error.to_string(), "campground.price is required");
	}
}
