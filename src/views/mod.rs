//! Resource handlers.
//!
//! Each handler validates input, issues one or two repository calls, and
//! renders a view or redirects. Failures are returned, never caught; the
//! server renders them centrally.

pub mod campgrounds;
pub mod pages;
pub mod reviews;

use bson::oid::ObjectId;
use serde::Serialize;
use tera::Context;

use crate::exception::{HttpError, Result};
use crate::http::Request;
use crate::models::{Campground, Review};
use crate::state::AppState;

/// Campground fields as exposed to templates, with the id in hex form.
#[derive(Serialize)]
pub(crate) struct CampgroundContext {
	id: String,
	title: String,
	location: String,
	price: f64,
	description: String,
	image: String,
}

impl From<&Campground> for CampgroundContext {
	fn from(campground: &Campground) -> Self {
		Self {
			id: campground.id.map(|id| id.to_hex()).unwrap_or_default(),
			title: campground.title.clone(),
			location: campground.location.clone(),
			price: campground.price,
			description: campground.description.clone(),
			image: campground.image.clone(),
		}
	}
}

/// Review fields as exposed to templates.
#[derive(Serialize)]
pub(crate) struct ReviewContext {
	id: String,
	rating: i32,
	body: String,
}

impl From<&Review> for ReviewContext {
	fn from(review: &Review) -> Self {
		Self {
			id: review.id.map(|id| id.to_hex()).unwrap_or_default(),
			rating: review.rating,
			body: review.body.clone(),
		}
	}
}

/// Template context with the session's flash messages drained into it.
pub(crate) fn base_context(state: &AppState, request: &Request) -> Context {
	let mut context = Context::new();
	let messages = state.messages.take(&request.session_key());
	context.insert("messages", &messages);
	context
}

/// Parse a path parameter as an ObjectId; 404 on absence or malformed input.
pub(crate) fn path_object_id(request: &Request, name: &str) -> Result<ObjectId> {
	request
		.path_params
		.get(name)
		.and_then(|raw| ObjectId::parse_str(raw).ok())
		.ok_or_else(|| HttpError::NotFound("Campground not found".to_string()))
}

/// Translate a validation failure into the tagged 400 error, joining
/// every violation with a comma. The request is rejected as one unit.
pub(crate) fn validation_error(violations: Vec<String>) -> HttpError {
	HttpError::Validation(violations.join(","))
}
