//! Campground resource handlers.

use async_trait::async_trait;
use bson::oid::ObjectId;

use super::{CampgroundContext, ReviewContext, base_context, path_object_id, validation_error};
use crate::exception::{HttpError, Result};
use crate::forms::{CampgroundForm, CampgroundPayload};
use crate::http::{Handler, Request, Response};
use crate::messages::Message;
use crate::state::AppState;
use crate::templates;

/// GET /campgrounds - list all campgrounds.
pub struct CampgroundList {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundList {
	async fn handle(&self, request: Request) -> Result<Response> {
		let campgrounds = self.state.campgrounds.all().await?;
		let mut context = base_context(&self.state, &request);
		context.insert(
			"campgrounds",
			&campgrounds
				.iter()
				.map(CampgroundContext::from)
				.collect::<Vec<_>>(),
		);
		templates::render("campgrounds/index.html", &context)
	}
}

/// GET /campgrounds/add - render the create form.
pub struct CampgroundNew {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundNew {
	async fn handle(&self, request: Request) -> Result<Response> {
		let context = base_context(&self.state, &request);
		templates::render("campgrounds/add.html", &context)
	}
}

/// POST /campgrounds - validate and create a campground.
pub struct CampgroundCreate {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundCreate {
	async fn handle(&self, request: Request) -> Result<Response> {
		let payload = validated_payload(&request)?;
		let id = self.state.campgrounds.create(&payload).await?;

		self.state.messages.add(
			&request.session_key(),
			Message::success("Successfully created a new campground"),
		);
		Ok(Response::redirect(format!("/campgrounds/{}", id.to_hex())))
	}
}

/// GET /campgrounds/{id} - show one campground with its reviews resolved.
///
/// A missing or malformed id is a soft failure: flash a notice and send
/// the user back to the list instead of erroring.
pub struct CampgroundShow {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundShow {
	async fn handle(&self, request: Request) -> Result<Response> {
		let campground = match lookup(&self.state, &request).await? {
			Some(campground) => campground,
			None => {
				self.state.messages.add(
					&request.session_key(),
					Message::error("Can not find that campground"),
				);
				return Ok(Response::redirect("/campgrounds"));
			}
		};

		let reviews = self.state.reviews.find_many(&campground.reviews).await?;
		let mut context = base_context(&self.state, &request);
		context.insert("campground", &CampgroundContext::from(&campground));
		context.insert(
			"reviews",
			&reviews.iter().map(ReviewContext::from).collect::<Vec<_>>(),
		);
		templates::render("campgrounds/show.html", &context)
	}
}

/// GET /campgrounds/{id}/edit - render the edit form.
pub struct CampgroundEdit {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundEdit {
	async fn handle(&self, request: Request) -> Result<Response> {
		let id = path_object_id(&request, "id")?;
		let campground = self
			.state
			.campgrounds
			.find(id)
			.await?
			.ok_or_else(|| HttpError::NotFound("Campground not found".to_string()))?;

		let mut context = base_context(&self.state, &request);
		context.insert("campground", &CampgroundContext::from(&campground));
		templates::render("campgrounds/edit.html", &context)
	}
}

/// PUT /campgrounds/{id} - validate and overwrite the mutable fields.
pub struct CampgroundUpdate {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundUpdate {
	async fn handle(&self, request: Request) -> Result<Response> {
		let id = path_object_id(&request, "id")?;
		let payload = validated_payload(&request)?;

		if !self.state.campgrounds.update(id, &payload).await? {
			return Err(HttpError::NotFound("Campground not found".to_string()));
		}

		self.state.messages.add(
			&request.session_key(),
			Message::success("Successfully updated a campground"),
		);
		Ok(Response::redirect(format!("/campgrounds/{}", id.to_hex())))
	}
}

/// DELETE /campgrounds/{id} - delete a campground.
///
/// Child reviews are intentionally left in place; see DESIGN.md.
pub struct CampgroundDelete {
	pub state: AppState,
}

#[async_trait]
impl Handler for CampgroundDelete {
	async fn handle(&self, request: Request) -> Result<Response> {
		let id = path_object_id(&request, "id")?;

		if !self.state.campgrounds.delete(id).await? {
			return Err(HttpError::NotFound("Campground not found".to_string()));
		}

		self.state.messages.add(
			&request.session_key(),
			Message::success("Successfully deleted a campground"),
		);
		Ok(Response::redirect("/campgrounds"))
	}
}

async fn lookup(
	state: &AppState,
	request: &Request,
) -> Result<Option<crate::models::Campground>> {
	let Some(raw) = request.path_params.get("id") else {
		return Ok(None);
	};
	let Ok(id) = ObjectId::parse_str(raw) else {
		return Ok(None);
	};
	Ok(state.campgrounds.find(id).await?)
}

fn validated_payload(request: &Request) -> Result<CampgroundPayload> {
	let form = request.form_data()?;
	CampgroundForm::from_form(&form)
		.validate()
		.map_err(validation_error)
}
