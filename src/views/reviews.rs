//! Review resource handlers.
//!
//! Attaching and detaching a review are each two separate writes with no
//! transaction: a crash between them leaves an orphaned review document
//! or a dangling reference. The repositories tolerate both states.

use async_trait::async_trait;

use super::{path_object_id, validation_error};
use crate::exception::{HttpError, Result};
use crate::forms::ReviewForm;
use crate::http::{Handler, Request, Response};
use crate::state::AppState;

/// POST /campgrounds/{id}/reviews - validate and create a review under a
/// campground.
pub struct ReviewCreate {
	pub state: AppState,
}

#[async_trait]
impl Handler for ReviewCreate {
	async fn handle(&self, request: Request) -> Result<Response> {
		let campground_id = path_object_id(&request, "id")?;
		if self.state.campgrounds.find(campground_id).await?.is_none() {
			return Err(HttpError::NotFound("Campground not found".to_string()));
		}

		let form = request.form_data()?;
		let payload = ReviewForm::from_form(&form)
			.validate()
			.map_err(validation_error)?;

		// Two writes: insert the review, then append its reference to
		// the parent. Not atomic.
		let review_id = self.state.reviews.create(&payload).await?;
		self.state
			.campgrounds
			.push_review(campground_id, review_id)
			.await?;

		Ok(Response::redirect(format!(
			"/campgrounds/{}",
			campground_id.to_hex()
		)))
	}
}

/// DELETE /campgrounds/{id}/reviews/{review_id} - detach a review from its
/// campground and remove the document.
pub struct ReviewDelete {
	pub state: AppState,
}

#[async_trait]
impl Handler for ReviewDelete {
	async fn handle(&self, request: Request) -> Result<Response> {
		let campground_id = path_object_id(&request, "id")?;
		let review_id = path_object_id(&request, "review_id")?;

		// Two writes: pull the reference, then delete the document. Not
		// atomic; both are attempted regardless of the other's outcome.
		self.state
			.campgrounds
			.pull_review(campground_id, review_id)
			.await?;
		self.state.reviews.delete(review_id).await?;

		Ok(Response::redirect(format!(
			"/campgrounds/{}",
			campground_id.to_hex()
		)))
	}
}
