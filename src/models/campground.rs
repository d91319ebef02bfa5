//! Campground entity and repository.

use bson::oid::ObjectId;
use bson::{Document, doc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::{DocumentStore, StoreResult};
use crate::forms::CampgroundPayload;

/// A listed campground with descriptive fields and owned reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campground {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<ObjectId>,
	pub title: String,
	pub location: String,
	pub price: f64,
	pub description: String,
	pub image: String,
	/// Review references, in creation order.
	#[serde(default)]
	pub reviews: Vec<ObjectId>,
}

impl Campground {
	pub const COLLECTION: &'static str = "campgrounds";
}

/// Typed repository over the `campgrounds` collection.
#[derive(Clone)]
pub struct CampgroundRepo {
	store: Arc<dyn DocumentStore>,
}

impl CampgroundRepo {
	pub fn new(store: Arc<dyn DocumentStore>) -> Self {
		Self { store }
	}

	/// All campgrounds, in insertion order.
	pub async fn all(&self) -> StoreResult<Vec<Campground>> {
		let documents = self
			.store
			.find_many(Campground::COLLECTION, doc! {})
			.await?;
		documents
			.into_iter()
			.map(|doc| Ok(bson::deserialize_from_document(doc)?))
			.collect()
	}

	/// Find one campground by id.
	pub async fn find(&self, id: ObjectId) -> StoreResult<Option<Campground>> {
		let document = self
			.store
			.find_one(Campground::COLLECTION, doc! { "_id": id })
			.await?;
		document
			.map(|doc| Ok(bson::deserialize_from_document(doc)?))
			.transpose()
	}

	/// Persist a new campground from validated fields. Exactly one new
	/// document, with an empty review list.
	pub async fn create(&self, payload: &CampgroundPayload) -> StoreResult<ObjectId> {
		self.store
			.insert_one(Campground::COLLECTION, Self::fields(payload, true))
			.await
	}

	/// Overwrite the mutable fields of a campground. Returns false when
	/// no campground has the given id.
	pub async fn update(&self, id: ObjectId, payload: &CampgroundPayload) -> StoreResult<bool> {
		let matched = self
			.store
			.update_one(
				Campground::COLLECTION,
				doc! { "_id": id },
				doc! { "$set": Self::fields(payload, false) },
			)
			.await?;
		Ok(matched > 0)
	}

	/// Delete a campground by id. Child reviews are left in place.
	pub async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
		let deleted = self
			.store
			.delete_one(Campground::COLLECTION, doc! { "_id": id })
			.await?;
		Ok(deleted > 0)
	}

	/// Append a review reference to a campground's list.
	pub async fn push_review(&self, id: ObjectId, review_id: ObjectId) -> StoreResult<bool> {
		let matched = self
			.store
			.update_one(
				Campground::COLLECTION,
				doc! { "_id": id },
				doc! { "$push": { "reviews": review_id } },
			)
			.await?;
		Ok(matched > 0)
	}

	/// Remove a review reference from a campground's list.
	pub async fn pull_review(&self, id: ObjectId, review_id: ObjectId) -> StoreResult<bool> {
		let matched = self
			.store
			.update_one(
				Campground::COLLECTION,
				doc! { "_id": id },
				doc! { "$pull": { "reviews": review_id } },
			)
			.await?;
		Ok(matched > 0)
	}

	fn fields(payload: &CampgroundPayload, with_reviews: bool) -> Document {
		let mut fields = doc! {
			"title": payload.title.as_str(),
			"location": payload.location.as_str(),
			"price": payload.price,
			"description": payload.description.as_str(),
			"image": payload.image.as_str(),
		};
		if with_reviews {
			fields.insert("reviews", bson::Bson::Array(Vec::new()));
		}
		fields
	}
}
