//! Review entity and repository.

use bson::doc;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::{DocumentStore, StoreResult};
use crate::forms::ReviewPayload;

/// A rating-plus-text entity attached to exactly one campground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<ObjectId>,
	pub rating: i32,
	pub body: String,
}

impl Review {
	pub const COLLECTION: &'static str = "reviews";
}

/// Typed repository over the `reviews` collection.
#[derive(Clone)]
pub struct ReviewRepo {
	store: Arc<dyn DocumentStore>,
}

impl ReviewRepo {
	pub fn new(store: Arc<dyn DocumentStore>) -> Self {
		Self { store }
	}

	/// Persist a new review from validated fields.
	pub async fn create(&self, payload: &ReviewPayload) -> StoreResult<ObjectId> {
		self.store
			.insert_one(
				Review::COLLECTION,
				doc! { "rating": payload.rating, "body": payload.body.as_str() },
			)
			.await
	}

	/// Find one review by id.
	pub async fn find(&self, id: ObjectId) -> StoreResult<Option<Review>> {
		let document = self
			.store
			.find_one(Review::COLLECTION, doc! { "_id": id })
			.await?;
		document
			.map(|doc| Ok(bson::deserialize_from_document(doc)?))
			.transpose()
	}

	/// Resolve a list of review references to documents, in reference
	/// order. Dangling references are skipped.
	pub async fn find_many(&self, ids: &[ObjectId]) -> StoreResult<Vec<Review>> {
		let mut reviews = Vec::with_capacity(ids.len());
		for id in ids {
			if let Some(review) = self.find(*id).await? {
				reviews.push(review);
			}
		}
		Ok(reviews)
	}

	/// Delete a review document by id.
	pub async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
		let deleted = self
			.store
			.delete_one(Review::COLLECTION, doc! { "_id": id })
			.await?;
		Ok(deleted > 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::db::MemoryStore;
	use rstest::rstest;

	fn repo() -> ReviewRepo {
		ReviewRepo::new(Arc::new(MemoryStore::new()))
	}

	fn payload(rating: i32, body: &str) -> ReviewPayload {
		ReviewPayload {
			rating,
			body: body.to_string(),
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_then_find() {
		let repo = repo();
		let id = repo.create(&payload(5, "Gorgeous site")).await.unwrap();

		let found = repo.find(id).await.unwrap().unwrap();
		assert_eq!(found.rating, 5);
		assert_eq!(found.body, "Gorgeous site");
	}

	#[rstest]
	#[tokio::test]
	async fn test_find_many_skips_dangling_references() {
		let repo = repo();
		let kept = repo.create(&payload(4, "kept")).await.unwrap();
		let dangling = ObjectId::new();

		let reviews = repo.find_many(&[kept, dangling]).await.unwrap();
		assert_eq!(reviews.len(), 1);
		assert_eq!(reviews[0].body, "kept");
	}

	#[rstest]
	#[tokio::test]
	async fn test_find_many_preserves_reference_order() {
		let repo = repo();
		let first = repo.create(&payload(1, "first")).await.unwrap();
		let second = repo.create(&payload(2, "second")).await.unwrap();

		let reviews = repo.find_many(&[second, first]).await.unwrap();
		assert_eq!(reviews[0].body, "second");
		assert_eq!(reviews[1].body, "first");
	}

	#[rstest]
	#[tokio::test]
	async fn test_delete() {
		let repo = repo();
		let id = repo.create(&payload(3, "gone soon")).await.unwrap();

		assert!(repo.delete(id).await.unwrap());
		assert!(repo.find(id).await.unwrap().is_none());
	}
}
