//! In-memory document store.
//!
//! Used by the test suite and usable as an ephemeral backend. Filters are
//! matched by field equality; updates interpret the `$set`, `$push` and
//! `$pull` operators.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use std::collections::HashMap;
use std::sync::RwLock;

use super::store::{DocumentStore, StoreError, StoreResult};

pub struct MemoryStore {
	collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self {
			collections: RwLock::new(HashMap::new()),
		}
	}

	fn matches(document: &Document, filter: &Document) -> bool {
		filter.iter().all(|(key, value)| document.get(key) == Some(value))
	}

	fn apply_update(document: &mut Document, update: &Document) -> StoreResult<()> {
		for (operator, spec) in update {
			let spec = spec.as_document().ok_or_else(|| {
				StoreError::Query(format!("update operator {} takes a document", operator))
			})?;

			match operator.as_str() {
				"$set" => {
					for (key, value) in spec {
						document.insert(key.clone(), value.clone());
					}
				}
				"$push" => {
					for (key, value) in spec {
						match document.get_mut(key) {
							Some(Bson::Array(items)) => items.push(value.clone()),
							Some(other) => {
								return Err(StoreError::Query(format!(
									"cannot $push into non-array field {}: {}",
									key, other
								)));
							}
							None => {
								document.insert(key.clone(), Bson::Array(vec![value.clone()]));
							}
						}
					}
				}
				"$pull" => {
					for (key, value) in spec {
						if let Some(Bson::Array(items)) = document.get_mut(key) {
							items.retain(|item| item != value);
						}
					}
				}
				other => {
					return Err(StoreError::Query(format!(
						"unsupported update operator: {}",
						other
					)));
				}
			}
		}
		Ok(())
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl DocumentStore for MemoryStore {
	async fn find_one(
		&self,
		collection: &str,
		filter: Document,
	) -> StoreResult<Option<Document>> {
		let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
		Ok(collections
			.get(collection)
			.and_then(|docs| docs.iter().find(|doc| Self::matches(doc, &filter)))
			.cloned())
	}

	async fn find_many(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
		let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
		Ok(collections
			.get(collection)
			.map(|docs| {
				docs.iter()
					.filter(|doc| Self::matches(doc, &filter))
					.cloned()
					.collect()
			})
			.unwrap_or_default())
	}

	async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
		let mut document = document;
		let id = match document.get("_id") {
			Some(Bson::ObjectId(oid)) => *oid,
			_ => {
				let oid = ObjectId::new();
				document.insert("_id", oid);
				oid
			}
		};

		let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
		collections
			.entry(collection.to_string())
			.or_default()
			.push(document);
		Ok(id)
	}

	async fn update_one(
		&self,
		collection: &str,
		filter: Document,
		update: Document,
	) -> StoreResult<u64> {
		let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
		let Some(docs) = collections.get_mut(collection) else {
			return Ok(0);
		};
		let Some(document) = docs.iter_mut().find(|doc| Self::matches(doc, &filter)) else {
			return Ok(0);
		};

		Self::apply_update(document, &update)?;
		Ok(1)
	}

	async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64> {
		let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
		let Some(docs) = collections.get_mut(collection) else {
			return Ok(0);
		};
		let Some(index) = docs.iter().position(|doc| Self::matches(doc, &filter)) else {
			return Ok(0);
		};

		docs.remove(index);
		Ok(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bson::doc;
	use rstest::rstest;

	#[rstest]
	#[tokio::test]
	async fn test_insert_generates_id() {
		let store = MemoryStore::new();
		let id = store
			.insert_one("campgrounds", doc! { "title": "Pine Ridge" })
			.await
			.unwrap();

		let found = store
			.find_one("campgrounds", doc! { "_id": id })
			.await
			.unwrap()
			.unwrap();
		assert_eq!(found.get_str("title").unwrap(), "Pine Ridge");
	}

	#[rstest]
	#[tokio::test]
	async fn test_find_many_preserves_insertion_order() {
		let store = MemoryStore::new();
		store
			.insert_one("campgrounds", doc! { "title": "a" })
			.await
			.unwrap();
		store
			.insert_one("campgrounds", doc! { "title": "b" })
			.await
			.unwrap();

		let all = store.find_many("campgrounds", doc! {}).await.unwrap();
		assert_eq!(all.len(), 2);
		assert_eq!(all[0].get_str("title").unwrap(), "a");
		assert_eq!(all[1].get_str("title").unwrap(), "b");
	}

	#[rstest]
	#[tokio::test]
	async fn test_update_set_overwrites_fields() {
		let store = MemoryStore::new();
		let id = store
			.insert_one("campgrounds", doc! { "title": "old", "price": 1.0 })
			.await
			.unwrap();

		let matched = store
			.update_one(
				"campgrounds",
				doc! { "_id": id },
				doc! { "$set": { "title": "new" } },
			)
			.await
			.unwrap();
		assert_eq!(matched, 1);

		let found = store
			.find_one("campgrounds", doc! { "_id": id })
			.await
			.unwrap()
			.unwrap();
		assert_eq!(found.get_str("title").unwrap(), "new");
		assert_eq!(found.get_f64("price").unwrap(), 1.0);
	}

	#[rstest]
	#[tokio::test]
	async fn test_push_and_pull_array() {
		let store = MemoryStore::new();
		let id = store
			.insert_one("campgrounds", doc! { "reviews": [] })
			.await
			.unwrap();
		let review_id = ObjectId::new();

		store
			.update_one(
				"campgrounds",
				doc! { "_id": id },
				doc! { "$push": { "reviews": review_id } },
			)
			.await
			.unwrap();

		let found = store
			.find_one("campgrounds", doc! { "_id": id })
			.await
			.unwrap()
			.unwrap();
		assert_eq!(found.get_array("reviews").unwrap().len(), 1);

		store
			.update_one(
				"campgrounds",
				doc! { "_id": id },
				doc! { "$pull": { "reviews": review_id } },
			)
			.await
			.unwrap();

		let found = store
			.find_one("campgrounds", doc! { "_id": id })
			.await
			.unwrap()
			.unwrap();
		assert!(found.get_array("reviews").unwrap().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_update_unknown_operator_fails() {
		let store = MemoryStore::new();
		let id = store.insert_one("c", doc! {}).await.unwrap();

		let error = store
			.update_one("c", doc! { "_id": id }, doc! { "$rename": { "a": "b" } })
			.await
			.unwrap_err();
		assert!(matches!(error, StoreError::Query(_)));
	}

	#[rstest]
	#[tokio::test]
	async fn test_delete_removes_document() {
		let store = MemoryStore::new();
		let id = store.insert_one("c", doc! {}).await.unwrap();

		assert_eq!(store.delete_one("c", doc! { "_id": id }).await.unwrap(), 1);
		assert_eq!(store.delete_one("c", doc! { "_id": id }).await.unwrap(), 0);
		assert!(store.find_one("c", doc! { "_id": id }).await.unwrap().is_none());
	}
}
