//! MongoDB document store backend.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document, doc};
use mongodb::Client;
use std::sync::Arc;

use super::store::{DocumentStore, StoreError, StoreResult};

/// MongoDB-backed `DocumentStore`.
///
/// # Example
///
/// ```rust,no_run
/// use campsite::db::MongoStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MongoStore::connect("mongodb://127.0.0.1:27017", "campsite").await?;
/// store.ping().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MongoStore {
	client: Arc<Client>,
	database_name: String,
}

impl MongoStore {
	/// Connect to MongoDB using a connection string.
	pub async fn connect(url: &str, database: &str) -> StoreResult<Self> {
		let client = Client::with_uri_str(url)
			.await
			.map_err(|e| StoreError::Connection(e.to_string()))?;

		Ok(Self {
			client: Arc::new(client),
			database_name: database.to_string(),
		})
	}

	/// Check database connectivity with a ping.
	pub async fn ping(&self) -> StoreResult<()> {
		self.database()
			.run_command(doc! { "ping": 1 })
			.await
			.map_err(|e| StoreError::Connection(e.to_string()))?;
		Ok(())
	}

	fn database(&self) -> mongodb::Database {
		self.client.database(&self.database_name)
	}

	fn collection(&self, name: &str) -> mongodb::Collection<Document> {
		self.database().collection::<Document>(name)
	}
}

#[async_trait]
impl DocumentStore for MongoStore {
	async fn find_one(
		&self,
		collection: &str,
		filter: Document,
	) -> StoreResult<Option<Document>> {
		let found = self.collection(collection).find_one(filter).await?;
		Ok(found)
	}

	async fn find_many(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
		use futures::stream::TryStreamExt;

		let cursor = self.collection(collection).find(filter).await?;
		let documents = cursor.try_collect().await?;
		Ok(documents)
	}

	async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
		let result = self.collection(collection).insert_one(document).await?;

		match result.inserted_id {
			Bson::ObjectId(oid) => Ok(oid),
			other => Err(StoreError::InvalidId(format!(
				"expected ObjectId, got {}",
				other
			))),
		}
	}

	async fn update_one(
		&self,
		collection: &str,
		filter: Document,
		update: Document,
	) -> StoreResult<u64> {
		let result = self
			.collection(collection)
			.update_one(filter, update)
			.await?;
		Ok(result.matched_count)
	}

	async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64> {
		let result = self.collection(collection).delete_one(filter).await?;
		Ok(result.deleted_count)
	}
}
