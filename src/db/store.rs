//! Document store trait and error type.

use async_trait::async_trait;
use bson::Document;
use bson::oid::ObjectId;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Unified error type for document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("connection error: {0}")]
	Connection(String),

	#[error("query error: {0}")]
	Query(String),

	#[error("serialization error: {0}")]
	Serialization(String),

	#[error("invalid id: {0}")]
	InvalidId(String),
}

impl From<mongodb::error::Error> for StoreError {
	fn from(err: mongodb::error::Error) -> Self {
		use mongodb::error::ErrorKind;

		match *err.kind {
			ErrorKind::Io(_) => StoreError::Connection(err.to_string()),
			ErrorKind::Authentication { .. } => StoreError::Connection(err.to_string()),
			_ => StoreError::Query(err.to_string()),
		}
	}
}

impl From<bson::error::Error> for StoreError {
	fn from(err: bson::error::Error) -> Self {
		StoreError::Serialization(err.to_string())
	}
}

/// Async document store over named collections.
///
/// Filters and updates are `bson::Document`s in MongoDB update syntax;
/// the in-memory backend interprets the `$set`, `$push` and `$pull`
/// operators the repositories use.
///
/// # Example
///
/// ```rust,ignore
/// use bson::doc;
///
/// let id = store.insert_one("campgrounds", doc! { "title": "Pine Ridge" }).await?;
/// let found = store.find_one("campgrounds", doc! { "_id": id }).await?;
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
	/// Find a single document matching the filter.
	async fn find_one(
		&self,
		collection: &str,
		filter: Document,
	) -> StoreResult<Option<Document>>;

	/// Find all documents matching the filter, in insertion order.
	async fn find_many(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

	/// Insert a document, returning its generated id.
	async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

	/// Update the first document matching the filter. Returns the number
	/// of matched documents (0 or 1).
	async fn update_one(
		&self,
		collection: &str,
		filter: Document,
		update: Document,
	) -> StoreResult<u64>;

	/// Delete the first document matching the filter. Returns the number
	/// of deleted documents (0 or 1).
	async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<u64>;
}
