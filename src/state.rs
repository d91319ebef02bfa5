//! Shared application state.
//!
//! Constructed once in `main` and cloned into every handler: repositories
//! over the document store plus the flash-message storage. Dependencies
//! are passed explicitly; there are no module-level singletons.

use std::sync::Arc;

use crate::db::DocumentStore;
use crate::messages::{MessageStorage, SessionStorage};
use crate::models::{CampgroundRepo, ReviewRepo};

#[derive(Clone)]
pub struct AppState {
	pub campgrounds: CampgroundRepo,
	pub reviews: ReviewRepo,
	pub messages: Arc<dyn MessageStorage>,
}

impl AppState {
	/// Build the state over a document store backend.
	pub fn new(store: Arc<dyn DocumentStore>) -> Self {
		Self {
			campgrounds: CampgroundRepo::new(store.clone()),
			reviews: ReviewRepo::new(store),
			messages: Arc::new(SessionStorage::new()),
		}
	}
}
