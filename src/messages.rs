//! Flash messages: one-time notifications shown on the next rendered page.
//!
//! Storage is keyed by session id and constructed once at startup, then
//! passed through application state; nothing here is a module-level
//! singleton.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Message severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
	Info,
	Success,
	Error,
}

/// A single flash message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
	pub level: MessageLevel,
	pub text: String,
}

impl Message {
	pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
		}
	}

	/// Create an info message.
	pub fn info(text: impl Into<String>) -> Self {
		Self::new(MessageLevel::Info, text)
	}

	/// Create a success message.
	pub fn success(text: impl Into<String>) -> Self {
		Self::new(MessageLevel::Success, text)
	}

	/// Create an error message.
	pub fn error(text: impl Into<String>) -> Self {
		Self::new(MessageLevel::Error, text)
	}
}

/// Message storage backend.
pub trait MessageStorage: Send + Sync {
	/// Queue a message for a session.
	fn add(&self, session_id: &str, message: Message);

	/// Take all messages for a session, clearing them. Messages are
	/// one-shot: a second call returns nothing.
	fn take(&self, session_id: &str) -> Vec<Message>;
}

/// In-memory session-keyed message storage.
pub struct SessionStorage {
	messages: RwLock<HashMap<String, Vec<Message>>>,
}

impl SessionStorage {
	/// Create a new SessionStorage.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::messages::{Message, MessageStorage, SessionStorage};
	///
	/// let storage = SessionStorage::new();
	/// storage.add("s-1", Message::success("Saved!"));
	/// assert_eq!(storage.take("s-1").len(), 1);
	/// assert!(storage.take("s-1").is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			messages: RwLock::new(HashMap::new()),
		}
	}
}

impl Default for SessionStorage {
	fn default() -> Self {
		Self::new()
	}
}

impl MessageStorage for SessionStorage {
	fn add(&self, session_id: &str, message: Message) {
		let mut messages = self.messages.write().unwrap_or_else(|e| e.into_inner());
		messages
			.entry(session_id.to_string())
			.or_default()
			.push(message);
	}

	fn take(&self, session_id: &str) -> Vec<Message> {
		let mut messages = self.messages.write().unwrap_or_else(|e| e.into_inner());
		messages.remove(session_id).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_add_and_take_preserves_order() {
		let storage = SessionStorage::new();
		storage.add("s", Message::info("first"));
		storage.add("s", Message::success("second"));

		let messages = storage.take("s");
		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0].text, "first");
		assert_eq!(messages[1].level, MessageLevel::Success);
	}

	#[rstest]
	fn test_take_drains_exactly_once() {
		let storage = SessionStorage::new();
		storage.add("s", Message::error("Can not find that campground"));

		assert_eq!(storage.take("s").len(), 1);
		assert!(storage.take("s").is_empty());
	}

	#[rstest]
	fn test_sessions_are_isolated() {
		let storage = SessionStorage::new();
		storage.add("s-1", Message::info("one"));
		storage.add("s-2", Message::info("two"));

		assert_eq!(storage.take("s-1").len(), 1);
		assert_eq!(storage.take("s-2").len(), 1);
	}

	#[rstest]
	fn test_take_unknown_session_is_empty() {
		let storage = SessionStorage::new();
		assert!(storage.take("missing").is_empty());
	}

	#[rstest]
	fn test_level_serializes_lowercase_for_templates() {
		let value = serde_json::to_value(Message::success("Saved!")).unwrap();
		assert_eq!(value["level"], "success");
		assert_eq!(value["text"], "Saved!");
	}
}
