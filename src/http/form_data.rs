//! Parsed `application/x-www-form-urlencoded` bodies.

use crate::exception::{HttpError, Result};

/// Ordered key/value pairs from a urlencoded body.
///
/// Keys keep the bracket-nested naming convention of the HTML pages
/// (`campground[title]`, `review[rating]`), percent-decoded.
#[derive(Debug, Clone, Default)]
pub struct FormData {
	pairs: Vec<(String, String)>,
}

impl FormData {
	/// Parse a urlencoded body.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::http::FormData;
	///
	/// let form = FormData::parse(b"campground%5Btitle%5D=Pine+Ridge&campground%5Bprice%5D=12.5").unwrap();
	/// assert_eq!(form.get("campground[title]"), Some("Pine Ridge"));
	/// assert_eq!(form.get("campground[price]"), Some("12.5"));
	/// ```
	pub fn parse(body: &[u8]) -> Result<Self> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
			.map_err(|e| HttpError::Internal(format!("malformed form body: {}", e)))?;
		Ok(Self { pairs })
	}

	/// First value for a key, if present.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// All values for a key, in submission order.
	pub fn get_all(&self, key: &str) -> Vec<&str> {
		self.pairs
			.iter()
			.filter(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
			.collect()
	}

	/// Number of submitted pairs.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// True when the body carried no pairs.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}
