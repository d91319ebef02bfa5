//! Path patterns with `{name}` placeholders compiled to anchored regexes.

use regex::Regex;
use std::collections::HashMap;

/// Compiled path pattern.
///
/// `/campgrounds/{id}/reviews/{review_id}` matches a concrete path and
/// extracts the named segments. Placeholders match any single path
/// segment.
#[derive(Debug, Clone)]
pub struct PathPattern {
	raw: String,
	regex: Regex,
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compile a pattern.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::routing::PathPattern;
	///
	/// let pattern = PathPattern::new("/campgrounds/{id}").unwrap();
	/// assert!(pattern.is_match("/campgrounds/123"));
	/// assert!(!pattern.is_match("/campgrounds/123/edit"));
	///
	/// let params = pattern.extract_params("/campgrounds/123").unwrap();
	/// assert_eq!(params.get("id"), Some(&"123".to_string()));
	/// ```
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();

		for (i, segment) in pattern.split('/').enumerate() {
			if i > 0 {
				regex_str.push('/');
			}
			if let Some(name) = segment
				.strip_prefix('{')
				.and_then(|s| s.strip_suffix('}'))
			{
				param_names.push(name.to_string());
				regex_str.push_str("([^/]+)");
			} else {
				regex_str.push_str(&regex::escape(segment));
			}
		}
		regex_str.push('$');

		Ok(Self {
			raw: pattern.to_string(),
			regex: Regex::new(&regex_str)?,
			param_names,
		})
	}

	/// The original pattern string.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// True if the path matches this pattern.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Extract named parameters from a matching path.
	///
	/// Returns `None` when the path does not match.
	pub fn extract_params(&self, path: &str) -> Option<HashMap<String, String>> {
		let captures = self.regex.captures(path)?;
		let params = self
			.param_names
			.iter()
			.zip(captures.iter().skip(1))
			.filter_map(|(name, m)| m.map(|m| (name.clone(), m.as_str().to_string())))
			.collect();
		Some(params)
	}
}
