//! Review form.

use crate::http::FormData;

/// Raw review fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
	pub rating: Option<String>,
	pub body: Option<String>,
}

/// Validated review fields.
#[derive(Debug, Clone)]
pub struct ReviewPayload {
	pub rating: i32,
	pub body: String,
}

impl ReviewForm {
	/// Extract the review fields from a form body.
	pub fn from_form(form: &FormData) -> Self {
		Self {
			rating: form.get("review[rating]").map(|v| v.trim().to_string()),
			body: form.get("review[body]").map(|v| v.trim().to_string()),
		}
	}

	/// Validate the submitted fields. Reports every violation at once.
	pub fn validate(self) -> Result<ReviewPayload, Vec<String>> {
		let mut violations = Vec::new();

		let rating = match self.rating.as_deref().filter(|r| !r.is_empty()) {
			None => {
				violations.push("review.rating is required".to_string());
				None
			}
			Some(raw) => match raw.parse::<i32>() {
				Err(_) => {
					violations.push("review.rating must be a whole number".to_string());
					None
				}
				Ok(rating) if !(1..=5).contains(&rating) => {
					violations.push("review.rating must be between 1 and 5".to_string());
					None
				}
				Ok(rating) => Some(rating),
			},
		};

		let body = match self.body.filter(|b| !b.is_empty()) {
			Some(body) => Some(body),
			None => {
				violations.push("review.body is required".to_string());
				None
			}
		};

		if !violations.is_empty() {
			return Err(violations);
		}

		Ok(ReviewPayload {
			rating: rating.expect("validated"),
			body: body.expect("validated"),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_valid_review() {
		let form = ReviewForm {
			rating: Some("4".to_string()),
			body: Some("Quiet and clean".to_string()),
		};
		let payload = form.validate().unwrap();
		assert_eq!(payload.rating, 4);
		assert_eq!(payload.body, "Quiet and clean");
	}

	#[rstest]
	#[case("0")]
	#[case("6")]
	#[case("-3")]
	fn test_rating_out_of_range(#[case] rating: &str) {
		let form = ReviewForm {
			rating: Some(rating.to_string()),
			body: Some("x".to_string()),
		};
		let violations = form.validate().unwrap_err();
		assert_eq!(violations, vec!["review.rating must be between 1 and 5"]);
	}

	#[rstest]
	fn test_rating_must_be_integer() {
		let form = ReviewForm {
			rating: Some("4.5".to_string()),
			body: Some("x".to_string()),
		};
		let violations = form.validate().unwrap_err();
		assert_eq!(violations, vec!["review.rating must be a whole number"]);
	}

	#[rstest]
	fn test_empty_form_reports_both_fields() {
		let violations = ReviewForm::default().validate().unwrap_err();
		assert_eq!(violations.len(), 2);
		assert!(violations.iter().any(|v| v.contains("rating")));
		assert!(violations.iter().any(|v| v.contains("body")));
	}

	#[rstest]
	fn test_extraction_from_bracket_fields() {
		let data =
			crate::http::FormData::parse(b"review%5Brating%5D=5&review%5Bbody%5D=lovely").unwrap();
		let form = ReviewForm::from_form(&data);
		assert_eq!(form.rating.as_deref(), Some("5"));
		assert_eq!(form.body.as_deref(), Some("lovely"));
	}
}
