//! Campground form.

use crate::http::FormData;

/// Raw campground fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct CampgroundForm {
	pub title: Option<String>,
	pub location: Option<String>,
	pub price: Option<String>,
	pub description: Option<String>,
	pub image: Option<String>,
}

/// Validated campground fields.
#[derive(Debug, Clone)]
pub struct CampgroundPayload {
	pub title: String,
	pub location: String,
	pub price: f64,
	pub description: String,
	pub image: String,
}

impl CampgroundForm {
	/// Extract the campground fields from a form body.
	pub fn from_form(form: &FormData) -> Self {
		let field = |name: &str| {
			form.get(&format!("campground[{}]", name))
				.map(|v| v.trim().to_string())
		};
		Self {
			title: field("title"),
			location: field("location"),
			price: field("price"),
			description: field("description"),
			image: field("image"),
		}
	}

	/// Validate the submitted fields.
	///
	/// No partial success: either every rule holds and the typed payload
	/// is returned, or every violation is reported.
	///
	/// # Examples
	///
	/// ```
	/// use campsite::forms::CampgroundForm;
	///
	/// let form = CampgroundForm {
	///     title: Some("Pine Ridge".into()),
	///     ..Default::default()
	/// };
	/// let violations = form.validate().unwrap_err();
	/// assert!(violations.iter().any(|v| v.contains("price")));
	/// ```
	pub fn validate(self) -> Result<CampgroundPayload, Vec<String>> {
		let mut violations = Vec::new();

		let title = require_text(self.title, "campground.title", &mut violations);
		let location = require_text(self.location, "campground.location", &mut violations);
		let description = require_text(self.description, "campground.description", &mut violations);
		let image = require_text(self.image, "campground.image", &mut violations);

		let price = match self.price.as_deref().filter(|p| !p.is_empty()) {
			None => {
				violations.push("campground.price is required".to_string());
				None
			}
			Some(raw) => match raw.parse::<f64>() {
				Err(_) => {
					violations.push("campground.price must be a number".to_string());
					None
				}
				Ok(price) if price < 0.0 => {
					violations.push("campground.price must be at least 0".to_string());
					None
				}
				Ok(price) => Some(price),
			},
		};

		if !violations.is_empty() {
			return Err(violations);
		}

		Ok(CampgroundPayload {
			title: title.expect("validated"),
			location: location.expect("validated"),
			price: price.expect("validated"),
			description: description.expect("validated"),
			image: image.expect("validated"),
		})
	}
}

fn require_text(
	value: Option<String>,
	name: &str,
	violations: &mut Vec<String>,
) -> Option<String> {
	match value.filter(|v| !v.is_empty()) {
		Some(v) => Some(v),
		None => {
			violations.push(format!("{} is required", name));
			None
		}
	}
}
