//! Form extraction and validation.
//!
//! Forms are extracted from the bracket-named fields of the HTML pages
//! (`campground[title]`, `review[rating]`) and validated as a whole:
//! `validate()` returns either the full typed payload or every violation
//! at once. The view layer turns a failure into a single 400 response
//! whose message joins all violations.

pub mod campground;
pub mod review;

pub use campground::{CampgroundForm, CampgroundPayload};
pub use review::{ReviewForm, ReviewPayload};
