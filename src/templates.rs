//! Server-side HTML rendering.
//!
//! Templates are compiled once into a lazily initialized Tera instance
//! from sources embedded at build time.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::exception::{HttpError, Result};
use crate::http::Response;

static TERA: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();
	tera.add_raw_templates(vec![
		("base.html", include_str!("../templates/base.html")),
		("home.html", include_str!("../templates/home.html")),
		("error.html", include_str!("../templates/error.html")),
		(
			"campgrounds/index.html",
			include_str!("../templates/campgrounds/index.html"),
		),
		(
			"campgrounds/show.html",
			include_str!("../templates/campgrounds/show.html"),
		),
		(
			"campgrounds/add.html",
			include_str!("../templates/campgrounds/add.html"),
		),
		(
			"campgrounds/edit.html",
			include_str!("../templates/campgrounds/edit.html"),
		),
	])
	.expect("failed to register templates");
	tera
});

/// Render a template to a string.
pub fn render_to_string(name: &str, context: &Context) -> Result<String> {
	TERA.render(name, context)
		.map_err(|e| HttpError::Template(e.to_string()))
}

/// Render a template into a 200 `text/html` response.
pub fn render(name: &str, context: &Context) -> Result<Response> {
	Ok(Response::html(render_to_string(name, context)?))
}
