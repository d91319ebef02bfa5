//! Static pages.

use async_trait::async_trait;

use super::base_context;
use crate::exception::Result;
use crate::http::{Handler, Request, Response};
use crate::state::AppState;
use crate::templates;

/// GET / - home page.
pub struct HomePage {
	pub state: AppState,
}

#[async_trait]
impl Handler for HomePage {
	async fn handle(&self, request: Request) -> Result<Response> {
		let context = base_context(&self.state, &request);
		templates::render("home.html", &context)
	}
}
