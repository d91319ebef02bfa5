//! URL configuration: the full route table.

use hyper::Method;

use crate::routing::{Route, Router};
use crate::state::AppState;
use crate::views::campgrounds::{
	CampgroundCreate, CampgroundDelete, CampgroundEdit, CampgroundList, CampgroundNew,
	CampgroundShow, CampgroundUpdate,
};
use crate::views::pages::HomePage;
use crate::views::reviews::{ReviewCreate, ReviewDelete};

/// Wire the route table over the application state.
///
/// `/campgrounds/add` is registered before `/campgrounds/{id}` so the
/// literal segment wins over the placeholder.
pub fn routes(state: AppState) -> Router {
	let mut router = Router::new();

	router.add_route(
		Route::from_handler(Method::GET, "/", HomePage {
			state: state.clone(),
		})
		.with_name("home"),
	);

	router.add_route(
		Route::from_handler(Method::GET, "/campgrounds", CampgroundList {
			state: state.clone(),
		})
		.with_name("campgrounds-list"),
	);
	router.add_route(
		Route::from_handler(Method::GET, "/campgrounds/add", CampgroundNew {
			state: state.clone(),
		})
		.with_name("campgrounds-new"),
	);
	router.add_route(
		Route::from_handler(Method::POST, "/campgrounds", CampgroundCreate {
			state: state.clone(),
		})
		.with_name("campgrounds-create"),
	);
	router.add_route(
		Route::from_handler(Method::GET, "/campgrounds/{id}", CampgroundShow {
			state: state.clone(),
		})
		.with_name("campgrounds-show"),
	);
	router.add_route(
		Route::from_handler(Method::GET, "/campgrounds/{id}/edit", CampgroundEdit {
			state: state.clone(),
		})
		.with_name("campgrounds-edit"),
	);
	router.add_route(
		Route::from_handler(Method::PUT, "/campgrounds/{id}", CampgroundUpdate {
			state: state.clone(),
		})
		.with_name("campgrounds-update"),
	);
	router.add_route(
		Route::from_handler(Method::DELETE, "/campgrounds/{id}", CampgroundDelete {
			state: state.clone(),
		})
		.with_name("campgrounds-delete"),
	);

	router.add_route(
		Route::from_handler(Method::POST, "/campgrounds/{id}/reviews", ReviewCreate {
			state: state.clone(),
		})
		.with_name("reviews-create"),
	);
	router.add_route(
		Route::from_handler(
			Method::DELETE,
			"/campgrounds/{id}/reviews/{review_id}",
			ReviewDelete { state },
		)
		.with_name("reviews-delete"),
	);

	router
}
