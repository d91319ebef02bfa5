//! Persisted entities and their typed repositories.
//!
//! Two collections: `campgrounds` and `reviews`. A campground owns its
//! reviews by reference (a list of review ids). The attach and detach
//! sequences are each two separate writes with no transaction; the crash
//! window between them is a documented property of the data model.

pub mod campground;
pub mod review;

pub use campground::{Campground, CampgroundRepo};
pub use review::{Review, ReviewRepo};
