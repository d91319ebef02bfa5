//! URL routing: path patterns and the route table.

pub mod pattern;
pub mod router;

pub use pattern::PathPattern;
pub use router::{Route, Router};
